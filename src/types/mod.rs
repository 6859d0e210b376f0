//! Data types for the PetFriends API.
//!
//! - [`Pet`]: A pet record as returned by the server
//! - [`PetDetails`]: The name / animal type / age triple sent on create and update
//! - [`PetFilter`]: Selects all pets or only the caller's own
//! - [`PetPhoto`]: A photo file resolved on disk, ready to be streamed

mod details;
mod filter;
mod pet;
mod photo;

pub use details::PetDetails;
pub use filter::PetFilter;
pub use pet::{Pet, PetList};
pub use photo::PetPhoto;
