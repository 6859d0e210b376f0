//! Pet list filter.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Which pets `list_pets` returns.
///
/// Sent as the `filter` query parameter. The parameter is always present;
/// [`PetFilter::All`] sends it empty, as the server expects.
///
/// ```rust
/// use petfriends::PetFilter;
///
/// assert_eq!(PetFilter::All.as_str(), "");
/// assert_eq!("my_pets".parse::<PetFilter>().unwrap(), PetFilter::MyPets);
/// assert!("everything".parse::<PetFilter>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PetFilter {
    /// Every pet on the server.
    #[default]
    All,

    /// Only pets owned by the authenticated user.
    MyPets,
}

impl PetFilter {
    /// Returns the wire value of the filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

impl fmt::Display for PetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(PetFilter::All),
            "my_pets" => Ok(PetFilter::MyPets),
            other => Err(Error::invalid_argument(format!(
                "unknown pet filter {:?}, expected \"\" or \"my_pets\"",
                other
            ))),
        }
    }
}
