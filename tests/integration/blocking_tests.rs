//! The synchronous facade against the live deployment.

use anyhow::Result;
use petfriends::testing::{Expectation, Settings};
use petfriends::{ClientBuilder, PetDetails, PetFilter};

use crate::common::init_tracing;

#[test]
fn test_blocking_lifecycle() -> Result<()> {
    init_tracing();
    let settings = Settings::from_env()?;
    let client = ClientBuilder::from_env()?.build_blocking()?;

    let key = client.authenticate(&settings.valid)?.api_key()?;
    let created = client.create_pet_without_photo(&key, &PetDetails::new("Sync", "Cat", "3"))?;
    Expectation::Accepted.check(&created)?;
    let pet = created.pet()?;

    let mine = client.list_pets(&key, PetFilter::MyPets)?.pets()?;
    assert!(mine.contains_id(&pet.id));

    Expectation::Accepted.check(&client.delete_pet(&key, &pet.id)?)?;
    Ok(())
}
