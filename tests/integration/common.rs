//! Common harness for the live suite.

use std::sync::Once;

use anyhow::{Context, Result};
use petfriends::testing::TestContext;
use petfriends::{ApiKey, Pet, PetDetails};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs a `RUST_LOG`-driven subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A fresh context with an authenticated key.
pub async fn setup() -> Result<(TestContext, ApiKey)> {
    init_tracing();
    let ctx = TestContext::new().context("PETFRIENDS_EMAIL and PETFRIENDS_PASSWORD must be set")?;
    let key = ctx
        .api_key()
        .await
        .context("fixture account should authenticate")?;
    Ok((ctx, key))
}

/// Returns the first pet the account owns, creating one when there is none.
pub async fn first_own_pet(ctx: &TestContext, key: &ApiKey) -> Result<Pet> {
    let pets = ctx.my_pets(key).await?;
    if let Some(pet) = pets.pets.into_iter().next() {
        return Ok(pet);
    }

    let response = ctx
        .client
        .create_pet(key, &PetDetails::new("Hamam", "Cat", "10"), ctx.photo())
        .await?;
    anyhow::ensure!(
        response.is_ok(),
        "creating a fixture pet answered {}",
        response.status_code()
    );
    Ok(response.pet()?)
}
