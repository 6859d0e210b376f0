//! Authentication against the live deployment.

use anyhow::Result;
use petfriends::testing::{Expectation, Settings, TestContext};
use petfriends::{ApiKey, Credentials, PetFilter};
use test_case::test_case;

use crate::common::{init_tracing, setup};

fn valid(s: &Settings) -> &Credentials {
    &s.valid
}

fn invalid_email(s: &Settings) -> &Credentials {
    &s.invalid_email
}

fn invalid_password(s: &Settings) -> &Credentials {
    &s.invalid_password
}

fn blank(s: &Settings) -> &Credentials {
    &s.blank
}

#[test_case(valid, Expectation::Accepted ; "registered account")]
#[test_case(invalid_email, Expectation::Rejected ; "unknown email")]
#[test_case(invalid_password, Expectation::Rejected ; "wrong password")]
#[test_case(blank, Expectation::Rejected ; "empty fields")]
#[tokio::test]
async fn test_authenticate(pick: fn(&Settings) -> &Credentials, expected: Expectation) {
    init_tracing();
    let ctx = TestContext::new().expect("fixture settings should be set");

    let response = ctx
        .client
        .authenticate(pick(&ctx.settings))
        .await
        .expect("server should answer");

    // A rejection may still be 200 without a key; only the key matters then.
    match expected {
        Expectation::Rejected => {
            assert!(!response.is_ok() || !response.contains_key("key"));
        }
        _ => {
            expected.check(&response).expect("outcome should match");
            assert!(response.contains_key("key"));
        }
    }
}

#[tokio::test]
async fn test_list_all_pets_with_valid_key() -> Result<()> {
    let (ctx, key) = setup().await?;

    let response = ctx.client.list_pets(&key, PetFilter::All).await?;

    Expectation::Accepted.check(&response)?;
    assert!(!response.pets()?.pets.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_list_pets_with_invalid_key() -> Result<()> {
    init_tracing();
    let ctx = TestContext::new()?;

    let response = ctx
        .client
        .list_pets(&ApiKey::new("12345"), PetFilter::All)
        .await?;

    Expectation::Rejected.check(&response)?;
    Ok(())
}
