//! Pet lifecycle against the live deployment.

use anyhow::Result;
use petfriends::testing::{Expectation, TestContext};
use petfriends::{ApiKey, ErrorKind, PetDetails, PetFilter};

use crate::common::{first_own_pet, init_tracing, setup};

#[tokio::test]
async fn test_create_pet_with_photo() -> Result<()> {
    let (ctx, key) = setup().await?;
    let details = PetDetails::new("Tuzik", "Shaggy", "33");

    let response = ctx.client.create_pet(&key, &details, ctx.photo()).await?;

    Expectation::Accepted.check(&response)?;
    let pet = response.pet()?;
    assert_eq!(pet.name, "Tuzik");
    assert!(pet.has_photo());
    Ok(())
}

#[tokio::test]
async fn test_created_pet_is_listed_unchanged() -> Result<()> {
    let (ctx, key) = setup().await?;
    let details = PetDetails::new("Тузик", "Лохматый", "33");

    let created = ctx
        .client
        .create_pet(&key, &details, ctx.photo())
        .await?
        .pet()?;
    let listed = ctx.my_pets(&key).await?;
    let pet = listed
        .find(&created.id)
        .ok_or_else(|| anyhow::anyhow!("pet {} missing from my_pets", created.id))?;

    assert_eq!(pet.name, details.name);
    assert_eq!(pet.animal_type, details.animal_type);
    assert_eq!(pet.age, details.age);
    Ok(())
}

#[tokio::test]
async fn test_my_pets_only_lists_own_pets() -> Result<()> {
    let (ctx, key) = setup().await?;
    let own = first_own_pet(&ctx, &key).await?;

    let mine = ctx.my_pets(&key).await?;
    let all = ctx.client.list_pets(&key, PetFilter::All).await?.pets()?;

    assert!(mine.contains_id(&own.id));
    if let Some(owner) = own.user_id.as_deref() {
        assert!(mine
            .pets
            .iter()
            .all(|pet| pet.user_id.as_deref().is_none_or(|id| id == owner)));
    }
    assert!(all.pets.len() >= mine.pets.len());
    Ok(())
}

#[tokio::test]
async fn test_create_pet_without_photo() -> Result<()> {
    let (ctx, key) = setup().await?;

    let response = ctx
        .client
        .create_pet_without_photo(&key, &PetDetails::new("Моня", "Сибиряк", "7"))
        .await?;

    Expectation::Accepted.check(&response)?;
    assert_eq!(response.pet()?.name, "Моня");
    Ok(())
}

#[tokio::test]
async fn test_update_own_pet() -> Result<()> {
    let (ctx, key) = setup().await?;
    let pet = first_own_pet(&ctx, &key).await?;

    let response = ctx
        .client
        .update_pet(&key, &pet.id, &PetDetails::new("Чуня", "Кошак", 9))
        .await?;

    Expectation::Accepted.check(&response)?;
    assert_eq!(response.pet()?.name, "Чуня");
    Ok(())
}

#[tokio::test]
async fn test_attach_photo_to_own_pet() -> Result<()> {
    let (ctx, key) = setup().await?;
    let created = ctx
        .client
        .create_pet_without_photo(&key, &PetDetails::new("Murka", "Cat", "2"))
        .await?
        .pet()?;

    let response = ctx.client.attach_photo(&key, &created.id, ctx.photo()).await?;

    Expectation::Accepted.check(&response)?;
    assert!(response.contains_key("pet_photo"));
    assert!(response.pet()?.photo_bytes()?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_delete_own_pet() -> Result<()> {
    let (ctx, key) = setup().await?;
    let pet = first_own_pet(&ctx, &key).await?;

    let response = ctx.client.delete_pet(&key, &pet.id).await?;

    Expectation::Accepted.check(&response)?;
    assert!(!ctx.my_pets(&key).await?.contains_id(&pet.id));
    Ok(())
}

#[tokio::test]
async fn test_delete_twice_fails_second_time() -> Result<()> {
    let (ctx, key) = setup().await?;
    let pet = ctx
        .client
        .create_pet_without_photo(&key, &PetDetails::new("Once", "Cat", "1"))
        .await?
        .pet()?;

    let first = ctx.client.delete_pet(&key, &pet.id).await?;
    let second = ctx.client.delete_pet(&key, &pet.id).await?;

    Expectation::Accepted.check(&first)?;
    Expectation::Rejected.check(&second)?;
    Ok(())
}

#[tokio::test]
async fn test_create_pet_with_empty_photo_path() -> Result<()> {
    init_tracing();
    let ctx = TestContext::new()?;

    let err = ctx
        .client
        .create_pet(&ApiKey::new("unused"), &PetDetails::new("Румба", "Сиамский", "1"), "")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    Ok(())
}
