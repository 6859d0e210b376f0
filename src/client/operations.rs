//! PetFriends API operations.

use std::path::Path;

use reqwest::multipart::Form;

use super::Client;
use super::inner::ClientInner;
use crate::auth::{ApiKey, Credentials};
use crate::response::ApiResponse;
use crate::types::{PetDetails, PetFilter, PetPhoto};
use crate::Error;

/// Multipart field carrying the photo file.
const PHOTO_FIELD: &str = "pet_photo";

impl Client {
    /// Exchanges credentials for an API key.
    ///
    /// Sends `GET api/key` with `email` and `password` headers. On success
    /// the body is `{"key": "..."}`; use [`ApiResponse::api_key`] to
    /// extract it. Rejected credentials come back as a non-200 response,
    /// not as an error.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<ApiResponse, Error> {
        let inner = self.inner();
        let url = inner.build_url("api/key")?;
        let headers = ClientInner::credential_headers(credentials)?;

        inner
            .execute("authenticate", inner.http_client.get(url).headers(headers))
            .await
    }

    /// Lists pets.
    ///
    /// Sends `GET api/pets?filter=<filter>`. The body holds a `pets` array in
    /// server order; [`ApiResponse::pets`] parses it.
    pub async fn list_pets(&self, key: &ApiKey, filter: PetFilter) -> Result<ApiResponse, Error> {
        let inner = self.inner();
        let mut url = inner.build_url("api/pets")?;
        url.query_pairs_mut().append_pair("filter", filter.as_str());
        let headers = ClientInner::key_headers(key)?;

        inner
            .execute("list_pets", inner.http_client.get(url).headers(headers))
            .await
    }

    /// Creates a pet with a photo.
    ///
    /// The photo path is resolved to an absolute path before anything is
    /// sent; a missing or non-file path fails locally without a request.
    /// The file is streamed into the `pet_photo` multipart part and closed
    /// when the request completes.
    pub async fn create_pet(
        &self,
        key: &ApiKey,
        details: &PetDetails,
        photo_path: impl AsRef<Path>,
    ) -> Result<ApiResponse, Error> {
        let photo = PetPhoto::resolve(photo_path).await?;
        let inner = self.inner();
        let url = inner.build_url("api/pets")?;
        let headers = ClientInner::key_headers(key)?;
        let form = details_form(details).part(PHOTO_FIELD, photo.into_part().await?);

        inner
            .execute(
                "create_pet",
                inner.http_client.post(url).headers(headers).multipart(form),
            )
            .await
    }

    /// Creates a pet without a photo.
    ///
    /// Sends `POST api/create_pet_simple` with the three text fields only.
    pub async fn create_pet_without_photo(
        &self,
        key: &ApiKey,
        details: &PetDetails,
    ) -> Result<ApiResponse, Error> {
        let inner = self.inner();
        let url = inner.build_url("api/create_pet_simple")?;
        let headers = ClientInner::key_headers(key)?;

        inner
            .execute(
                "create_pet_without_photo",
                inner
                    .http_client
                    .post(url)
                    .headers(headers)
                    .multipart(details_form(details)),
            )
            .await
    }

    /// Replaces the name, animal type and age of a pet.
    pub async fn update_pet(
        &self,
        key: &ApiKey,
        pet_id: &str,
        details: &PetDetails,
    ) -> Result<ApiResponse, Error> {
        let inner = self.inner();
        let url = inner.pet_url("api/pets/", pet_id)?;
        let headers = ClientInner::key_headers(key)?;

        inner
            .execute(
                "update_pet",
                inner
                    .http_client
                    .put(url)
                    .headers(headers)
                    .multipart(details_form(details)),
            )
            .await
    }

    /// Sets the photo of an existing pet.
    ///
    /// Same file handling as [`create_pet`](Self::create_pet).
    pub async fn attach_photo(
        &self,
        key: &ApiKey,
        pet_id: &str,
        photo_path: impl AsRef<Path>,
    ) -> Result<ApiResponse, Error> {
        let photo = PetPhoto::resolve(photo_path).await?;
        let inner = self.inner();
        let url = inner.pet_url("api/pets/set_photo/", pet_id)?;
        let headers = ClientInner::key_headers(key)?;
        let form = Form::new().part(PHOTO_FIELD, photo.into_part().await?);

        inner
            .execute(
                "attach_photo",
                inner.http_client.post(url).headers(headers).multipart(form),
            )
            .await
    }

    /// Deletes a pet.
    ///
    /// The server usually answers 200 with an empty body, which arrives as
    /// [`ResponseBody::Empty`](crate::ResponseBody::Empty).
    pub async fn delete_pet(&self, key: &ApiKey, pet_id: &str) -> Result<ApiResponse, Error> {
        let inner = self.inner();
        let url = inner.pet_url("api/pets/", pet_id)?;
        let headers = ClientInner::key_headers(key)?;

        inner
            .execute("delete_pet", inner.http_client.delete(url).headers(headers))
            .await
    }
}

fn details_form(details: &PetDetails) -> Form {
    details
        .form_fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| {
            form.text(name, value.to_string())
        })
}
