use shared::{RegisterRequest, TokenResponse};
use web_sys::FormData;

use crate::api::client::{ApiClient, ApiError};

/// The login endpoint takes the credentials as multipart form fields, not
/// JSON, matching the backend's OAuth2 password form.
pub async fn login(
    api: &ApiClient,
    username: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    let form = FormData::new().expect("FormData should construct");
    form.append_with_str("username", username)
        .expect("FormData append should not fail");
    form.append_with_str("password", password)
        .expect("FormData append should not fail");
    let response = api.post_form::<TokenResponse>("/auth/login", form).await?;
    log::info!("Api auth login, username={username}");
    Ok(response)
}

pub async fn register(
    api: &ApiClient,
    request: &RegisterRequest,
) -> Result<TokenResponse, ApiError> {
    let response = api
        .post_json::<TokenResponse>("/auth/register", request)
        .await?;
    log::info!("Api auth register, email={email}", email = request.email);
    Ok(response)
}
