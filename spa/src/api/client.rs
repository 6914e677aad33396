use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use web_sys::FormData;

use crate::auth::TokenStore;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx reply, carrying the HTTP status and the normalized body.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Value },
    #[error(transparent)]
    Network(#[from] gloo_net::Error),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Server-supplied `detail` message, when the error body carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.get("detail").and_then(Value::as_str),
            _ => None,
        }
    }

    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.detail().unwrap_or(fallback)
    }
}

/// Issues requests against the REST backend, attaching the bearer token from
/// the injected store and normalizing every reply into one shape. A single
/// best-effort attempt per call, no retries and no timeouts.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: Rc<dyn TokenStore>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.into(),
            tokens,
        }
    }

    pub fn tokens(&self) -> &Rc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorize(Request::get(&self.url(path))).send().await?;
        decode(normalize(response).await?)
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let request = self.authorize(Request::post(&self.url(path))).json(body)?;
        decode(normalize(request.send().await?).await?)
    }

    /// Body-less POST, for endpoints that act on the path alone.
    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .send()
            .await?;
        decode(normalize(response).await?)
    }

    /// Multipart submission: the `FormData` passes through untouched and the
    /// browser picks the content type.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let request = self.authorize(Request::post(&self.url(path))).body(form)?;
        decode(normalize(request.send().await?).await?)
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::patch(&self.url(path)))
            .send()
            .await?;
        decode(normalize(response).await?)
    }
}

async fn normalize(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    status_result(status, parse_body(&text))
}

/// Text first, JSON if it parses: empty bodies become null, non-JSON bodies
/// come back as plain strings so rendering stays resilient.
fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

fn status_result(status: u16, body: Value) -> Result<Value, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Status { status, body })
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_becomes_null() {
        assert_eq!(parse_body(""), Value::Null);
    }

    #[test]
    fn json_body_is_parsed() {
        assert_eq!(
            parse_body(r#"{"detail":"Session llena"}"#),
            json!({"detail": "Session llena"})
        );
    }

    #[test]
    fn non_json_body_degrades_to_raw_text() {
        assert_eq!(
            parse_body("<html>gateway timeout</html>"),
            Value::String("<html>gateway timeout</html>".to_owned())
        );
    }

    #[test]
    fn success_statuses_yield_the_body() {
        let body = status_result(204, Value::Null).unwrap();
        assert_eq!(body, Value::Null);
    }

    #[test]
    fn error_statuses_carry_status_and_body() {
        let error = status_result(400, json!({"detail": "Credenciales incorrectas"})).unwrap_err();
        match error {
            ApiError::Status { status, ref body } => {
                assert_eq!(status, 400);
                assert_eq!(body["detail"], "Credenciales incorrectas");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(error.detail(), Some("Credenciales incorrectas"));
    }

    #[test]
    fn detail_falls_back_on_non_object_bodies() {
        let error = status_result(502, Value::String("bad gateway".to_owned())).unwrap_err();
        assert_eq!(error.detail(), None);
        assert_eq!(error.detail_or("Error en login"), "Error en login");
    }

    #[test]
    fn decode_mismatch_is_a_decode_error() {
        let result: Result<Vec<i32>, ApiError> = decode(json!({"not": "a list"}));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
