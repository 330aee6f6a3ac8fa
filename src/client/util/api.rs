//! REST client for the Palm backend.
//!
//! Transport is `reqwasm` on the web target. Every endpoint goes through [`send`] and then
//! decodes an [`ApiResponse`], so status handling stays testable without a browser.

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{config::Config, error::ApiError},
    model::{
        auth::{SignInDto, SignInResponseDto, SignUpDto},
        user::UserDto,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub authorization: Option<String>,
    pub body: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            authorization: None,
            body: None,
        }
    }

    fn authorized(mut self, authorization: Option<String>) -> Result<Self, ApiError> {
        self.authorization = Some(authorization.ok_or(ApiError::Unauthorized)?);
        Ok(self)
    }

    fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Request(format!("Failed to encode request body: {}", e)))?;
        self.body = Some(body);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn error(self) -> ApiError {
        ApiError::from_response(self.status, &self.body)
    }

    /// Fails unless the status is 2xx, discarding the body.
    pub fn ok(self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(self.error());
        }

        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like [`ApiResponse::json`] but maps 204 and 404 to `None`.
    pub fn json_optional<T: DeserializeOwned>(self) -> Result<Option<T>, ApiError> {
        match self.status {
            204 | 404 => Ok(None),
            _ => self.json().map(Some),
        }
    }
}

#[cfg(feature = "web")]
async fn send(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    use reqwasm::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    if let Some(authorization) = &request.authorization {
        builder = builder.header("Authorization", authorization);
    }
    if let Some(body) = request.body {
        builder = builder
            .header("Content-Type", "application/json")
            .body(body);
    }

    let response = builder.send().await.map_err(|e| {
        tracing::error!(url = %request.url, "Failed to send request: {}", e);

        ApiError::Request(e.to_string())
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if status >= 500 {
        tracing::error!(url = %request.url, status, "Palm API returned a server error");
    }

    Ok(ApiResponse { status, body })
}

#[cfg(not(feature = "web"))]
async fn send(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    tracing::error!(url = %request.url, "No HTTP transport for this platform");

    Err(ApiError::Unsupported)
}

/// Exchanges credentials for a bearer token.
pub async fn sign_in(
    config: &Config,
    credentials: &SignInDto,
) -> Result<SignInResponseDto, ApiError> {
    let request = ApiRequest::new(Method::Post, config.endpoint("/signin")).json(credentials)?;

    send(request).await?.json()
}

fn sign_up_request(
    config: &Config,
    path: &str,
    account: &SignUpDto,
) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, config.endpoint(path)).json(account)
}

/// Registers a new customer account.
pub async fn sign_up(config: &Config, account: &SignUpDto) -> Result<(), ApiError> {
    let request = sign_up_request(config, "/signup", account)?;

    send(request).await?.ok()
}

/// Registers a new account with the admin role.
pub async fn sign_up_admin(config: &Config, account: &SignUpDto) -> Result<(), ApiError> {
    let request = sign_up_request(config, "/signupadmin", account)?;

    send(request).await?.ok()
}

fn list_request(
    config: &Config,
    path: &str,
    authorization: Option<String>,
) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Get, config.endpoint(path)).authorized(authorization)
}

/// Lists every user.
///
/// The backend answers 404 only when its query fails, so that status is an error here.
pub async fn get_users(
    config: &Config,
    authorization: Option<String>,
) -> Result<Vec<UserDto>, ApiError> {
    let request = list_request(config, "/users", authorization)?;

    send(request).await?.json()
}

/// Lists users holding the admin role.
pub async fn get_admins(
    config: &Config,
    authorization: Option<String>,
) -> Result<Vec<UserDto>, ApiError> {
    let request = list_request(config, "/admins", authorization)?;

    send(request).await?.json()
}

pub async fn get_user(
    config: &Config,
    authorization: Option<String>,
    id: u32,
) -> Result<Option<UserDto>, ApiError> {
    let request = ApiRequest::new(Method::Get, config.endpoint(&format!("/user/{}", id)))
        .authorized(authorization)?;

    send(request).await?.json_optional()
}

pub async fn update_user(
    config: &Config,
    authorization: Option<String>,
    user: &UserDto,
) -> Result<(), ApiError> {
    let request = ApiRequest::new(Method::Put, config.endpoint(&format!("/user/{}", user.id)))
        .authorized(authorization)?
        .json(user)?;

    send(request).await?.ok()
}

pub async fn delete_user(
    config: &Config,
    authorization: Option<String>,
    id: u32,
) -> Result<(), ApiError> {
    let request = ApiRequest::new(Method::Delete, config.endpoint(&format!("/user/{}", id)))
        .authorized(authorization)?;

    send(request).await?.ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::auth::Role;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    /// Tests decoding a successful sign-in body.
    ///
    /// Expected: Ok with the token and role from the body
    #[test]
    fn decodes_sign_in_response() {
        let result = response(
            200,
            r#"{"token_type":"Bearer","token":"abc","id":3,"role":"admin"}"#,
        )
        .json::<SignInResponseDto>()
        .unwrap();

        assert_eq!(result.token, "abc");
        assert_eq!(result.id, 3);
        assert_eq!(result.role, Role::Admin);
    }

    /// Tests surfacing the backend error message on a failed request.
    ///
    /// Expected: Err(ApiError::Status) carrying the `error` field
    #[test]
    fn surfaces_backend_error_message() {
        let result = response(400, r#"{"error":"Email is already registered"}"#).ok();

        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 400,
                message: "Email is already registered".to_string()
            })
        );
    }

    /// Tests falling back to the raw body when it is not an error object.
    ///
    /// Expected: Err(ApiError::Status) with the body text
    #[test]
    fn falls_back_to_body_text() {
        let result = response(502, "Bad Gateway\n").json::<Vec<UserDto>>();

        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 502,
                message: "Bad Gateway".to_string()
            })
        );
    }

    /// Tests mapping 401 to the unauthorized error.
    ///
    /// Expected: Err(ApiError::Unauthorized)
    #[test]
    fn maps_unauthorized() {
        let result = response(401, r#"{"error":"unauthorized"}"#).ok();
        assert_eq!(result, Err(ApiError::Unauthorized));
    }

    const ADMIN_JSON: &str = r#"[{"id":1,"first_name":"Somchai","last_name":"Dee","email":"admin@palm.test","phone_number":"0800000000","birthday":"1990-01-01T00:00:00Z","role":"admin"}]"#;

    fn account() -> SignUpDto {
        SignUpDto {
            first_name: "Somchai".to_string(),
            last_name: "Dee".to_string(),
            email: "admin@palm.test".to_string(),
            phone_number: "0800000000".to_string(),
            password: "secret".to_string(),
            birthday: parse_birthday("1990-01-01"),
        }
    }

    fn parse_birthday(value: &str) -> chrono::DateTime<chrono::Utc> {
        crate::client::routes::customer::parse_birthday(value).unwrap()
    }

    /// Tests that a failed user listing is reported instead of read as empty.
    ///
    /// Verifies that a 404 carrying an error body from the users endpoint surfaces the
    /// backend message.
    ///
    /// Expected: Err(ApiError::Status) with status 404
    #[test]
    fn user_listing_404_is_an_error() {
        let result = response(404, r#"{"error":"no such table: users"}"#).json::<Vec<UserDto>>();

        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 404,
                message: "no such table: users".to_string()
            })
        );
    }

    /// Tests the admin sign-up request.
    ///
    /// Expected: POST to `/signupadmin` with the account as JSON
    #[test]
    fn builds_admin_sign_up_request() {
        let config = Config::default();
        let request = sign_up_request(&config, "/signupadmin", &account()).unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://localhost:8000/signupadmin");
        assert_eq!(request.authorization, None);
        let body: serde_json::Value = serde_json::from_str(&request.body.unwrap()).unwrap();
        assert_eq!(body["email"], "admin@palm.test");
        assert_eq!(body["birthday"], "1990-01-01T00:00:00Z");
    }

    /// Tests decoding the admin sign-up response.
    ///
    /// Expected: Ok on 201, Err(ApiError::Status) with the message on a 409 conflict
    #[test]
    fn decodes_admin_sign_up_response() {
        assert_eq!(
            response(201, r#"{"message":"Sign-up successful"}"#).ok(),
            Ok(())
        );
        assert_eq!(
            response(409, r#"{"error":"Email is already registered"}"#).ok(),
            Err(ApiError::Status {
                status: 409,
                message: "Email is already registered".to_string()
            })
        );
    }

    /// Tests the admin listing request.
    ///
    /// Expected: authorized GET to `/admins`
    #[test]
    fn builds_admin_listing_request() {
        let config = Config::default();
        let request =
            list_request(&config, "/admins", Some("Bearer abc".to_string())).unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://localhost:8000/admins");
        assert_eq!(request.authorization.as_deref(), Some("Bearer abc"));
    }

    /// Tests decoding the admin listing.
    ///
    /// Expected: one user with the admin role
    #[test]
    fn decodes_admin_listing() {
        let admins = response(200, ADMIN_JSON).json::<Vec<UserDto>>().unwrap();

        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].role, Role::Admin);
        assert_eq!(admins[0].full_name(), "Somchai Dee");
    }

    /// Tests that 204 and 404 decode to nothing for optional lookups.
    ///
    /// Expected: Ok(None) for both
    #[test]
    fn optional_lookup_handles_missing_user() {
        assert_eq!(response(204, "{}").json_optional::<UserDto>(), Ok(None));
        assert_eq!(
            response(404, r#"{"error":"record not found"}"#).json_optional::<UserDto>(),
            Ok(None)
        );
    }

    /// Tests reporting a malformed success body.
    ///
    /// Expected: Err(ApiError::Decode)
    #[test]
    fn reports_malformed_body() {
        let result = response(200, "not json").json::<Vec<UserDto>>();
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    /// Tests that protected requests are refused without a session.
    ///
    /// Expected: Err(ApiError::Unauthorized) before anything is sent
    #[test]
    fn protected_request_requires_authorization() {
        let result = ApiRequest::new(Method::Get, "http://localhost:8000/users".to_string())
            .authorized(None);
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}
