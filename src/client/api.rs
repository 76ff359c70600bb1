/**
 * API Client
 *
 * HTTP client for the inspecta backend. Holds the session cookie in a
 * reqwest cookie store so every call after login is automatically
 * credentialed, the same way a browser would be.
 *
 * # Error Mapping
 *
 * Responses map onto `ClientError` so callers can recover per taxonomy:
 * validation failures keep the user on the form with field messages,
 * authorization failures trigger the login redirect, everything else is a
 * transient notification.
 */
use serde::Serialize;
use thiserror::Error;

use crate::backend::auth::handlers::types::{
    CheckResponse, LoginRequest, RegisterRequest, UserResponse,
};
use crate::backend::error::FieldError;
use crate::backend::forms::handlers::{FormListResponse, SaveFormRequest, SubmitFormRequest};
use crate::backend::forms::submissions::SubmissionValues;
use crate::shared::forms::{FieldDescriptor, FormTemplate};

/// Errors an API call can surface, aligned with the server's taxonomy
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or server transport failure; the shell offers a retry
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Field-scoped validation failures; shown inline on the form
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Wrong credentials or missing session
    #[error("not authorized")]
    Unauthorized,

    /// Unknown form or user
    #[error("not found")]
    NotFound,

    /// The client IP exhausted its request budget
    #[error("too many requests")]
    RateLimited,

    /// Any other failure status
    #[error("server error: {0}")]
    Server(u16),
}

/// Shape of the server's error body, used to pull out field errors
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// Client for the inspecta HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against a base URL (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a new account
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        self.post_expect_success("/api/auth/register", request).await
    }

    /// Log in; on success the session cookie is stored on this client
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_expect_success("/api/auth/login", &request).await
    }

    /// Ask whether the held session is valid.
    ///
    /// Total like the endpoint itself: a transport failure or an
    /// unparseable body answers `false` rather than erroring, so the
    /// session gate always gets a boolean.
    pub async fn check_session(&self) -> bool {
        let response = match self.http.get(self.url("/api/auth/check")).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Session check transport failure: {}", e);
                return false;
            }
        };

        match response.json::<CheckResponse>().await {
            Ok(body) => body.is_authenticated,
            Err(_) => false,
        }
    }

    /// End the session; idempotent server-side
    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/logout"))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Fetch the current user's profile
    pub async fn current_user(&self) -> Result<UserResponse, ClientError> {
        let response = self.http.get(self.url("/api/user")).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// List the available form names
    pub async fn list_forms(&self) -> Result<Vec<String>, ClientError> {
        let response = self.http.get(self.url("/api/forms")).send().await?;
        let response = Self::check_status(response).await?;
        let body: FormListResponse = response.json().await?;
        Ok(body.forms)
    }

    /// Fetch one form template
    pub async fn fetch_form(&self, form_name: &str) -> Result<FormTemplate, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/forms/{}", form_name)))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Save the full element sequence for a template (the builder's save)
    pub async fn save_form(
        &self,
        form_name: &str,
        elements: Vec<FieldDescriptor>,
    ) -> Result<(), ClientError> {
        let request = SaveFormRequest { elements };
        let response = self
            .http
            .put(self.url(&format!("/api/forms/{}", form_name)))
            .json(&request)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Submit entered values against a template
    pub async fn submit_form(
        &self,
        form_name: &str,
        values: SubmissionValues,
    ) -> Result<(), ClientError> {
        let request = SubmitFormRequest { values };
        self.post_expect_success(&format!("/api/forms/{}/submit", form_name), &request)
            .await
    }

    async fn post_expect_success<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(), ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map a failure status onto the taxonomy; pass successes through
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            400 => {
                let body: ErrorBody = response.json().await.unwrap_or(ErrorBody { errors: vec![] });
                Err(ClientError::Validation(body.errors))
            }
            401 => Err(ClientError::Unauthorized),
            404 => Err(ClientError::NotFound),
            429 => Err(ClientError::RateLimited),
            code => Err(ClientError::Server(code)),
        }
    }
}
