//! HTTP binding to the Ajali! back end.
//!
//! Every request carries the session cookie (`credentials: include`). 2xx
//! bodies are decoded per the protocol types; everything else is folded
//! into [`ApiError`], keeping the server's message where it provides one.

use ajali_shared::protocol::{
    ApiRequest, CheckSessionRequest, CreateIncidentRequest, CreatedIncident, ErrorBody,
    HttpMethod, ListIncidentsRequest, LoginRequest, LoginResponse, LogoutRequest, MediaKind,
    RegisterRequest, UpdateStatusRequest,
};
use ajali_shared::{IncidentReport, IncidentStatus, MEDIA_FIELD_NAME, User};
use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use web_sys::{FormData, RequestCredentials};

/// Back-end origin. Overridable at compile time for non-local deployments.
pub const API_BASE: &str = match option_env!("AJALI_API_BASE") {
    Some(base) => base,
    None => "http://localhost:5000",
};

/// Failure kinds the client distinguishes at action boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The session probe answered non-2xx; not an error the UI surfaces.
    Anonymous,
    /// Login or registration rejected; shown inline on the auth form.
    Auth(String),
    /// The server attributed the failure to the request (4xx with message).
    Validation(String),
    /// Network failure or 5xx; shown as a generic toast.
    Transport(String),
}

impl ApiError {
    /// The user-facing message, generic when the server gave none.
    pub fn message(&self) -> String {
        match self {
            ApiError::Anonymous => "Not signed in".to_string(),
            ApiError::Auth(msg) | ApiError::Validation(msg) if !msg.is_empty() => msg.clone(),
            ApiError::Auth(_) | ApiError::Validation(_) => "Request rejected".to_string(),
            ApiError::Transport(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Anonymous => write!(f, "anonymous session"),
            ApiError::Auth(msg) => write!(f, "authentication failed: {msg}"),
            ApiError::Validation(msg) => write!(f, "request rejected: {msg}"),
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
        }
    }
}

/// Thin client over the back-end origin.
#[derive(Clone, Debug, PartialEq)]
pub struct AjaliApi {
    base_url: String,
}

impl Default for AjaliApi {
    fn default() -> Self {
        Self::new(API_BASE.to_string())
    }
}

impl AjaliApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Prefix a server-relative media path with the back-end origin.
    pub fn media_url(&self, path: &str) -> String {
        self.url(path)
    }

    /// Probe the cookie session.
    ///
    /// Distinguishes "no session" (`Ok(None)`) from a transport failure
    /// (`Err`); the session store treats both as anonymous but callers
    /// may want the difference.
    pub async fn probe_session(&self) -> Result<Option<User>, ApiError> {
        let res = Request::get(&self.url(CheckSessionRequest::PATH))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if res.ok() {
            let user = res
                .json::<User>()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(Some(user))
        } else if res.status() >= 500 {
            Err(ApiError::Transport(format!("status {}", res.status())))
        } else {
            Ok(None)
        }
    }

    /// Begin a session. The session cookie is stored by the user agent.
    pub async fn login(&self, email: String, password: String) -> Result<User, ApiError> {
        let body = LoginRequest { email, password };
        let res = self
            .send_json(LoginRequest::PATH, &body, LoginRequest::METHOD)
            .await
            .map_err(auth_flavored)?;
        let decoded: LoginResponse = decode(res).await.map_err(auth_flavored)?;
        Ok(decoded.user)
    }

    /// Create an account. Does not begin a session.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<(), ApiError> {
        let body = RegisterRequest {
            username,
            email,
            password,
        };
        let res = self
            .send_json(RegisterRequest::PATH, &body, RegisterRequest::METHOD)
            .await
            .map_err(auth_flavored)?;
        decode::<<RegisterRequest as ApiRequest>::Response>(res)
            .await
            .map_err(auth_flavored)?;
        Ok(())
    }

    /// End the session server-side.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let res = Request::post(&self.url(LogoutRequest::PATH))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if res.ok() {
            Ok(())
        } else {
            Err(error_from_response(res).await)
        }
    }

    /// Fetch the reports visible to this session.
    pub async fn list_incidents(&self) -> Result<Vec<IncidentReport>, ApiError> {
        let res = Request::get(&self.url(ListIncidentsRequest::PATH))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(res).await
    }

    /// Submit a new report. Completes before any media upload; the
    /// returned id keys them.
    pub async fn create_incident(
        &self,
        request: &CreateIncidentRequest,
    ) -> Result<CreatedIncident, ApiError> {
        let res = self
            .send_json(
                CreateIncidentRequest::PATH,
                request,
                CreateIncidentRequest::METHOD,
            )
            .await?;
        decode(res).await
    }

    /// Upload one staged attachment against an existing report.
    pub async fn attach_media(
        &self,
        incident_id: i64,
        kind: MediaKind,
        file: &web_sys::File,
    ) -> Result<(), ApiError> {
        let form =
            FormData::new().map_err(|e| ApiError::Transport(format!("FormData: {e:?}")))?;
        form.append_with_blob_and_filename(MEDIA_FIELD_NAME, file, &file.name())
            .map_err(|e| ApiError::Transport(format!("FormData append: {e:?}")))?;

        let res = Request::post(&self.url(&kind.upload_path(incident_id)))
            .credentials(RequestCredentials::Include)
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if res.ok() {
            Ok(())
        } else {
            Err(error_from_response(res).await)
        }
    }

    /// Re-classify a report (admin only server-side).
    pub async fn update_incident_status(
        &self,
        id: i64,
        status: IncidentStatus,
    ) -> Result<IncidentReport, ApiError> {
        let body = UpdateStatusRequest { status };
        let res = self
            .send_json(&UpdateStatusRequest::path(id), &body, HttpMethod::Put)
            .await?;
        decode(res).await
    }

    async fn send_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        method: HttpMethod,
    ) -> Result<Response, ApiError> {
        let builder = match method {
            HttpMethod::Get => Request::get(&self.url(path)),
            HttpMethod::Post => Request::post(&self.url(path)),
            HttpMethod::Put => Request::put(&self.url(path)),
        };
        builder
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

/// Decode a 2xx body, or fold the response into an [`ApiError`].
async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    if res.ok() {
        res.json::<T>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    } else {
        Err(error_from_response(res).await)
    }
}

async fn error_from_response(res: Response) -> ApiError {
    let status = res.status();
    let message = res
        .json::<ErrorBody>()
        .await
        .map(|b| b.message)
        .unwrap_or_default();
    if status >= 500 || message.is_empty() {
        ApiError::Transport(format!("status {status}"))
    } else {
        ApiError::Validation(message)
    }
}

/// Re-flavor 4xx rejections as auth failures for the login/register forms.
fn auth_flavored(err: ApiError) -> ApiError {
    match err {
        ApiError::Validation(msg) => ApiError::Auth(msg),
        other => other,
    }
}

/// Fetch the API client provided at the application root.
pub fn use_api() -> AjaliApi {
    use_context::<AjaliApi>().expect("AjaliApi should be provided at the app root")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let api = AjaliApi::new("http://localhost:5000/".to_string());
        assert_eq!(api.url("/incidents"), "http://localhost:5000/incidents");
        assert_eq!(api.url("incidents"), "http://localhost:5000/incidents");
    }

    #[test]
    fn media_url_prefixes_server_relative_paths() {
        let api = AjaliApi::new("http://localhost:5000".to_string());
        assert_eq!(
            api.media_url("/uploads/fire.jpg"),
            "http://localhost:5000/uploads/fire.jpg"
        );
    }

    #[test]
    fn error_messages_fall_back_when_blank() {
        assert_eq!(
            ApiError::Validation("Email already exists".into()).message(),
            "Email already exists"
        );
        assert_eq!(ApiError::Auth(String::new()).message(), "Request rejected");
        assert_eq!(
            ApiError::Transport("status 502".into()).message(),
            "Something went wrong. Please try again."
        );
    }
}
