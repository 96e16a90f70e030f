//! Wire protocol for the Ajali! back end.
//!
//! Request/response pairs are tied together by the [`ApiRequest`] trait so
//! the client binding cannot pair a body with the wrong endpoint. Endpoints
//! addressing a single report carry the id in the path and expose a path
//! builder instead of a constant.

use crate::incident::{IncidentReport, IncidentStatus};
use crate::User;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP methods the back end surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// Declares the response type and endpoint metadata for a request body.
pub trait ApiRequest: Serialize {
    type Response: DeserializeOwned;
    const PATH: &'static str;
    const METHOD: HttpMethod;
}

// =========================================================
// Sessions
// =========================================================

/// Probe the cookie session. The server answers with the current [`User`]
/// or a 401 when anonymous.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckSessionRequest;

impl ApiRequest for CheckSessionRequest {
    type Response = User;
    const PATH: &'static str = "/check_session";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration does not begin a session; the user logs in afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

impl ApiRequest for RegisterRequest {
    type Response = RegisterResponse;
    const PATH: &'static str = "/users";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub message: String,
}

impl ApiRequest for LogoutRequest {
    type Response = LogoutResponse;
    const PATH: &'static str = "/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Incidents
// =========================================================

/// List the reports visible to the session. Own-vs-all scoping lives
/// server-side; the client sends the same request either way.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListIncidentsRequest;

impl ApiRequest for ListIncidentsRequest {
    type Response = Vec<IncidentReport>;
    const PATH: &'static str = "/incidents";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIncidentRequest {
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: IncidentStatus,
}

impl CreateIncidentRequest {
    pub fn new(description: String, latitude: f64, longitude: f64) -> Self {
        Self {
            description,
            latitude,
            longitude,
            status: IncidentStatus::UnderInvestigation,
        }
    }
}

/// The 201 body is `{message, id}`; only the id matters to the client
/// (media uploads are keyed to it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIncident {
    pub id: i64,
}

impl ApiRequest for CreateIncidentRequest {
    type Response = CreatedIncident;
    const PATH: &'static str = "/incidents";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Status mutation, admin-only server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: IncidentStatus,
}

impl UpdateStatusRequest {
    /// `PUT /incidents/{id}`
    pub fn path(id: i64) -> String {
        format!("/incidents/{id}")
    }
}

impl ApiRequest for UpdateStatusRequest {
    type Response = IncidentReport;
    const PATH: &'static str = "/incidents";
    const METHOD: HttpMethod = HttpMethod::Put;
}

// =========================================================
// Media
// =========================================================

/// Which upload endpoint a staged attachment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// `POST /incidents/{id}/image` or `/incidents/{id}/video`.
    pub fn upload_path(&self, incident_id: i64) -> String {
        format!("/incidents/{incident_id}/{}", self.as_str())
    }
}

/// Error envelope the server uses for non-2xx answers.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default, alias = "error")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_carries_default_status_tag() {
        let req = CreateIncidentRequest::new("Fire on Moi Ave".into(), -1.2921, 36.8219);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["status"], "under investigation");
        assert_eq!(json["latitude"], -1.2921);
    }

    #[test]
    fn update_status_path_and_body() {
        assert_eq!(UpdateStatusRequest::path(7), "/incidents/7");
        let body = serde_json::to_string(&UpdateStatusRequest {
            status: IncidentStatus::Resolved,
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"resolved"}"#);
    }

    #[test]
    fn media_upload_paths() {
        assert_eq!(MediaKind::Image.upload_path(42), "/incidents/42/image");
        assert_eq!(MediaKind::Video.upload_path(42), "/incidents/42/video");
    }

    #[test]
    fn login_response_unwraps_user_envelope() {
        let res: LoginResponse = serde_json::from_str(
            r#"{"message":"Login successful","user":{"id":1,"username":"a","email":"a@b.c"}}"#,
        )
        .unwrap();
        assert_eq!(res.user.email, "a@b.c");
    }

    #[test]
    fn error_body_accepts_both_spellings() {
        let a: ErrorBody = serde_json::from_str(r#"{"message":"Email already exists"}"#).unwrap();
        assert_eq!(a.message, "Email already exists");
        let b: ErrorBody = serde_json::from_str(r#"{"error":"Invalid media type"}"#).unwrap();
        assert_eq!(b.message, "Invalid media type");
    }
}
