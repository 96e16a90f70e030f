use serde::{Deserialize, Serialize};

pub mod incident;
pub mod protocol;

pub use incident::{
    IncidentImage, IncidentReport, IncidentStatus, IncidentVideo, format_coord,
};

// =========================================================
// Constants
// =========================================================

/// Default map center: Nairobi CBD.
pub const DEFAULT_LATITUDE: f64 = -1.2921;
pub const DEFAULT_LONGITUDE: f64 = 36.8219;

/// Multipart field name the media upload endpoints expect.
pub const MEDIA_FIELD_NAME: &str = "file";

// =========================================================
// Domain Models
// =========================================================

/// The signed-in actor, as materialized by `/check_session` or `/login`.
///
/// The session probe returns `name` where the login response returns
/// `username`; both spellings deserialize into [`User::username`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(alias = "name")]
    pub username: String,
    pub email: String,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_accepts_session_probe_shape() {
        // /check_session spells the display name `name` and omits the flag
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"wanjiku","email":"w@ajali.ke"}"#).unwrap();
        assert_eq!(user.username, "wanjiku");
        assert!(!user.is_admin);
    }

    #[test]
    fn user_accepts_login_shape() {
        let user: User = serde_json::from_str(
            r#"{"id":7,"username":"admin","email":"admin@ajali.ke","isAdmin":true}"#,
        )
        .unwrap();
        assert_eq!(user.id, 7);
        assert!(user.is_admin);
    }
}
