//! Incident report domain model.
//!
//! Reports are created by citizens, time-stamped and id-assigned by the
//! server, and only ever re-classified (never deleted) from the client.

use serde::{Deserialize, Serialize};

/// Investigation status of a report.
///
/// The wire tags are the three lowercase phrases the server stores. Any
/// other tag decodes as [`IncidentStatus::Unknown`] so a single bad row
/// cannot fail the whole list decode; unknown statuses render neutrally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IncidentStatus {
    #[default]
    #[serde(rename = "under investigation")]
    UnderInvestigation,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "rejected")]
    Rejected,
    #[serde(other, skip_serializing)]
    Unknown,
}

impl IncidentStatus {
    /// The three tags an admin may assign.
    pub const ASSIGNABLE: [IncidentStatus; 3] = [
        IncidentStatus::UnderInvestigation,
        IncidentStatus::Resolved,
        IncidentStatus::Rejected,
    ];

    /// Wire tag, also used as the `<option>` value in the admin selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::UnderInvestigation => "under investigation",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Rejected => "rejected",
            IncidentStatus::Unknown => "unknown",
        }
    }

    /// Human label for chips and selectors.
    pub fn label(&self) -> &'static str {
        match self {
            IncidentStatus::UnderInvestigation => "Under Investigation",
            IncidentStatus::Resolved => "Resolved",
            IncidentStatus::Rejected => "Rejected",
            IncidentStatus::Unknown => "Unknown",
        }
    }

    /// Parse a selector value back into a status. Only the assignable
    /// tags are accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ASSIGNABLE.into_iter().find(|s| s.as_str() == tag)
    }
}

/// An image attached to a report. `image_url` is server-relative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentImage {
    pub id: i64,
    pub image_url: String,
}

/// A video attached to a report. `video_url` is server-relative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentVideo {
    pub id: i64,
    pub video_url: String,
}

/// A citizen-submitted incident report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub id: i64,
    pub description: String,
    /// Decimal degrees, WGS84, in [-90, 90].
    pub latitude: f64,
    /// Decimal degrees, WGS84, in [-180, 180].
    pub longitude: f64,
    #[serde(default)]
    pub status: IncidentStatus,
    /// Server-assigned ISO 8601 timestamp; formatted in the browser locale.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub images: Vec<IncidentImage>,
    #[serde(default)]
    pub videos: Vec<IncidentVideo>,
}

/// Format a coordinate truncated (not rounded) to four decimal places.
///
/// Truncation is toward zero, so `-1.29219` prints as `-1.2921`. Works on
/// the decimal rendering rather than multiplying by 10^4, which drifts for
/// values sitting exactly on four decimals (12.3456 * 10000 falls just
/// below 123456).
pub fn format_coord(value: f64) -> String {
    let repr = value.to_string();
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (repr.as_str(), ""),
    };
    let mut frac = String::from(frac_part);
    frac.truncate(4);
    while frac.len() < 4 {
        frac.push('0');
    }
    format!("{int_part}.{frac}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_known_tags() {
        for status in IncidentStatus::ASSIGNABLE {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: IncidentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn unrecognized_status_decodes_as_unknown() {
        let status: IncidentStatus = serde_json::from_str("\"escalated\"").unwrap();
        assert_eq!(status, IncidentStatus::Unknown);
    }

    #[test]
    fn from_tag_rejects_unknown() {
        assert_eq!(
            IncidentStatus::from_tag("resolved"),
            Some(IncidentStatus::Resolved)
        );
        assert_eq!(IncidentStatus::from_tag("unknown"), None);
        assert_eq!(IncidentStatus::from_tag(""), None);
    }

    #[test]
    fn coord_truncates_toward_zero() {
        assert_eq!(format_coord(-1.29219), "-1.2921");
        assert_eq!(format_coord(36.82199), "36.8219");
        assert_eq!(format_coord(0.0), "0.0000");
        assert_eq!(format_coord(-0.00009), "-0.0000");
        assert_eq!(format_coord(45.5), "45.5000");
    }

    #[test]
    fn coord_exact_at_four_decimals_is_unchanged() {
        // 12.3456 * 10000 lands just below 123456; the string path must
        // not lose the last digit.
        assert_eq!(format_coord(12.3456), "12.3456");
        assert_eq!(format_coord(-12.3456), "-12.3456");
        assert_eq!(format_coord(-1.2921), "-1.2921");
        assert_eq!(format_coord(36.8219), "36.8219");
    }

    #[test]
    fn report_decodes_server_body() {
        let body = r#"{
            "id": 42,
            "description": "Fire on Moi Ave",
            "latitude": -1.2921,
            "longitude": 36.8219,
            "status": "under investigation",
            "created_at": "2025-03-14T09:26:53",
            "user_id": 1,
            "images": [{"id": 3, "report_id": 42, "image_url": "/uploads/fire.jpg"}],
            "videos": []
        }"#;
        let report: IncidentReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.id, 42);
        assert_eq!(report.status, IncidentStatus::UnderInvestigation);
        assert_eq!(report.images[0].image_url, "/uploads/fire.jpg");
        assert!(report.videos.is_empty());
    }

    #[test]
    fn report_tolerates_missing_media_lists() {
        let report: IncidentReport = serde_json::from_str(
            r#"{"id":1,"description":"d","latitude":0.0,"longitude":0.0,"status":"resolved"}"#,
        )
        .unwrap();
        assert!(report.images.is_empty());
        assert_eq!(report.created_at, "");
    }
}
