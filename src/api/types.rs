use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: Identity,
}

/// The authenticated user's tuple held client-side after login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// One report row. Owned and computed by the remote API; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub department: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_in_photo: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub check_out_photo: Option<String>,
    #[serde(default)]
    pub hours_worked: Option<f64>,
    #[serde(default)]
    pub overtime: Option<f64>,
}

/// `GET /attendance-status` payload. The two fields are independent; a
/// non-null value means the event already happened today for this identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceStatusResponse {
    #[serde(default)]
    pub last_checkin: Option<String>,
    #[serde(default)]
    pub last_checkout: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub user_id: i64,
    pub photo_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPhotoResponse {
    pub file_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileToBase64Request {
    pub file_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileToBase64Response {
    pub file_base64: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid role");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid role");
        assert!(validation.details.is_none());

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn deserialize_server_error_without_code_field() {
        let err: ApiError = serde_json::from_str(r#"{"error":"wrong password"}"#).unwrap();
        assert_eq!(err.error, "wrong password");
        assert!(err.code.is_empty());
    }

    #[test]
    fn deserialize_login_response() {
        let raw = r#"{ "user": { "id": 1, "username": "alice", "role": "user" } }"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.user.id, 1);
        assert_eq!(response.user.role, "user");
    }

    #[test]
    fn deserialize_attendance_record_with_missing_checkout() {
        let record: AttendanceRecord = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Budi",
            "department": "IT",
            "date": "2026-08-21",
            "check_in_time": "08:58:12",
            "check_in_photo": "uploads/checkin-7.png",
            "check_out_time": null,
            "check_out_photo": null,
            "hours_worked": null,
            "overtime": null
        }))
        .unwrap();
        assert_eq!(record.department, "IT");
        assert!(record.check_out_photo.is_none());
    }

    #[test]
    fn deserialize_attendance_status_reads_both_fields_independently() {
        let status: AttendanceStatusResponse = serde_json::from_value(serde_json::json!({
            "last_checkin": "2026-08-21 08:58:12",
            "last_checkout": null
        }))
        .unwrap();
        assert!(status.last_checkin.is_some());
        assert!(status.last_checkout.is_none());
    }
}
