use reqwest::Client;

use crate::{api::types::*, config};

/// Thin wrapper around the attendance API (base path `/users`).
///
/// Every method issues exactly one request; failures are terminal for the
/// triggering user action and are never retried here.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn transport_error(context: &str, err: reqwest::Error) -> ApiError {
        log::warn!("{context}: {err}");
        ApiError::request_failed("Network request failed")
    }

    async fn decode_error(context: &str, response: reqwest::Response) -> ApiError {
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(err) => {
                log::warn!("{context}: failed to parse error body: {err}");
                ApiError::request_failed("Network request failed")
            }
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| Self::transport_error("login request failed", e))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| Self::transport_error("login response unreadable", e))
        } else {
            Err(Self::decode_error("login", response).await)
        }
    }

    pub async fn get_report(
        &self,
        department: Option<&str>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self.client.get(format!("{}/report", base_url));
        if let Some(department) = department {
            request = request.query(&[("department", department)]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| Self::transport_error("report request failed", e))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| Self::transport_error("report response unreadable", e))
        } else {
            Err(Self::decode_error("report", response).await)
        }
    }

    /// Fetches the server-rendered spreadsheet as raw bytes; saving it is the
    /// caller's concern.
    pub async fn download_report(&self, department: Option<&str>) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self.client.get(format!("{}/report/download", base_url));
        if let Some(department) = department {
            request = request.query(&[("department", department)]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| Self::transport_error("report download failed", e))?;

        if response.status().is_success() {
            response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| Self::transport_error("report download unreadable", e))
        } else {
            Err(Self::decode_error("report download", response).await)
        }
    }

    pub async fn file_to_base64(&self, file_path: &str) -> Result<FileToBase64Response, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}/file-to-base64", base_url))
            .json(&FileToBase64Request {
                file_path: file_path.to_string(),
            })
            .send()
            .await
            .map_err(|e| Self::transport_error("photo conversion failed", e))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| Self::transport_error("photo conversion unreadable", e))
        } else {
            Err(Self::decode_error("photo conversion", response).await)
        }
    }

    /// Multipart upload of a captured frame; the returned storage path is what
    /// gets attached to a check-in/check-out request, never the raw bytes.
    pub async fn upload_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadPhotoResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/png")
            .map_err(|e| Self::transport_error("photo part invalid", e))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload-photo", base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| Self::transport_error("photo upload failed", e))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| Self::transport_error("photo upload unreadable", e))
        } else {
            Err(Self::decode_error("photo upload", response).await)
        }
    }

    pub async fn attendance_status(
        &self,
        user_id: i64,
    ) -> Result<AttendanceStatusResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}/attendance-status", base_url))
            .query(&[("user_id", user_id.to_string())])
            .send()
            .await
            .map_err(|e| Self::transport_error("status request failed", e))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| Self::transport_error("status response unreadable", e))
        } else {
            Err(Self::decode_error("status", response).await)
        }
    }

    pub async fn check_in(&self, user_id: i64, photo_path: &str) -> Result<(), ApiError> {
        self.record_check("checkin", user_id, photo_path).await
    }

    pub async fn check_out(&self, user_id: i64, photo_path: &str) -> Result<(), ApiError> {
        self.record_check("checkout", user_id, photo_path).await
    }

    async fn record_check(
        &self,
        endpoint: &str,
        user_id: i64,
        photo_path: &str,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}/{}", base_url, endpoint))
            .json(&CheckRequest {
                user_id,
                photo_path: photo_path.to_string(),
            })
            .send()
            .await
            .map_err(|e| Self::transport_error(endpoint, e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::decode_error(endpoint, response).await)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
