use std::rc::Rc;

use super::utils::sort_by_date_desc;
use crate::api::{ApiClient, ApiError, AttendanceRecord};

#[derive(Clone)]
pub struct AdminRepository {
    api: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    /// Report rows, already in display order. Sorting happens here so every
    /// consumer sees the same ordering.
    pub async fn fetch_report(
        &self,
        department: Option<&str>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let mut records = self.api.get_report(department).await?;
        sort_by_date_desc(&mut records);
        Ok(records)
    }

    pub async fn download_report(&self, department: Option<&str>) -> Result<Vec<u8>, ApiError> {
        self.api.download_report(department).await
    }
}

impl Default for AdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> AdminRepository {
        let api = ApiClient::new_with_base_url(server.url("/users"));
        AdminRepository::new_with_client(Rc::new(api))
    }

    #[tokio::test]
    async fn fetch_report_returns_rows_sorted_newest_first() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/users/report");
            then.status(200).json_body(json!([
                { "id": 1, "name": "alice", "department": "ops", "date": "2026-08-20" },
                { "id": 2, "name": "bob", "department": "ops", "date": "2026-08-22" }
            ]));
        });

        let records = repo(&server).fetch_report(None).await.unwrap();
        assert_eq!(records[0].id, 2);
        assert_eq!(records[1].id, 1);
    }

    #[tokio::test]
    async fn fetch_report_forwards_the_department_filter() {
        let server = MockServer::start_async().await;
        let filtered = server.mock(|when, then| {
            when.method(GET)
                .path("/users/report")
                .query_param("department", "engineering");
            then.status(200).json_body(json!([]));
        });

        let records = repo(&server)
            .fetch_report(Some("engineering"))
            .await
            .unwrap();
        assert!(records.is_empty());
        filtered.assert();
    }

    #[tokio::test]
    async fn download_report_returns_raw_bytes() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/users/report/download");
            then.status(200).body(b"PK\x03\x04fake-xlsx");
        });

        let bytes = repo(&server).download_report(None).await.unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
