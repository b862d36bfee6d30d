use std::rc::Rc;

use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};

#[derive(Clone)]
pub struct LoginRepository {
    api: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.api.login(request).await
    }
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}
