use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::api::{ApiClient, ApiError};

type PendingResolve = Shared<LocalBoxFuture<'static, Result<String, ApiError>>>;

/// Session-lifetime mapping from photo storage path to a displayable data
/// URI. Injected through context so report cells share one cache and tests
/// can supply their own.
///
/// Concurrent resolutions of the same path share one in-flight request, so
/// a path that appears in several cells of the same render pass is still
/// converted exactly once.
#[derive(Clone, Default)]
pub struct PhotoCache {
    inner: Rc<RefCell<HashMap<String, String>>>,
    pending: Rc<RefCell<HashMap<String, PendingResolve>>>,
}

impl PhotoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek(&self, path: &str) -> Option<String> {
        self.inner.borrow().get(path).cloned()
    }

    /// Resolves a storage path to an embeddable image, calling the conversion
    /// endpoint at most once per distinct path.
    pub async fn resolve(&self, api: &ApiClient, path: &str) -> Result<String, ApiError> {
        if let Some(hit) = self.peek(path) {
            return Ok(hit);
        }

        let future = {
            let mut pending = self.pending.borrow_mut();
            if let Some(in_flight) = pending.get(path) {
                in_flight.clone()
            } else {
                let api = api.clone();
                let inner = self.inner.clone();
                let pending_map = self.pending.clone();
                let key = path.to_string();
                let future = async move {
                    let result = api
                        .file_to_base64(&key)
                        .await
                        .map(|response| as_data_uri(&response.file_base64));
                    if let Ok(uri) = &result {
                        inner.borrow_mut().insert(key.clone(), uri.clone());
                    }
                    pending_map.borrow_mut().remove(&key);
                    result
                }
                .boxed_local()
                .shared();
                pending.insert(path.to_string(), future.clone());
                future
            }
        };

        future.await
    }
}

/// Servers answer with either a bare base64 payload or a full data URI.
fn as_data_uri(payload: &str) -> String {
    if payload.starts_with("data:") {
        payload.to_string()
    } else {
        format!("data:image/png;base64,{payload}")
    }
}
