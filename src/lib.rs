use leptos::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

use api::ApiClient;
use components::RequireRole;
use pages::{AdminPage, AttendancePage, HomePage, LoginPage};
use state::photo_cache::PhotoCache;
use state::session::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_context(PhotoCache::new());

    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/admin" view=ProtectedAdmin/>
                    <Route path="/attendance" view=ProtectedAttendance/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireRole role="admin"><AdminPage/></RequireRole> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireRole role="user"><AttendancePage/></RequireRole> }
}

/// Mounts the app into `document.body`. The binary is the sole entry point
/// and calls this exactly once, after runtime config has been initialized.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    mount_to_body(|| view! { <App/> });
}
