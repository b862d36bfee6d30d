use crate::{
    api::{ApiError, Identity, LoginRequest},
    pages::login::repository as login_repository,
};
use leptos::*;

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

pub const SESSION_USER_KEY: &str = "session_user";
pub const CHECKED_IN_FLAG_KEY: &str = "has_checked_in";
pub const CHECKED_OUT_FLAG_KEY: &str = "has_checked_out";

/// Explicit session context: populated on login, cleared on logout. Views
/// read the identity from here instead of reaching into browser storage.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

/// Pure role dispatch. Anything outside {admin, user} is a login failure and
/// never triggers navigation.
pub fn route_for_role(role: &str) -> Result<&'static str, ApiError> {
    match role {
        "admin" => Ok("/admin"),
        "user" => Ok("/attendance"),
        _ => Err(ApiError::validation("invalid role")),
    }
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(SessionState::default());
    #[cfg(target_arch = "wasm32")]
    if let Some(identity) = load_stored_identity() {
        set_session.update(|state| state.identity = Some(identity));
    }
    (session, set_session)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

/// Single login attempt. On success the identity is stored and the role's
/// destination route is returned; an unrecognized role stores nothing.
pub async fn login_request(
    request: LoginRequest,
    repo: &login_repository::LoginRepository,
    set_session: WriteSignal<SessionState>,
) -> Result<&'static str, ApiError> {
    set_session.update(|state| state.loading = true);

    let response = match repo.login(request).await {
        Ok(response) => response,
        Err(error) => {
            set_session.update(|state| state.loading = false);
            return Err(error);
        }
    };

    let route = match route_for_role(&response.user.role) {
        Ok(route) => route,
        Err(error) => {
            set_session.update(|state| state.loading = false);
            return Err(error);
        }
    };

    #[cfg(target_arch = "wasm32")]
    persist_identity(&response.user);

    set_session.update(|state| {
        state.identity = Some(response.user);
        state.loading = false;
    });
    Ok(route)
}

/// Local-only teardown; the API holds no session to invalidate.
pub fn logout(set_session: WriteSignal<SessionState>) {
    #[cfg(target_arch = "wasm32")]
    clear_stored_session();

    set_session.update(|state| {
        state.identity = None;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<&'static str, ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<crate::api::ApiClient>().unwrap_or_default();
    let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_session).await }
    })
}

#[cfg(target_arch = "wasm32")]
fn persist_identity(identity: &Identity) {
    let Ok(storage) = crate::utils::storage::local_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(identity) {
        let _ = storage.set_item(SESSION_USER_KEY, &json);
    }
}

#[cfg(target_arch = "wasm32")]
fn load_stored_identity() -> Option<Identity> {
    let storage = crate::utils::storage::local_storage().ok()?;
    let json = storage.get_item(SESSION_USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

#[cfg(target_arch = "wasm32")]
fn clear_stored_session() {
    if let Ok(storage) = crate::utils::storage::local_storage() {
        let _ = storage.remove_item(SESSION_USER_KEY);
        let _ = storage.remove_item(CHECKED_IN_FLAG_KEY);
        let _ = storage.remove_item(CHECKED_OUT_FLAG_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_for_role_maps_known_roles() {
        assert_eq!(route_for_role("admin").unwrap(), "/admin");
        assert_eq!(route_for_role("user").unwrap(), "/attendance");
    }

    #[test]
    fn route_for_role_rejects_unknown_roles() {
        for role in ["superuser", "", "Admin", "USER"] {
            let err = route_for_role(role).unwrap_err();
            assert_eq!(err.error, "invalid role");
        }
    }
}
