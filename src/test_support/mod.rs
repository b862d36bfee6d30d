#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::Identity;
    use crate::state::session::{SessionContext, SessionState};
    use leptos::*;

    pub fn user_identity(username: &str) -> Identity {
        Identity {
            id: 1,
            username: username.into(),
            role: "user".into(),
        }
    }

    pub fn admin_identity() -> Identity {
        Identity {
            id: 100,
            username: "admin".into(),
            role: "admin".into(),
        }
    }

    pub fn provide_session(identity: Option<Identity>) -> SessionContext {
        let (session, set_session) = create_signal(SessionState {
            identity,
            loading: false,
        });
        provide_context((session, set_session));
        (session, set_session)
    }
}
