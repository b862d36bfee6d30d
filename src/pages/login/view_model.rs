use crate::api::{ApiError, LoginRequest};
use crate::state::session;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<&'static str, ApiError>>,
}

/// A successful login navigates to the role's destination route; failures
/// surface inline and never navigate.
pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = session::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(route) => {
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(route);
                    }
                }
                Err(err) => error.set(Some(err.error)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

impl LoginViewModel {
    /// Validates locally, then dispatches. Returns early without a request
    /// when a field is empty or another attempt is still pending.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let username = self.form.username.get_untracked();
        let password = self.form.password.get_untracked();

        if let Err(msg) = super::utils::validate_credentials(&username, &password) {
            self.error.set(Some(msg));
            return;
        }

        self.error.set(None);
        self.login_action.dispatch(LoginRequest { username, password });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.username.get().is_empty());
            assert!(vm.form.password.get().is_empty());
        });
    }

    #[test]
    fn submit_with_empty_fields_sets_error_without_dispatching() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.submit();
            assert_eq!(
                vm.error.get().unwrap(),
                "Username and password are required"
            );
            assert!(vm.login_action.value().get().is_none());
        });
    }
}
