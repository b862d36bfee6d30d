use crate::state::session::{self, use_session};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn Header() -> impl IntoView {
    let (session, set_session) = use_session();
    let username = move || {
        session
            .get()
            .identity
            .map(|identity| identity.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session::logout(set_session);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };

    view! {
        <header class="bg-primary shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-white">"Presensi"</h1>
                    <div class="flex items-center gap-4">
                        <span class="text-white font-medium">{username}</span>
                        <button
                            on:click=on_logout
                            class="text-white px-3 py-2 rounded-md text-sm font-medium hover:bg-white hover:text-black transition-all"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Title text="Presensi"/>
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, user_identity};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_signed_in_username() {
        let html = render_to_string(move || {
            provide_session(Some(user_identity("alice")));
            view! { <Header /> }
        });
        assert!(html.contains("alice"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_session(Some(user_identity("alice")));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
        assert!(html.contains("animate-spin"));
    }
}
