use crate::state::session::{route_for_role, use_session};
use leptos::*;

/// Landing route. A signed-in visitor is forwarded straight to their role's
/// view; everyone else goes to the login form.
#[component]
pub fn HomePage() -> impl IntoView {
    let (session, _) = use_session();

    create_effect(move |_| {
        let state = session.get();
        if state.loading {
            return;
        }
        let target = state
            .identity
            .as_ref()
            .and_then(|identity| route_for_role(&identity.role).ok())
            .unwrap_or("/login");
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Presensi"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Photo-verified attendance tracking"
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                        <div class="rounded-md shadow">
                            <a href="/login" class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover lg:py-4 lg:text-lg lg:px-10">
                                "Sign in"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
