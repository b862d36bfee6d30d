use crate::{
    api::Identity,
    components::layout::LoadingSpinner,
    state::session::{route_for_role, use_session, SessionState},
};
use leptos::*;

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let has_identity = create_memo(move |_| session.get().identity.is_some());
    let is_loading = create_memo(move |_| session.get().loading);
    create_effect(move |_| {
        let state = session.get();
        if state.loading || state.identity.is_some() {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show
            when=move || should_render_children(has_identity.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Pins a route to one role; a signed-in user with another role is sent back
/// to their own view instead.
#[component]
pub fn RequireRole(role: &'static str, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let is_loading = create_memo(move |_| session.get().loading);
    let role_matches = create_memo(move |_| has_role(session.get().identity.as_ref(), role));
    create_effect(move |_| {
        let state = session.get();
        if state.loading {
            return;
        }
        let Some(target) = redirect_target(&state, role) else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(role_matches.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(allowed: bool, is_loading: bool) -> bool {
    allowed && !is_loading
}

fn has_role(identity: Option<&Identity>, role: &str) -> bool {
    identity.map(|identity| identity.role == role).unwrap_or(false)
}

fn redirect_target(state: &SessionState, expected_role: &str) -> Option<&'static str> {
    let Some(identity) = state.identity.as_ref() else {
        return Some("/login");
    };
    if identity.role == expected_role {
        return None;
    }
    Some(route_for_role(&identity.role).unwrap_or("/login"))
}
