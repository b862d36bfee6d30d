use crate::components::{ErrorMessage, LoadingSpinner, SuccessMessage};
use crate::pages::attendance::{
    components::{camera::CameraFeed, clock::LiveClock},
    view_model::use_attendance_view_model,
};
use crate::state::attendance::CheckKind;
use leptos::*;

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let view_model = use_attendance_view_model();
    let state = view_model.state;
    let status_resource = view_model.status_resource;
    let notice = view_model.notice;
    let error = view_model.error;
    let video_ref = view_model.video_ref;
    let canvas_ref = view_model.canvas_ref;

    let can_check = move |kind: CheckKind| {
        let state = state.get();
        let Some(status) = state.status else {
            return false;
        };
        if state.busy || state.loading {
            return false;
        }
        match kind {
            CheckKind::In => !status.has_checked_in,
            CheckKind::Out => !status.has_checked_out,
        }
    };

    let check_in = {
        let view_model = view_model.clone();
        move |_| view_model.check(CheckKind::In)
    };
    let check_out = {
        let view_model = view_model.clone();
        move |_| view_model.check(CheckKind::Out)
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 max-w-xl mx-auto space-y-6">
            <LiveClock />

            {move || notice.get().map(|message| view! { <SuccessMessage message=message /> })}
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            {move || {
                status_resource
                    .get()
                    .and_then(|result| result.err())
                    .map(|err| view! { <ErrorMessage message=err.error /> })
            }}

            <CameraFeed video_ref=video_ref canvas_ref=canvas_ref />

            <Show when=move || state.get().loading fallback=|| ()>
                <LoadingSpinner />
            </Show>

            <div class="flex justify-center gap-4">
                <button
                    on:click=check_in
                    disabled=move || !can_check(CheckKind::In)
                    class="px-6 py-3 bg-green-600 text-white rounded-md font-medium hover:bg-green-700 disabled:opacity-50"
                >
                    "Check In"
                </button>
                <button
                    on:click=check_out
                    disabled=move || !can_check(CheckKind::Out)
                    class="px-6 py-3 bg-red-600 text-white rounded-md font-medium hover:bg-red-700 disabled:opacity-50"
                >
                    "Check Out"
                </button>
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
    fn panel_renders_both_check_buttons() {
        let html = render_to_string(|| {
            provide_session(Some(user_identity("alice")));
            view! { <AttendancePanel /> }
        });
        assert!(html.contains("Check In"));
        assert!(html.contains("Check Out"));
        assert!(html.contains("<video"));
    }
}
