use crate::api::{ApiClient, ApiError};
use crate::state::attendance::{
    self, guard_check, AttendanceState, CheckKind,
};
use crate::state::session::{use_session, SessionState};
use crate::utils::camera;
use leptos::*;

#[derive(Clone)]
pub struct CheckPayload {
    pub kind: CheckKind,
    pub user_id: i64,
    pub photo_bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub session: ReadSignal<SessionState>,
    pub state: ReadSignal<AttendanceState>,
    pub set_state: WriteSignal<AttendanceState>,
    pub status_resource: Resource<Option<i64>, Result<(), ApiError>>,
    pub check_action: Action<CheckPayload, Result<CheckKind, ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub video_ref: NodeRef<html::Video>,
    pub canvas_ref: NodeRef<html::Canvas>,
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let (session, _) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let (state, set_state) = attendance::use_attendance();
    let notice = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<String>);
    let video_ref = create_node_ref::<html::Video>();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let api_status = api.clone();
    let status_resource = create_resource(
        move || session.get().identity.map(|identity| identity.id),
        move |user_id| {
            let api = api_status.clone();
            async move {
                match user_id {
                    Some(user_id) => attendance::load_status(&api, set_state, user_id).await,
                    None => Ok(()),
                }
            }
        },
    );

    let check_action = create_action(move |payload: &CheckPayload| {
        let api = api.clone();
        let payload = payload.clone();
        async move {
            attendance::submit_check(
                &api,
                set_state,
                payload.kind,
                payload.user_id,
                payload.photo_bytes,
            )
            .await
            .map(|_| payload.kind)
        }
    });

    create_effect(move |_| {
        if let Some(result) = check_action.value().get() {
            set_state.update(|state| state.busy = false);
            match result {
                Ok(kind) => {
                    error.set(None);
                    notice.set(Some(format!("{} recorded", kind.label())));
                }
                Err(err) => {
                    notice.set(None);
                    error.set(Some(err.error));
                }
            }
        }
    });

    AttendanceViewModel {
        session,
        state,
        set_state,
        status_resource,
        check_action,
        notice,
        error,
        video_ref,
        canvas_ref,
    }
}

impl AttendanceViewModel {
    /// Full check flow for one button press: idempotency guard, frame
    /// capture, then the upload + record round trip. Any local failure stops
    /// before the first network call.
    pub fn check(&self, kind: CheckKind) {
        if let Err(msg) = guard_check(kind, &self.state.get_untracked()) {
            self.error.set(Some(msg));
            return;
        }

        let Some(identity) = self.session.get_untracked().identity else {
            self.error.set(Some("Session expired, sign in again".into()));
            return;
        };

        let photo_bytes = match self.capture_photo() {
            Ok(bytes) => bytes,
            Err(err) => {
                self.error.set(Some(err.to_string()));
                return;
            }
        };

        self.notice.set(None);
        self.error.set(None);
        self.set_state.update(|state| state.busy = true);
        self.check_action.dispatch(CheckPayload {
            kind,
            user_id: identity.id,
            photo_bytes,
        });
    }

    fn capture_photo(&self) -> Result<Vec<u8>, camera::CaptureError> {
        let video = self
            .video_ref
            .get_untracked()
            .ok_or(camera::CaptureError::CameraUnavailable)?;
        let canvas = self
            .canvas_ref
            .get_untracked()
            .ok_or(camera::CaptureError::CameraUnavailable)?;
        let data_uri = camera::capture_frame(&video, &canvas)?;
        camera::data_uri_bytes(&data_uri)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::attendance::DayStatus;
    use crate::test_support::helpers::{provide_session, user_identity};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_unseeded() {
        with_runtime(|| {
            provide_session(Some(user_identity("alice")));
            let vm = use_attendance_view_model();
            assert!(vm.state.get().status.is_none());
            assert!(vm.notice.get().is_none());
            assert!(vm.error.get().is_none());
        });
    }

    #[test]
    fn check_before_seed_sets_error_without_dispatching() {
        with_runtime(|| {
            provide_session(Some(user_identity("alice")));
            let vm = use_attendance_view_model();
            vm.check(CheckKind::In);
            assert!(vm.error.get().is_some());
            assert!(vm.check_action.value().get().is_none());
        });
    }

    #[test]
    fn repeated_checkin_is_rejected_by_the_guard() {
        with_runtime(|| {
            provide_session(Some(user_identity("alice")));
            let vm = use_attendance_view_model();
            vm.set_state.update(|state| {
                state.status = Some(DayStatus {
                    has_checked_in: true,
                    has_checked_out: false,
                });
            });
            vm.check(CheckKind::In);
            assert_eq!(
                vm.error.get().unwrap(),
                "You have already completed Check-in today"
            );
            assert!(vm.check_action.value().get().is_none());
        });
    }
}
