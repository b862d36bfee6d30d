use crate::api::{ApiClient, ApiError, AttendanceStatusResponse};
use leptos::*;
use uuid::Uuid;

/// Whether today's check-in/check-out already happened for this identity.
/// At most one of each per day; the server re-enforces this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayStatus {
    pub has_checked_in: bool,
    pub has_checked_out: bool,
}

impl DayStatus {
    pub fn from_response(response: &AttendanceStatusResponse) -> Self {
        Self {
            has_checked_in: response.last_checkin.is_some(),
            has_checked_out: response.last_checkout.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    In,
    Out,
}

impl CheckKind {
    pub fn file_prefix(self) -> &'static str {
        match self {
            CheckKind::In => "checkin",
            CheckKind::Out => "checkout",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckKind::In => "Check-in",
            CheckKind::Out => "Check-out",
        }
    }
}

/// `status: None` until the seed query answered; actions stay unavailable
/// until then so a click can never race the seed.
#[derive(Debug, Clone, Default)]
pub struct AttendanceState {
    pub status: Option<DayStatus>,
    pub busy: bool,
    pub loading: bool,
}

pub fn use_attendance() -> (ReadSignal<AttendanceState>, WriteSignal<AttendanceState>) {
    let (attendance_state, set_attendance_state) = create_signal(AttendanceState::default());
    (attendance_state, set_attendance_state)
}

/// Client-side idempotency guard. `Err` carries the message to show; the
/// action must issue no capture, upload or record call in that case.
pub fn guard_check(kind: CheckKind, state: &AttendanceState) -> Result<(), String> {
    if state.busy {
        return Err("Another attendance action is still in progress".into());
    }
    let Some(status) = state.status else {
        return Err("Attendance status is still loading".into());
    };
    let already_done = match kind {
        CheckKind::In => status.has_checked_in,
        CheckKind::Out => status.has_checked_out,
    };
    if already_done {
        return Err(format!("You have already completed {} today", kind.label()));
    }
    Ok(())
}

/// Seeds today's status from the server. A reload always goes through here;
/// the locally persisted flags are never read back.
pub async fn load_status(
    api: &ApiClient,
    set_attendance_state: WriteSignal<AttendanceState>,
    user_id: i64,
) -> Result<(), ApiError> {
    set_attendance_state.update(|state| state.loading = true);
    match api.attendance_status(user_id).await {
        Ok(response) => {
            set_attendance_state.update(|state| {
                state.status = Some(DayStatus::from_response(&response));
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_attendance_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Uploads the captured frame, then records the event. The local state is
/// only advanced after the record call succeeds; any failure leaves the
/// prior state untouched.
pub async fn submit_check(
    api: &ApiClient,
    set_attendance_state: WriteSignal<AttendanceState>,
    kind: CheckKind,
    user_id: i64,
    photo_bytes: Vec<u8>,
) -> Result<(), ApiError> {
    let file_name = format!("{}-{}.png", kind.file_prefix(), Uuid::new_v4());
    let uploaded = api.upload_photo(&file_name, photo_bytes).await?;

    match kind {
        CheckKind::In => api.check_in(user_id, &uploaded.file_path).await?,
        CheckKind::Out => api.check_out(user_id, &uploaded.file_path).await?,
    }

    set_attendance_state.update(|state| {
        let mut status = state.status.unwrap_or_default();
        match kind {
            CheckKind::In => status.has_checked_in = true,
            CheckKind::Out => status.has_checked_out = true,
        }
        state.status = Some(status);
    });

    #[cfg(target_arch = "wasm32")]
    persist_flag(kind);

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn persist_flag(kind: CheckKind) {
    use crate::state::session::{CHECKED_IN_FLAG_KEY, CHECKED_OUT_FLAG_KEY};
    let Ok(storage) = crate::utils::storage::local_storage() else {
        return;
    };
    let key = match kind {
        CheckKind::In => CHECKED_IN_FLAG_KEY,
        CheckKind::Out => CHECKED_OUT_FLAG_KEY,
    };
    let _ = storage.set_item(key, "true");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(has_checked_in: bool, has_checked_out: bool) -> AttendanceState {
        AttendanceState {
            status: Some(DayStatus {
                has_checked_in,
                has_checked_out,
            }),
            busy: false,
            loading: false,
        }
    }

    #[test]
    fn day_status_maps_checkin_and_checkout_fields_independently() {
        let status = DayStatus::from_response(&AttendanceStatusResponse {
            last_checkin: Some("2026-08-24 09:00:00".into()),
            last_checkout: None,
        });
        assert!(status.has_checked_in);
        assert!(!status.has_checked_out);

        let status = DayStatus::from_response(&AttendanceStatusResponse {
            last_checkin: None,
            last_checkout: Some("2026-08-24 17:00:00".into()),
        });
        assert!(!status.has_checked_in);
        assert!(status.has_checked_out);
    }

    #[test]
    fn guard_blocks_until_status_is_seeded() {
        let unseeded = AttendanceState::default();
        assert!(guard_check(CheckKind::In, &unseeded).is_err());
        assert!(guard_check(CheckKind::Out, &unseeded).is_err());
    }

    #[test]
    fn guard_blocks_second_checkin_and_checkout() {
        let state = seeded(true, false);
        assert!(guard_check(CheckKind::In, &state).is_err());
        assert!(guard_check(CheckKind::Out, &state).is_ok());

        let state = seeded(true, true);
        assert!(guard_check(CheckKind::Out, &state).is_err());
    }

    #[test]
    fn guard_blocks_while_an_action_is_in_flight() {
        let mut state = seeded(false, false);
        state.busy = true;
        assert!(guard_check(CheckKind::In, &state).is_err());
    }

    #[test]
    fn guard_allows_first_checkin() {
        assert!(guard_check(CheckKind::In, &seeded(false, false)).is_ok());
    }
}
