use std::rc::Rc;

use super::repository::AdminRepository;
use super::utils::{normalize_department, report_filename, ReportQuery};
use crate::api::{ApiClient, ApiError, AttendanceRecord};
use crate::utils::{download::XLSX_MIME, trigger_binary_download};
use leptos::*;

#[derive(Clone)]
pub struct AdminViewModel {
    pub filter_input: RwSignal<String>,
    pub query: RwSignal<ReportQuery>,
    pub page: RwSignal<usize>,
    pub report_resource: Resource<ReportQuery, Result<Vec<AttendanceRecord>, ApiError>>,
    pub export_action: Action<Option<String>, Result<(String, Vec<u8>), ApiError>>,
    pub export_error: RwSignal<Option<String>>,
}

pub fn use_admin_view_model() -> AdminViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repo = AdminRepository::new_with_client(Rc::new(api));

    let filter_input = create_rw_signal(String::new());
    let query = create_rw_signal(ReportQuery::default());
    let page = create_rw_signal(1usize);
    let export_error = create_rw_signal(None::<String>);

    let repo_report = repo.clone();
    let report_resource = create_resource(
        move || query.get(),
        move |query| {
            let repo = repo_report.clone();
            async move { repo.fetch_report(query.department_param()).await }
        },
    );

    let repo_export = repo.clone();
    let export_action = create_action(move |department: &Option<String>| {
        let repo = repo_export.clone();
        let department = department.clone();
        async move {
            let bytes = repo.download_report(department.as_deref()).await?;
            Ok::<_, ApiError>((report_filename(department.as_deref()), bytes))
        }
    });

    create_effect(move |_| {
        if let Some(result) = export_action.value().get() {
            match result {
                Ok((filename, bytes)) => {
                    export_error.set(None);
                    if let Err(err) = trigger_binary_download(&filename, &bytes, XLSX_MIME) {
                        export_error.set(Some(err));
                    }
                }
                Err(err) => export_error.set(Some(err.error)),
            }
        }
    });

    AdminViewModel {
        filter_input,
        query,
        page,
        report_resource,
        export_action,
        export_error,
    }
}

impl AdminViewModel {
    /// Applies the typed department filter: refetch from page one, even when
    /// the text did not change.
    pub fn apply_filter(&self) {
        let department = normalize_department(&self.filter_input.get_untracked());
        self.query
            .update(|query| *query = query.with_department(department));
        self.page.set(1);
    }

    pub fn export(&self) {
        if self.export_action.pending().get_untracked() {
            return;
        }
        let department = self.query.get_untracked().department;
        self.export_action.dispatch(department);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_on_page_one_without_filter() {
        with_runtime(|| {
            let vm = use_admin_view_model();
            assert_eq!(vm.page.get(), 1);
            assert!(vm.query.get().department.is_none());
            assert!(vm.export_error.get().is_none());
        });
    }

    #[test]
    fn apply_filter_resets_the_page_and_bumps_the_query() {
        with_runtime(|| {
            let vm = use_admin_view_model();
            vm.page.set(3);
            vm.filter_input.set("  engineering ".into());

            let before = vm.query.get();
            vm.apply_filter();
            let after = vm.query.get();

            assert_eq!(vm.page.get(), 1);
            assert_eq!(after.department.as_deref(), Some("engineering"));
            assert_ne!(before, after);

            // same text again still produces a fresh query
            vm.apply_filter();
            assert_ne!(after, vm.query.get());
        });
    }

    #[test]
    fn blank_filter_clears_the_department() {
        with_runtime(|| {
            let vm = use_admin_view_model();
            vm.filter_input.set("ops".into());
            vm.apply_filter();
            assert!(vm.query.get().department.is_some());

            vm.filter_input.set("   ".into());
            vm.apply_filter();
            assert!(vm.query.get().department.is_none());
        });
    }
}
