use crate::components::{ErrorMessage, LoadingSpinner};
use crate::pages::admin::{
    components::report_table::ReportTable,
    view_model::{use_admin_view_model, AdminViewModel},
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let view_model = use_admin_view_model();
    let filter_input = view_model.filter_input;
    let page = view_model.page;
    let report_resource = view_model.report_resource;
    let export_error = view_model.export_error;
    let export_pending = view_model.export_action.pending();

    let handle_filter = {
        let view_model = view_model.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            view_model.apply_filter();
        }
    };

    let handle_export = {
        let view_model: AdminViewModel = view_model.clone();
        move |_| view_model.export()
    };

    view! {
        <div class="bg-white shadow rounded-lg">
            <div class="px-4 py-4 flex flex-wrap items-center justify-between gap-4 border-b border-gray-200">
                <h2 class="text-lg font-medium text-gray-900">"Attendance Report"</h2>
                <div class="flex items-center gap-3">
                    <form class="flex items-center gap-2" on:submit=handle_filter>
                        <input
                            type="text"
                            placeholder="Filter by department"
                            class="border border-gray-300 rounded-md px-3 py-1.5 text-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                            prop:value=filter_input
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                filter_input.set(target.value());
                            }
                        />
                        <button
                            type="submit"
                            class="px-3 py-1.5 border border-gray-300 rounded-md text-sm hover:bg-gray-50"
                        >
                            "Apply"
                        </button>
                    </form>
                    <button
                        on:click=handle_export
                        disabled=export_pending
                        class="px-3 py-1.5 bg-blue-600 text-white rounded-md text-sm hover:bg-blue-700 disabled:opacity-50"
                    >
                        {move || if export_pending.get() { "Exporting..." } else { "Export XLSX" }}
                    </button>
                </div>
            </div>

            {move || {
                export_error
                    .get()
                    .map(|message| view! { <ErrorMessage message=message /> })
            }}

            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    report_resource.get().map(|result| match result {
                        Ok(records) => view! { <ReportTable records=records page=page /> }.into_view(),
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}
