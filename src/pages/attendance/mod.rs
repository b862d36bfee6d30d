use crate::components::Layout;
use leptos::*;

pub mod components;
pub mod view_model;

mod panel;

pub use panel::AttendancePanel;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <Layout>
            <AttendancePanel />
        </Layout>
    }
}
