use crate::components::Layout;
use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AdminPanel;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Layout>
            <AdminPanel />
        </Layout>
    }
}
