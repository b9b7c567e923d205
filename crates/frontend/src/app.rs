use crate::domain::company::ui::list::CompanyDirectory;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CompanyDirectory />
    }
}
