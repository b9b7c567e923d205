use leptos::prelude::*;

/// Centered spinner shown while the record store is loading.
/// The animation is defined in `layout.css` (`@keyframes spinner-rotate`).
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
        </div>
    }
}
