//! CardAnimated — wrapper over Thaw Card with an appear animation.
//!
//! The animation is defined in `layout.css` (`@keyframes card-appear`).
//! Use `delay_ms` for a stagger effect across a grid of cards.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for the stagger effect).
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
