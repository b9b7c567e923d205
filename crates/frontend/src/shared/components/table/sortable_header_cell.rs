//! Sortable table header cell.
//!
//! Renders the column label with a sort indicator (▲▼, ⇅ when inactive) and
//! forwards clicks to the page's sort toggle.

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::company::{SortKey, SortSpec};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Column label
    #[prop(into)]
    label: String,

    /// Sort key this column controls
    sort_key: SortKey,

    /// Current sort spec from page state
    #[prop(into)]
    current_sort: Signal<SortSpec>,

    /// Callback when the header is clicked
    on_sort: Callback<SortKey>,

    /// Minimum column width
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let handle_click = move |_| {
        on_sort.run(sort_key);
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {label}
                <span class=move || get_sort_class(&current_sort.get(), sort_key)>
                    {move || get_sort_indicator(&current_sort.get(), sort_key)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
