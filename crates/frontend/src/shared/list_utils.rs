/// List page helpers: debounced search input and sort-header indicators.
use contracts::domain::company::{SortDirection, SortKey, SortSpec};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Indicator glyph for a sortable column header.
pub fn get_sort_indicator(current: &SortSpec, key: SortKey) -> &'static str {
    if current.key == key {
        if current.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current: &SortSpec, key: SortKey) -> &'static str {
    if current.key == key {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Toggle semantics shared by the header cells and the direction button:
/// clicking the active key flips direction, a new key starts ascending.
pub fn toggle_sort(sort: &mut SortSpec, key: SortKey) {
    if sort.key == key {
        sort.direction = sort.direction.toggle();
    } else {
        sort.key = key;
        sort.direction = SortDirection::Ascending;
    }
}

/// Search input with trailing-edge debounce and an inline clear button.
///
/// Debounce is a timing policy only: the clear button bypasses it so an
/// explicit reset takes effect immediately.
#[component]
pub fn SearchInput(
    /// Current committed filter value (used to seed the input)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Debounce delay in milliseconds
    #[prop(optional, default = 300)]
    delay_ms: i32,
) -> impl IntoView {
    // Local state for the input, ahead of the debounce.
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Cancel the previous timer, if any
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let window = web_sys::window().expect("no window");
        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                delay_ms,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let clear_filter = move |_| {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">
                {crate::shared::icons::icon("search")}
            </span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        type="button"
                        class="search-input__clear"
                        title="Clear search"
                        on:click=clear_filter
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
