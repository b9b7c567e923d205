mod state;

use crate::domain::company::api::fetch_companies;
use crate::domain::company::ui::card::CompanyCard;
use crate::shared::components::loading::Loading;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::list_utils::{toggle_sort, SearchInput};
use contracts::domain::company::{pipeline, Company, FilterCriteria, SortKey, SortSpec};
use contracts::shared::format::{format_count_field, format_currency_field, format_plain_field};
use leptos::prelude::*;
use state::{create_state, ViewMode};
use thaw::*;

#[component]
fn DirectoryHeader(#[prop(into)] total_count: Signal<usize>) -> impl IntoView {
    view! {
        <header class="page__header">
            <div class="page__header-left">
                {icon("building")}
                <h1 class="page__title">"Company Directory"</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || total_count.get().to_string()}</span>
                </Badge>
            </div>
            <p class="page__subtitle">"Discover innovative companies shaping the future"</p>
        </header>
    }
}

/// Distinct non-empty values of one record field, sorted, as select options
/// with a leading "all" entry.
fn field_options(companies: &[Company], field: fn(&Company) -> &str, all_label: &str) -> Vec<(String, String)> {
    let mut values: Vec<String> = companies
        .iter()
        .map(|c| field(c).to_string())
        .filter(|v| !v.is_empty())
        .collect();
    values.sort();
    values.dedup();

    let mut options = vec![(String::new(), all_label.to_string())];
    options.extend(values.into_iter().map(|v| (v.clone(), v)));
    options
}

#[component]
pub fn CompanyDirectory() -> impl IntoView {
    let state = create_state();

    let (items, set_items) = signal(Vec::<Company>::new());
    let (is_loading, set_is_loading) = signal(true);

    // One-time simulated fetch of the record store.
    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let companies = fetch_companies().await;
            set_items.set(companies);
            set_is_loading.set(false);
        });
    });

    // The derivation pipeline is the sole source of what gets rendered;
    // the views below never re-filter or re-sort.
    let visible = Memo::new(move |_| {
        let st = state.get();
        items.with(|list| pipeline::derive(list, &st.criteria, &st.sort))
    });

    let location_options =
        Signal::derive(move || items.with(|list| field_options(list, |c| &c.location, "All Locations")));
    let industry_options =
        Signal::derive(move || items.with(|list| field_options(list, |c| &c.industry, "All Industries")));

    // Remount key for the debounced search input: bumping it reseeds the
    // local input text from the (now cleared) committed criteria.
    let search_epoch = RwSignal::new(0u32);

    let set_name = Callback::new(move |v: String| {
        state.update(|s| s.criteria.name = v);
    });
    let set_location = Callback::new(move |v: String| {
        state.update(|s| s.criteria.location = v);
    });
    let set_industry = Callback::new(move |v: String| {
        state.update(|s| s.criteria.industry = v);
    });
    let clear_all = move |_| {
        state.update(|s| s.criteria = FilterCriteria::default());
        search_epoch.update(|e| *e += 1);
    };

    let on_sort = Callback::new(move |key: SortKey| {
        state.update(|s| toggle_sort(&mut s.sort, key));
    });
    let set_sort_key = Callback::new(move |v: String| {
        state.update(|s| s.sort.key = SortKey::parse(&v));
    });
    let toggle_direction = move |_| {
        state.update(|s| s.sort.direction = s.sort.direction.toggle());
    };

    let active_filters = Signal::derive(move || state.with(|s| s.criteria.active_count()));
    let current_sort = Signal::derive(move || state.with(|s| s.sort));
    let view_mode = Signal::derive(move || state.with(|s| s.view));

    view! {
        <div class="page page--wide">
            <DirectoryHeader total_count=Signal::derive(move || visible.with(|v| v.len())) />

            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        {icon("filter")}
                        <span class="filter-panel__title">"Filter & Search"</span>
                        {move || {
                            let count = active_filters.get();
                            if count > 0 {
                                view! { <span class="badge badge--primary">{count}</span> }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>
                    <div class="filter-panel-header__right">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || state.with(|s| s.criteria.is_empty()))
                            on_click=clear_all
                        >
                            "Clear Filters"
                        </Button>
                    </div>
                </div>

                <div class="filter-panel-content">
                    {move || {
                        let _ = search_epoch.get();
                        view! {
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.criteria.name.clone()))
                                on_change=set_name
                                placeholder="Search by Company Name..."
                            />
                        }
                    }}
                    <div class="select-wrap">
                        <Select
                            value=Signal::derive(move || state.with(|s| s.criteria.location.clone()))
                            on_change=set_location
                            options=location_options
                            id="filter-location"
                        />
                        {move || if state.with(|s| s.criteria.location.is_empty()) {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <button
                                    type="button"
                                    class="select-wrap__clear"
                                    title="Clear location filter"
                                    on:click=move |_| set_location.run(String::new())
                                >
                                    {icon("x")}
                                </button>
                            }.into_any()
                        }}
                    </div>
                    <div class="select-wrap">
                        <Select
                            value=Signal::derive(move || state.with(|s| s.criteria.industry.clone()))
                            on_change=set_industry
                            options=industry_options
                            id="filter-industry"
                        />
                        {move || if state.with(|s| s.criteria.industry.is_empty()) {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <button
                                    type="button"
                                    class="select-wrap__clear"
                                    title="Clear industry filter"
                                    on:click=move |_| set_industry.run(String::new())
                                >
                                    {icon("x")}
                                </button>
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>

            <div class="toolbar">
                <div class="toolbar__group">
                    <span class="toolbar__label">"View:"</span>
                    <Button
                        appearance=move || if view_mode.get() == ViewMode::Grid { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                        on_click=move |_| state.update(|s| s.view = ViewMode::Grid)
                    >
                        {icon("grid")}
                        " Grid"
                    </Button>
                    <Button
                        appearance=move || if view_mode.get() == ViewMode::Table { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                        on_click=move |_| state.update(|s| s.view = ViewMode::Table)
                    >
                        {icon("rows")}
                        " Table"
                    </Button>
                </div>

                <div class="toolbar__group">
                    <Select
                        label="Sort:"
                        id="sort-key"
                        value=Signal::derive(move || current_sort.get().key.as_str().to_string())
                        on_change=set_sort_key
                        options=Signal::derive(|| vec![
                            ("name".to_string(), "Name (A–Z)".to_string()),
                            ("employees".to_string(), "Employees".to_string()),
                            ("revenue".to_string(), "Revenue".to_string()),
                            ("founded".to_string(), "Founded".to_string()),
                        ])
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=toggle_direction
                    >
                        {move || if current_sort.get().direction.is_ascending() { "▲" } else { "▼" }}
                    </Button>
                </div>
            </div>

            <div class="page__body">
                {move || {
                    if is_loading.get() {
                        view! { <Loading /> }.into_any()
                    } else if visible.with(|v| v.is_empty()) {
                        view! { <p class="empty-state">"No companies found."</p> }.into_any()
                    } else if view_mode.get() == ViewMode::Grid {
                        view! { <DirectoryGrid companies=visible.get() /> }.into_any()
                    } else {
                        view! {
                            <DirectoryTable
                                companies=visible.get()
                                current_sort=current_sort
                                on_sort=on_sort
                            />
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn DirectoryGrid(companies: Vec<Company>) -> impl IntoView {
    view! {
        <div class="company-grid">
            {companies
                .into_iter()
                .enumerate()
                .map(|(i, company)| view! {
                    <CompanyCard company=company delay_ms=(i as u32) * 40 />
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DirectoryTable(
    companies: Vec<Company>,
    #[prop(into)] current_sort: Signal<SortSpec>,
    on_sort: Callback<SortKey>,
) -> impl IntoView {
    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <SortableHeaderCell
                        label="Name"
                        sort_key=SortKey::Name
                        current_sort=current_sort
                        on_sort=on_sort
                        min_width=220.0
                    />
                    <TableHeaderCell min_width=140.0>"Industry"</TableHeaderCell>
                    <TableHeaderCell min_width=140.0>"Location"</TableHeaderCell>
                    <SortableHeaderCell
                        label="Employees"
                        sort_key=SortKey::Employees
                        current_sort=current_sort
                        on_sort=on_sort
                        min_width=110.0
                        align="right"
                    />
                    <SortableHeaderCell
                        label="Revenue"
                        sort_key=SortKey::Revenue
                        current_sort=current_sort
                        on_sort=on_sort
                        min_width=110.0
                        align="right"
                    />
                    <SortableHeaderCell
                        label="Founded"
                        sort_key=SortKey::Founded
                        current_sort=current_sort
                        on_sort=on_sort
                        min_width=100.0
                    />
                    <TableHeaderCell min_width=140.0>"Action"</TableHeaderCell>
                </TableRow>
            </TableHeader>

            <TableBody>
                {companies
                    .into_iter()
                    .map(|c| {
                        let employees = format_count_field(c.employees.as_ref());
                        let revenue = format_currency_field(c.revenue.as_ref());
                        let founded = format_plain_field(c.founded.as_ref());
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <div class="table__primary">{c.name}</div>
                                        {c.description.map(|d| view! {
                                            <div class="table__secondary">{d}</div>
                                        })}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell><TableCellLayout>{c.industry}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{c.location}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <div class="table__cell--right">{employees}</div>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <div class="table__cell--right">{revenue}</div>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell><TableCellLayout>{founded}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        // Placeholder action: no insight backend exists yet.
                                        <button type="button" class="button button--primary button--sm">
                                            {icon("sparkles")}
                                            " Get AI Insight"
                                        </button>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}
