use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::domain::company::Company;
use contracts::shared::format::{format_count_field, format_currency_field, format_plain_field};
use leptos::prelude::*;

/// One company in the grid view. Numeric fields are pre-formatted here;
/// the card renders the pipeline output as-is and never re-derives anything.
#[component]
pub fn CompanyCard(
    company: Company,
    /// Appear-animation delay for the stagger effect across the grid.
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let employees = format_count_field(company.employees.as_ref());
    let revenue = format_currency_field(company.revenue.as_ref());
    let founded = format_plain_field(company.founded.as_ref());

    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="company-card">
                <div class="company-card__top">
                    <div class="company-card__name">{company.name}</div>
                    <div class="company-card__meta">
                        {icon("briefcase")}
                        <span>{company.industry}</span>
                    </div>
                    <div class="company-card__meta company-card__meta--muted">
                        {icon("map-pin")}
                        <span>{company.location}</span>
                    </div>
                    {company.description.map(|d| view! {
                        <div class="company-card__description">{d}</div>
                    })}
                </div>

                <div class="company-card__footer">
                    <div class="company-card__stats">
                        <div class="company-card__stat">
                            {icon("users")}
                            <div>
                                <div class="company-card__stat-value">{employees}</div>
                                <div class="company-card__stat-label">"Employees"</div>
                            </div>
                        </div>
                        <div class="company-card__stat">
                            {icon("dollar-sign")}
                            <div>
                                <div class="company-card__stat-value">{revenue}</div>
                                <div class="company-card__stat-label">"Revenue"</div>
                            </div>
                        </div>
                    </div>
                    <div class="company-card__founded">
                        {icon("calendar")}
                        <span>{format!("Founded {}", founded)}</span>
                    </div>
                    // Placeholder action: no insight backend exists yet.
                    <Button class="company-card__action">
                        {icon("sparkles")}
                        " Get AI Insight"
                    </Button>
                </div>
            </div>
        </CardAnimated>
    }
}
