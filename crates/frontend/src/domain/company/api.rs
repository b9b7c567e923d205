use contracts::domain::company::{dataset, Company};
use gloo_timers::future::TimeoutFuture;

/// Simulated fetch latency, ms. Stands in for a future real API call.
const LOAD_DELAY_MS: u32 = 800;

/// Hands out a copy of the bundled record store after the simulated delay.
/// Always completes, always succeeds: no cancellation, retry or timeout.
pub async fn fetch_companies() -> Vec<Company> {
    TimeoutFuture::new(LOAD_DELAY_MS).await;
    let companies = dataset::companies().to_vec();
    log::info!("directory loaded: {} companies", companies.len());
    companies
}
