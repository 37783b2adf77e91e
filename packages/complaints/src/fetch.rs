//! Paginated Socrata fetcher for the 311 complaint feed.
//!
//! Pages through the dataset with the `$limit` and `$offset` query
//! parameters. No retries or caching; a failure is reported to the caller
//! so it can be surfaced as a "data unavailable" state.

use std::fmt::Write as _;
use std::time::Duration;

use crate::{ComplaintError, ComplaintRecord};

/// Open Brooklyn graffiti complaints from the NYC 311 service requests
/// dataset.
pub const DEFAULT_API_URL: &str = "https://data.cityofnewyork.us/resource/fhrw-4uyv.json\
     ?borough=BROOKLYN&complaint_type=Graffiti&status=Open";

/// Configuration for a complaint fetch operation.
#[derive(Debug, Clone)]
pub struct ComplaintsConfig {
    /// Base API URL including the borough/type/status filters.
    pub api_url: String,
    /// Optional Socrata app token (lifts the anonymous rate limit).
    pub app_token: Option<String>,
    /// Page size for `$limit`/`$offset` pagination.
    pub page_size: u64,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ComplaintsConfig {
    /// Builds the configuration from the environment:
    /// `COMPLAINTS_API_URL` and `SOCRATA_APP_TOKEN`, with defaults for
    /// everything else.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("COMPLAINTS_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_owned()),
            app_token: std::env::var("SOCRATA_APP_TOKEN").ok(),
            page_size: 1000,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Fetches all records from the complaint endpoint with pagination.
///
/// # Errors
///
/// Returns [`ComplaintError`] if a request fails, a response has a non-2xx
/// status, or a response body is not valid JSON.
pub async fn fetch_complaints(
    config: &ComplaintsConfig,
) -> Result<Vec<ComplaintRecord>, ComplaintError> {
    let client = reqwest::Client::builder().timeout(config.timeout).build()?;

    let mut all_records: Vec<ComplaintRecord> = Vec::new();
    let mut offset: u64 = 0;

    loop {
        let mut url = format!(
            "{}&$limit={}&$offset={offset}",
            config.api_url, config.page_size
        );
        if let Some(token) = &config.app_token {
            write!(url, "&$$app_token={token}").unwrap();
        }

        log::info!("Fetching 311 graffiti complaints: offset={offset}");
        let response = client.get(&url).send().await?.error_for_status()?;
        let records: Vec<ComplaintRecord> = response.json().await?;

        let count = records.len() as u64;
        if count == 0 {
            break;
        }

        all_records.extend(records);
        offset += count;

        if count < config.page_size {
            break;
        }
    }

    log::info!("Downloaded {} open graffiti complaints", all_records.len());
    Ok(all_records)
}
