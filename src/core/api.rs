use std::time::Duration;

use reqwest::Client;

use crate::core::{
    models::{
        CatCard,
        CatRecord,
    },
    PawdeckError,
};

pub const CATAAS_BASE: &str = "https://cataas.com";

/// How many records to request for the candidate pool. Rounds are dealt from
/// this pool locally, so one fetch covers many rounds.
pub const FETCH_LIMIT: u32 = 500;

fn http_client() -> Result<Client, PawdeckError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("pawdeck/0.1 (+reqwest)")
        .build()
        .map_err(|e| PawdeckError::Custom(format!("HTTP client build failed: {e}")))
}

/// Fetches the candidate pool from Cataas. A successful response with zero
/// records is reported as `EmptyPool` so the caller lands in the same terminal
/// state as a network failure.
pub async fn fetch_cats(limit: u32) -> Result<Vec<CatCard>, PawdeckError> {
    let url = format!("{CATAAS_BASE}/api/cats?limit={limit}&skip=0");

    let response = http_client()?.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(PawdeckError::Custom(format!(
            "HTTP error {} from {}",
            response.status(),
            url
        )));
    }

    let records: Vec<CatRecord> = response.json().await?;
    if records.is_empty() {
        return Err(PawdeckError::EmptyPool);
    }

    Ok(records.into_iter().map(|r| CatCard::from_record(r, CATAAS_BASE)).collect())
}
