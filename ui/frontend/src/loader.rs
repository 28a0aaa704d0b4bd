use film_common::{Dataset, LoadError, MovieRecord};
use gloo_net::http::Request;

/// Fetches the dataset once. Failures are returned, never retried.
pub async fn load_dataset(url: &str) -> Result<Vec<MovieRecord>, LoadError> {
    log::info!("Loading movie data from `{url}`");

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let dataset = Dataset::parse(&body)?;
    log::info!("Loaded {} movie entries", dataset.len());

    Ok(dataset.into_records())
}
