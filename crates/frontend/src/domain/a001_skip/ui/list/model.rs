use contracts::domain::a001_skip::Skip;
use contracts::shared::catalog::{accept_catalog, CatalogError, CatalogLocation};
use gloo_net::http::Request;

fn network_error(e: gloo_net::Error) -> CatalogError {
    match e {
        gloo_net::Error::JsError(js) => CatalogError::network(&js.name, &js.message),
        other => CatalogError::Network(other.to_string()),
    }
}

/// One GET against the location-scoped catalog endpoint. No retry.
pub async fn fetch_skips(location: &CatalogLocation) -> Result<Vec<Skip>, CatalogError> {
    let url = location.url();
    log::info!("Loading skip catalog from {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let skips: Vec<Skip> = response
        .json()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))?;

    let accepted = accept_catalog(skips);
    for rejected in &accepted.rejected {
        log::warn!("Dropping catalog record: {}", rejected);
    }
    log::info!("Loaded {} skips", accepted.skips.len());
    Ok(accepted.skips)
}
