//! Catalog endpoint location and the errors a catalog load can end with.

use crate::domain::a001_skip::aggregate::{Skip, SkipValidationError};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk/api/skips/by-location";
const DEFAULT_POSTCODE: &str = "NR32";
const DEFAULT_AREA: &str = "Lowestoft";

/// Location-scoped catalog endpoint.
///
/// Defaults are fixed at build time; `SKIP_CATALOG_URL`,
/// `SKIP_CATALOG_POSTCODE` and `SKIP_CATALOG_AREA` override them when set
/// in the environment of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLocation {
    pub base_url: String,
    pub postcode: String,
    pub area: String,
}

impl Default for CatalogLocation {
    fn default() -> Self {
        Self {
            base_url: option_env!("SKIP_CATALOG_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            postcode: option_env!("SKIP_CATALOG_POSTCODE")
                .unwrap_or(DEFAULT_POSTCODE)
                .to_string(),
            area: option_env!("SKIP_CATALOG_AREA")
                .unwrap_or(DEFAULT_AREA)
                .to_string(),
        }
    }
}

impl CatalogLocation {
    pub fn new(base_url: &str, postcode: &str, area: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            postcode: postcode.to_string(),
            area: area.to_string(),
        }
    }

    /// Full GET url, e.g. `.../by-location?postcode=NR32&area=Lowestoft`
    pub fn url(&self) -> String {
        format!(
            "{}?postcode={}&area={}",
            self.base_url.trim_end_matches('?'),
            urlencoding::encode(&self.postcode),
            urlencoding::encode(&self.area)
        )
    }
}

/// The single failure kind of the widget: the catalog could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport failure, carries the browser's message
    #[error("{0}")]
    Network(String),

    #[error("Failed to fetch skips")]
    Status(u16),

    #[error("Failed to read skips: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Transport failure from a JS exception: only its `message` is shown,
    /// the `name` (`TypeError`, ...) is used when the message is empty.
    pub fn network(name: &str, message: &str) -> Self {
        let text = if message.trim().is_empty() { name } else { message };
        CatalogError::Network(text.to_string())
    }

    /// Text that replaces the whole skip size page.
    pub fn display_message(&self) -> String {
        format!("Error: {}", self)
    }
}

/// Result of screening a freshly fetched catalog
#[derive(Debug, Default)]
pub struct AcceptedCatalog {
    pub skips: Vec<Skip>,
    pub rejected: Vec<SkipValidationError>,
}

/// Keeps the records whose numeric fields are usable, in endpoint order.
pub fn accept_catalog(skips: Vec<Skip>) -> AcceptedCatalog {
    let mut accepted = AcceptedCatalog::default();
    for skip in skips {
        match skip.validate() {
            Ok(()) => accepted.skips.push(skip),
            Err(e) => accepted.rejected.push(e),
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_skip::aggregate::test_skip;

    #[test]
    fn test_catalog_url() {
        let location = CatalogLocation::new(DEFAULT_BASE_URL, "NR32", "Lowestoft");
        assert_eq!(
            location.url(),
            "https://app.wewantwaste.co.uk/api/skips/by-location?postcode=NR32&area=Lowestoft"
        );
    }

    #[test]
    fn test_catalog_url_encodes_parameters() {
        let location = CatalogLocation::new("http://localhost/skips", "NR32 1AB", "Great Yarmouth");
        assert_eq!(
            location.url(),
            "http://localhost/skips?postcode=NR32%201AB&area=Great%20Yarmouth"
        );
    }

    #[test]
    fn test_error_messages() {
        let network = CatalogError::Network("NetworkError when attempting to fetch resource.".into());
        assert_eq!(
            network.display_message(),
            "Error: NetworkError when attempting to fetch resource."
        );
        assert_eq!(
            CatalogError::Status(500).display_message(),
            "Error: Failed to fetch skips"
        );
        assert_eq!(
            CatalogError::Decode("expected value".into()).to_string(),
            "Failed to read skips: expected value"
        );
    }

    #[test]
    fn test_network_error_shows_message_without_name() {
        let error = CatalogError::network("TypeError", "Failed to fetch");
        assert_eq!(error, CatalogError::Network("Failed to fetch".into()));
        assert_eq!(error.display_message(), "Error: Failed to fetch");

        assert_eq!(
            CatalogError::network("AbortError", "").display_message(),
            "Error: AbortError"
        );
    }

    #[test]
    fn test_null_price_drops_only_that_record() {
        let json = r#"[
            {"id":1,"size":4,"price_before_vat":200,"vat":20,"hire_period_days":14,"allowed_on_road":true,"allows_heavy_waste":false},
            {"id":2,"size":6,"price_before_vat":null,"vat":20,"hire_period_days":14,"allowed_on_road":true,"allows_heavy_waste":true}
        ]"#;
        let skips: Vec<Skip> = serde_json::from_str(json).unwrap();
        assert_eq!(skips.len(), 2);

        let accepted = accept_catalog(skips);
        assert_eq!(accepted.skips.len(), 1);
        assert_eq!(accepted.skips[0].id.value(), 1);
        assert!(matches!(
            accepted.rejected.as_slice(),
            [SkipValidationError::InvalidPrice { id: 2, .. }]
        ));
    }

    #[test]
    fn test_accept_catalog_drops_invalid_records() {
        let input = vec![
            test_skip(1, 200.0, 20.0, true, false),
            test_skip(2, f64::NAN, 20.0, true, false),
            test_skip(3, 300.0, -1.0, true, false),
            test_skip(4, 250.0, 20.0, false, true),
        ];
        let accepted = accept_catalog(input);
        let ids: Vec<i64> = accepted.skips.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(accepted.rejected.len(), 2);
    }
}
