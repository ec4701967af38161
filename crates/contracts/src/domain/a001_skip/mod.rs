pub mod aggregate;
pub mod catalog_query;
pub mod checkout;
pub mod selection;

pub use aggregate::{Skip, SkipId, SkipValidationError};
pub use catalog_query::{CatalogQuery, SkipFilter};
pub use checkout::{CheckoutHandoff, HirePeriod};
pub use selection::SkipSelection;
