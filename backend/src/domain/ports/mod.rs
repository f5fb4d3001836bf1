//! Domain ports and supporting types for the hexagonal boundary.

mod marketplace_query;

#[cfg(test)]
pub use marketplace_query::MockMarketplaceQuery;
pub use marketplace_query::MarketplaceQuery;
