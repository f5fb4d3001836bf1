//! Catalogue filtering over service offers.
//!
//! A [`ServiceFilter`] combines a free-text query with optional rate and tag
//! constraints. Filtering is a stable subsequence: matching offers keep the
//! order they were listed in and nothing is re-sorted.

use std::collections::BTreeSet;

use super::marketplace::{CreditRate, MarketplaceSnapshot, ServiceOffer, Tag, UserId};

/// Sentinel accepted by [`ServiceFilter::parse`] meaning "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// Resolves a provider identifier to a display name.
pub trait ProviderDirectory {
    /// Display name for `id`, or `None` when the member is unknown.
    fn provider_name(&self, id: &UserId) -> Option<&str>;
}

impl ProviderDirectory for MarketplaceSnapshot {
    fn provider_name(&self, id: &UserId) -> Option<&str> {
        self.user(id).map(|user| user.name())
    }
}

/// Rate constraint of a [`ServiceFilter`].
///
/// A specific rate is kept as the literal the client sent and compared with
/// each offer's rate written in decimal, so `02` or `0` simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RateFilter {
    /// Any rate matches.
    #[default]
    All,
    /// Only offers whose rate renders exactly as this text match.
    Only(String),
}

impl RateFilter {
    /// Constrain to one known rate.
    pub fn exact(rate: CreditRate) -> Self {
        Self::Only(rate.get().to_string())
    }
}

/// Tag constraint of a [`ServiceFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    /// Any tag matches.
    #[default]
    All,
    /// Only offers carrying exactly this tag match.
    Only(String),
}

/// Query, rate, and tag constraints applied to the catalogue.
///
/// # Examples
/// ```
/// use timebank_backend::domain::catalogue_filter::{RateFilter, ServiceFilter, TagFilter};
///
/// let filter = ServiceFilter::parse(Some("  Guitar "), Some("all"), None);
/// assert_eq!(filter.query(), "guitar");
/// assert_eq!(filter.rate(), &RateFilter::All);
/// assert_eq!(filter.tag(), &TagFilter::All);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceFilter {
    query: String,
    rate: RateFilter,
    tag: TagFilter,
}

impl ServiceFilter {
    /// Build a filter, normalising the query by trimming and lower-casing it.
    pub fn new(query: &str, rate: RateFilter, tag: TagFilter) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            rate,
            tag,
        }
    }

    /// A filter that matches every offer.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from raw client values.
    ///
    /// Absent, empty, or `all` values place no constraint. Any other rate or
    /// tag is taken verbatim; every combination is valid, even one that
    /// matches nothing.
    pub fn parse(query: Option<&str>, rate: Option<&str>, tag: Option<&str>) -> Self {
        let rate = match rate {
            None | Some("") | Some(ALL_SENTINEL) => RateFilter::All,
            Some(raw) => RateFilter::Only(raw.to_owned()),
        };
        let tag = match tag {
            None | Some("") | Some(ALL_SENTINEL) => TagFilter::All,
            Some(raw) => TagFilter::Only(raw.to_owned()),
        };
        Self::new(query.unwrap_or_default(), rate, tag)
    }

    /// The normalised query text.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn rate(&self) -> &RateFilter {
        &self.rate
    }

    pub fn tag(&self) -> &TagFilter {
        &self.tag
    }

    /// Whether `service` satisfies every constraint.
    pub fn matches(&self, service: &ServiceOffer, providers: &impl ProviderDirectory) -> bool {
        self.matches_rate(service)
            && self.matches_tag(service)
            && self.matches_query(service, providers)
    }

    fn matches_query(&self, service: &ServiceOffer, providers: &impl ProviderDirectory) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let contains = |text: &str| text.to_lowercase().contains(&self.query);
        contains(service.title())
            || contains(service.summary())
            || providers
                .provider_name(service.provider_id())
                .is_some_and(contains)
    }

    fn matches_rate(&self, service: &ServiceOffer) -> bool {
        match &self.rate {
            RateFilter::All => true,
            RateFilter::Only(raw) => service.rate().get().to_string() == *raw,
        }
    }

    fn matches_tag(&self, service: &ServiceOffer) -> bool {
        match &self.tag {
            TagFilter::All => true,
            TagFilter::Only(tag) => service.has_tag(tag),
        }
    }
}

/// Offers satisfying `filter`, in their original order.
///
/// Never fails: an empty result is a valid answer.
pub fn filter_services<'a, I>(
    services: I,
    providers: &impl ProviderDirectory,
    filter: &ServiceFilter,
) -> Vec<&'a ServiceOffer>
where
    I: IntoIterator<Item = &'a ServiceOffer>,
{
    services
        .into_iter()
        .filter(|service| filter.matches(service, providers))
        .collect()
}

/// Distinct tags in order of first appearance.
pub fn available_tags<'a, I>(services: I) -> Vec<Tag>
where
    I: IntoIterator<Item = &'a ServiceOffer>,
{
    let mut tags: Vec<Tag> = Vec::new();
    for tag in services.into_iter().flat_map(ServiceOffer::tags) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Distinct rates in ascending order.
pub fn available_rates<'a, I>(services: I) -> Vec<CreditRate>
where
    I: IntoIterator<Item = &'a ServiceOffer>,
{
    services
        .into_iter()
        .map(ServiceOffer::rate)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
