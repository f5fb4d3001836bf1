//! Validated, immutable in-memory marketplace.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::{
    MarketplaceValidationError, RequestId, ServiceId, ServiceOffer, ServiceRequest, StatusStep,
    User, UserId,
};

/// Entities to assemble into a [`MarketplaceSnapshot`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketplaceSnapshotDraft {
    pub registration_bonus: u32,
    pub users: Vec<User>,
    pub services: Vec<ServiceOffer>,
    pub requests: Vec<ServiceRequest>,
    pub balances: BTreeMap<UserId, u32>,
    pub status_steps: Vec<StatusStep>,
}

/// The dataset the marketplace answers from.
///
/// ## Invariants
/// - Identifiers are unique within each collection.
/// - Every provider, requester, service, and balance reference resolves.
/// - The status step order is non-empty.
/// - Collections keep the order they were supplied in.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceSnapshot {
    registration_bonus: u32,
    users: Vec<User>,
    services: Vec<ServiceOffer>,
    requests: Vec<ServiceRequest>,
    balances: BTreeMap<UserId, u32>,
    status_steps: Vec<StatusStep>,
    user_index: HashMap<UserId, usize>,
    service_index: HashMap<ServiceId, usize>,
    request_index: HashMap<RequestId, usize>,
}

impl MarketplaceSnapshot {
    /// Index the entities and check every cross reference.
    pub fn new(draft: MarketplaceSnapshotDraft) -> Result<Self, MarketplaceValidationError> {
        Self::try_from(draft)
    }

    pub fn registration_bonus(&self) -> u32 {
        self.registration_bonus
    }
    pub fn users(&self) -> &[User] {
        &self.users
    }
    pub fn services(&self) -> &[ServiceOffer] {
        &self.services
    }
    pub fn requests(&self) -> &[ServiceRequest] {
        &self.requests
    }
    pub fn status_steps(&self) -> &[StatusStep] {
        &self.status_steps
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.user_index.get(id).and_then(|&i| self.users.get(i))
    }

    pub fn service(&self, id: &ServiceId) -> Option<&ServiceOffer> {
        self.service_index.get(id).and_then(|&i| self.services.get(i))
    }

    pub fn request(&self, id: &RequestId) -> Option<&ServiceRequest> {
        self.request_index.get(id).and_then(|&i| self.requests.get(i))
    }

    /// Credit balance recorded for `user`, if any.
    pub fn balance(&self, user: &UserId) -> Option<u32> {
        self.balances.get(user).copied()
    }

    /// Offers listed by `provider`, in listing order.
    pub fn services_provided_by<'a>(
        &'a self,
        provider: &'a UserId,
    ) -> impl Iterator<Item = &'a ServiceOffer> + 'a {
        self.services
            .iter()
            .filter(move |service| service.provider_id() == provider)
    }

    /// Requests made against `service`, in fixture order.
    pub fn requests_for_service<'a>(
        &'a self,
        service: &'a ServiceId,
    ) -> impl Iterator<Item = &'a ServiceRequest> + 'a {
        self.requests
            .iter()
            .filter(move |request| request.service_id() == service)
    }

    /// Requests where `user` is the requester or the provider.
    pub fn requests_involving<'a>(
        &'a self,
        user: &'a UserId,
    ) -> impl Iterator<Item = &'a ServiceRequest> + 'a {
        self.requests
            .iter()
            .filter(move |request| request.involves(user))
    }
}

fn index_unique<T, K>(
    items: &[T],
    key: impl Fn(&T) -> &K,
    field: &'static str,
) -> Result<HashMap<K, usize>, MarketplaceValidationError>
where
    K: Clone + Eq + Hash + AsRef<str>,
{
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let id = key(item);
        if index.insert(id.clone(), position).is_some() {
            return Err(MarketplaceValidationError::DuplicateId {
                field,
                id: id.as_ref().to_owned(),
            });
        }
    }
    Ok(index)
}

fn ensure_resolves<K>(
    index: &HashMap<K, usize>,
    id: &K,
    field: &'static str,
) -> Result<(), MarketplaceValidationError>
where
    K: Eq + Hash + AsRef<str>,
{
    if index.contains_key(id) {
        return Ok(());
    }
    Err(MarketplaceValidationError::DanglingReference {
        field,
        id: id.as_ref().to_owned(),
    })
}

impl TryFrom<MarketplaceSnapshotDraft> for MarketplaceSnapshot {
    type Error = MarketplaceValidationError;

    fn try_from(draft: MarketplaceSnapshotDraft) -> Result<Self, Self::Error> {
        if draft.status_steps.is_empty() {
            return Err(MarketplaceValidationError::EmptyStatusSteps);
        }

        let user_index = index_unique(&draft.users, User::id, "user.id")?;
        let service_index = index_unique(&draft.services, ServiceOffer::id, "service.id")?;
        let request_index = index_unique(&draft.requests, ServiceRequest::id, "request.id")?;
        index_unique(&draft.status_steps, StatusStep::id, "status_step.id")?;

        for service in &draft.services {
            ensure_resolves(&user_index, service.provider_id(), "service.providerId")?;
        }
        for request in &draft.requests {
            ensure_resolves(&service_index, request.service_id(), "request.serviceId")?;
            ensure_resolves(&user_index, request.requester_id(), "request.requesterId")?;
            ensure_resolves(&user_index, request.provider_id(), "request.providerId")?;
        }
        for user in draft.balances.keys() {
            ensure_resolves(&user_index, user, "balances")?;
        }

        Ok(Self {
            registration_bonus: draft.registration_bonus,
            users: draft.users,
            services: draft.services,
            requests: draft.requests,
            balances: draft.balances,
            status_steps: draft.status_steps,
            user_index,
            service_index,
            request_index,
        })
    }
}
