//! Request state of a single fetch, ticketed so that late responses are dropped.

use crate::shared::api_utils::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::fmt::Debug;
use std::future::Future;

/// Lifecycle of one fetch as seen by a view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Identity of one issued request.
///
/// The generation grows with every request on a slot, so two requests for the
/// same key (A then B then A again, or a refresh) are still told apart.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTicket<K> {
    pub key: K,
    pub generation: u64,
}

/// A response may be applied only while its ticket is still the latest one issued
pub fn is_current_request<K: PartialEq>(
    current: Option<&RequestTicket<K>>,
    ticket: &RequestTicket<K>,
) -> bool {
    current == Some(ticket)
}

/// Reactive slot holding the state of the latest request for a key.
///
/// Issuing a new request supersedes every earlier one; a response that
/// arrives for an older request, or after the owning view was disposed, is
/// discarded.
pub struct FetchSlot<K: Send + Sync + 'static, T: Send + Sync + 'static> {
    current: RwSignal<Option<RequestTicket<K>>>,
    issued: StoredValue<u64>,
    pub state: RwSignal<FetchState<T>>,
}

impl<K: Send + Sync + 'static, T: Send + Sync + 'static> Clone for FetchSlot<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static, T: Send + Sync + 'static> Copy for FetchSlot<K, T> {}

impl<K, T> FetchSlot<K, T>
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            issued: StoredValue::new(0),
            state: RwSignal::new(FetchState::Idle),
        }
    }

    /// Key of the latest request, without subscribing
    pub fn key_untracked(&self) -> Option<K> {
        self.current
            .with_untracked(|current| current.as_ref().map(|t| t.key.clone()))
    }

    /// State of the slot as seen by a view showing `key`.
    ///
    /// While the slot still holds (or is fetching) another key, this reports
    /// `Loading` instead of leaking that key's data.
    pub fn state_for(&self, key: &K) -> FetchState<T> {
        let same_key = self
            .current
            .with(|current| current.as_ref().map(|t| &t.key) == Some(key));
        if same_key {
            self.state.get()
        } else {
            FetchState::Loading
        }
    }

    /// Record a new request for `key` and switch to loading
    pub fn begin(&self, key: K) -> RequestTicket<K> {
        self.issued.update_value(|n| *n += 1);
        let ticket = RequestTicket {
            key,
            generation: self.issued.get_value(),
        };
        log::debug!("fetch start: {:?} (#{})", ticket.key, ticket.generation);
        self.current.set(Some(ticket.clone()));
        self.state.set(FetchState::Loading);
        ticket
    }

    /// Apply the outcome of `ticket` if it is still the latest request.
    ///
    /// Returns whether the result was applied.
    pub fn settle(&self, ticket: &RequestTicket<K>, result: Result<T, ApiError>) -> bool {
        let current = self
            .current
            .try_with_untracked(|current| is_current_request(current.as_ref(), ticket))
            .unwrap_or(false);
        if !current {
            log::debug!(
                "fetch result dropped (superseded or unmounted): {:?} (#{})",
                ticket.key,
                ticket.generation
            );
            return false;
        }

        let next = match result {
            Ok(data) => {
                log::debug!("fetch done: {:?} (#{})", ticket.key, ticket.generation);
                FetchState::Loaded(data)
            }
            Err(e) => {
                log::warn!("fetch failed: {:?}: {}", ticket.key, e);
                FetchState::Failed(e.to_string())
            }
        };
        self.state.try_set(next).is_none()
    }

    /// Issue a request for `key`, superseding any request still in flight
    pub fn load<F, Fut>(&self, key: K, fetch: F)
    where
        F: FnOnce(K) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let ticket = self.begin(key);
        let slot = *self;
        spawn_local(async move {
            let result = fetch(ticket.key.clone()).await;
            slot.settle(&ticket, result);
        });
    }

    /// Forget the current request and drop back to idle
    pub fn clear(&self) {
        self.current.set(None);
        self.state.set(FetchState::Idle);
    }
}
