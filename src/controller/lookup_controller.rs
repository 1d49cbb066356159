//! Lookup Controller: runs the profile → (repositories, followers) fetch
//! pipeline and owns the view state it produces.
//!
//! State lives behind one mutex that is never held across an `.await`.
//! Every change bumps a `watch` revision so presentation layers can redraw.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::services::github_client::{profile_url, Fetcher};
use crate::types::errors::LookupError;
use crate::types::github::{FollowerSummary, GitHubProfile, RepositorySummary};
use crate::types::view::{LoadedProfile, Query, ViewSnapshot, ViewState};

#[derive(Default)]
struct Inner {
    state: ViewState,
    notice: Option<String>,
    /// Id of the most recently started lookup. Only that lookup may write a terminal state.
    latest_request: u64,
}

pub struct LookupController {
    fetcher: Arc<dyn Fetcher>,
    api_url: String,
    inner: Mutex<Inner>,
    in_flight: AtomicUsize,
    revision: watch::Sender<u64>,
}

/// Holds the in-flight count up for the lifetime of one lookup.
///
/// If the lookup is dropped before it settles, a `Loading` state it still
/// owns is reset to `Idle`.
struct InFlightGuard<'a> {
    controller: &'a LookupController,
    pending: Option<u64>,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(controller: &'a LookupController) -> Self {
        controller.in_flight.fetch_add(1, Ordering::SeqCst);
        Self {
            controller,
            pending: None,
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Some(request_id) = self.pending {
            let mut inner = self.controller.lock();
            if inner.latest_request == request_id && inner.state == ViewState::Loading {
                tracing::debug!(request_id, "lookup cancelled");
                inner.state = ViewState::Idle;
            }
        }
        self.controller.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.controller.notify();
    }
}

impl LookupController {
    pub fn new(fetcher: Arc<dyn Fetcher>, api_url: impl Into<String>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            fetcher,
            api_url: api_url.into(),
            inner: Mutex::new(Inner::default()),
            in_flight: AtomicUsize::new(0),
            revision,
        }
    }

    /// Current state, notice and in-flight flag.
    pub fn snapshot(&self) -> ViewSnapshot {
        let inner = self.lock();
        ViewSnapshot {
            state: inner.state.clone(),
            notice: inner.notice.clone(),
            in_flight: self.is_loading(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Receives a new revision number after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Looks up `input` and replaces the view state with the outcome.
    ///
    /// Blank input is rejected with [`LookupError::EmptyInput`] before any
    /// request is made; the current state is left as it is. Every other
    /// failure becomes `ViewState::Failed` with the error's message.
    ///
    /// If another lookup starts while this one is running, this one's result
    /// is discarded and only returned to the caller.
    pub async fn perform_lookup(&self, input: &str) -> Result<(), LookupError> {
        let Some(query) = Query::parse(input) else {
            tracing::debug!("blank username submitted");
            self.update(|inner| inner.notice = Some(LookupError::EmptyInput.to_string()));
            return Err(LookupError::EmptyInput);
        };

        let mut in_flight = InFlightGuard::acquire(self);
        let request_id = self.update(|inner| {
            inner.latest_request += 1;
            inner.state = ViewState::Loading;
            inner.notice = None;
            inner.latest_request
        });
        in_flight.pending = Some(request_id);
        tracing::info!(username = query.as_str(), request_id, "lookup started");

        let outcome = self.run_pipeline(&query).await;
        in_flight.pending = None;

        let applied = self.update(|inner| {
            if inner.latest_request != request_id {
                return false;
            }
            inner.state = match &outcome {
                Ok(loaded) => ViewState::Loaded(loaded.clone()),
                Err(e) => ViewState::Failed(e.to_string()),
            };
            true
        });

        match &outcome {
            _ if !applied => {
                tracing::debug!(request_id, "lookup superseded, result discarded");
            }
            Ok(loaded) => tracing::info!(
                username = query.as_str(),
                repositories = loaded.repositories.len(),
                followers = loaded.followers.len(),
                "lookup finished"
            ),
            Err(e) => tracing::warn!(username = query.as_str(), error = %e, "lookup failed"),
        }

        outcome.map(|_| ())
    }

    async fn run_pipeline(&self, query: &Query) -> Result<LoadedProfile, LookupError> {
        let url = profile_url(&self.api_url, query.as_str())?;
        let response = self.fetcher.fetch(&url).await?;
        if !response.is_success() {
            tracing::debug!(status = response.status, "profile request rejected");
            return Err(LookupError::NotFound);
        }
        let profile: GitHubProfile = serde_json::from_str(&response.body)?;

        let (repositories, followers) = tokio::try_join!(
            self.fetch_collection::<RepositorySummary>(&profile.repos_url, "repositories"),
            self.fetch_collection::<FollowerSummary>(&profile.followers_url, "followers"),
        )?;

        Ok(LoadedProfile {
            profile,
            repositories,
            followers,
        })
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: &'static str,
    ) -> Result<Vec<T>, LookupError> {
        let response = self.fetcher.fetch(url).await?;
        if !response.is_success() {
            return Err(LookupError::Upstream {
                resource,
                status: response.status,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let result = {
            let mut inner = self.lock();
            f(&mut inner)
        };
        self.notify();
        result
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }
}
