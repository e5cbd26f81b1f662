//! One hook per metric operation.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use findash_core::{CompanyScope, FactStore};

use crate::fetch::{FetchCell, FetchState};
use crate::query::MetricQuery;

/// Drives one metric query for one view.
///
/// A hook owns its lifecycle state exclusively: no two views share a hook.
/// On creation, and whenever the scope changes, the state resets to pending
/// and a fresh fetch is issued. Failures become display strings in the error
/// state; there is no retry, backoff, or timeout. Responses superseded by a
/// newer request are discarded by the underlying [`FetchCell`].
pub struct MetricHook<Q: MetricQuery> {
    store: Arc<dyn FactStore>,
    query: Q,
    scope: CompanyScope,
    cell: FetchCell<Q::Row>,
}

impl<Q: MetricQuery> fmt::Debug for MetricHook<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.cell.state() {
            FetchState::Pending => "pending",
            FetchState::Success(_) => "success",
            FetchState::Error(_) => "error",
        };
        f.debug_struct("MetricHook")
            .field("query", &self.query.name())
            .field("scope", &self.scope)
            .field("state", &state)
            .finish()
    }
}

impl<Q: MetricQuery> MetricHook<Q> {
    /// Creates a hook in the pending state. No fetch is issued until
    /// [`refresh`](Self::refresh) is called.
    #[must_use]
    pub fn new(store: Arc<dyn FactStore>, query: Q, scope: CompanyScope) -> Self {
        Self {
            store,
            query,
            scope,
            cell: FetchCell::new(),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &FetchState<Q::Row> {
        self.cell.state()
    }

    /// Current scope.
    #[must_use]
    pub const fn scope(&self) -> CompanyScope {
        self.scope
    }

    /// Issue one fetch for the current scope, driving the state machine
    /// through pending to success or error.
    pub async fn refresh(&mut self) {
        let token = self.cell.begin();
        debug!(query = self.query.name(), scope = %self.scope, "Fetching");

        match self.query.run(self.store.as_ref(), self.scope).await {
            Ok(rows) => {
                self.cell.resolve(token, rows);
            }
            Err(e) => {
                warn!(query = self.query.name(), error = %e, "Fetch failed");
                self.cell
                    .reject(token, format!("Failed to fetch {}: {e}", self.query.name()));
            }
        }
    }

    /// Change the scope. When it differs from the current one, the state
    /// resets to pending and a fresh fetch is issued; an identical scope is
    /// a no-op, mirroring identity-keyed refetching.
    pub async fn set_scope(&mut self, scope: CompanyScope) {
        if scope == self.scope {
            return;
        }
        self.scope = scope;
        self.refresh().await;
    }
}
