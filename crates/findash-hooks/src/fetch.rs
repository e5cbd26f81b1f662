//! Fetch lifecycle state machine.
//!
//! A [`FetchCell`] tracks one logical request slot through the lifecycle
//! `pending -> success | error`. Every new request gets a [`RequestToken`]
//! carrying a monotonically increasing sequence number; completions are
//! applied only when their token is still the latest issued, so a response
//! that arrives after a newer request began is discarded instead of
//! overwriting fresher state.

use tracing::debug;

/// Lifecycle state of one metric fetch.
///
/// Exactly one variant holds at any time. `Pending` is the initial state and
/// is re-entered whenever the request's scope changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState<T> {
    /// A request is outstanding (or none has been issued yet).
    Pending,
    /// The last request completed with these rows.
    Success(Vec<T>),
    /// The last request failed with this display message.
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns true while a request is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the rows when the last request succeeded.
    #[must_use]
    pub fn rows(&self) -> Option<&[T]> {
        match self {
            Self::Success(rows) => Some(rows),
            _ => None,
        }
    }

    /// Returns the message when the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a request was issued; completions must present it back.
///
/// Tokens are ordered by issue time. Only the most recently issued token can
/// complete its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Explicit state machine for one request slot.
///
/// Transitions:
/// - [`begin`](Self::begin): any state -> `Pending`, issuing a new token
/// - [`resolve`](Self::resolve): `Pending` -> `Success` when the token is current
/// - [`reject`](Self::reject): `Pending` -> `Error` when the token is current
///
/// Completions with a superseded token are no-ops and return `false`.
#[derive(Debug)]
pub struct FetchCell<T> {
    state: FetchState<T>,
    seq: u64,
}

impl<T> Default for FetchCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchCell<T> {
    /// Creates a cell in the pending state with no request issued.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: FetchState::Pending,
            seq: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start a new request: reset to pending and issue a fresh token,
    /// superseding any outstanding one.
    pub fn begin(&mut self) -> RequestToken {
        self.seq += 1;
        self.state = FetchState::Pending;
        RequestToken(self.seq)
    }

    /// Complete the request successfully. Returns `false` (leaving the state
    /// untouched) when `token` has been superseded.
    pub fn resolve(&mut self, token: RequestToken, rows: Vec<T>) -> bool {
        if token.0 != self.seq {
            debug!(token = token.0, current = self.seq, "Discarding stale response");
            return false;
        }
        self.state = FetchState::Success(rows);
        true
    }

    /// Complete the request with an error message. Returns `false` when
    /// `token` has been superseded.
    pub fn reject(&mut self, token: RequestToken, message: impl Into<String>) -> bool {
        if token.0 != self.seq {
            debug!(token = token.0, current = self.seq, "Discarding stale failure");
            return false;
        }
        self.state = FetchState::Error(message.into());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_starts_pending() {
        let cell: FetchCell<i32> = FetchCell::new();
        assert!(cell.state().is_pending());
    }

    #[test]
    fn resolve_transitions_to_success() {
        let mut cell = FetchCell::new();
        let token = cell.begin();
        assert!(cell.resolve(token, vec![1, 2, 3]));
        assert_eq!(cell.state().rows(), Some(&[1, 2, 3][..]));
        assert_eq!(cell.state().error(), None);
    }

    #[test]
    fn reject_transitions_to_error() {
        let mut cell: FetchCell<i32> = FetchCell::new();
        let token = cell.begin();
        assert!(cell.reject(token, "connection refused"));
        assert_eq!(cell.state().error(), Some("connection refused"));
        assert_eq!(cell.state().rows(), None);
    }

    #[test]
    fn begin_resets_success_to_pending() {
        let mut cell = FetchCell::new();
        let token = cell.begin();
        cell.resolve(token, vec![1]);
        cell.begin();
        assert!(cell.state().is_pending());
    }

    #[test]
    fn stale_resolve_is_discarded() {
        let mut cell = FetchCell::new();
        let stale = cell.begin();
        let fresh = cell.begin();

        // The older request's response arrives after the newer one started.
        assert!(!cell.resolve(stale, vec![1]));
        assert!(cell.state().is_pending());

        assert!(cell.resolve(fresh, vec![2]));
        assert_eq!(cell.state().rows(), Some(&[2][..]));
    }

    #[test]
    fn stale_resolve_cannot_overwrite_fresh_success() {
        let mut cell = FetchCell::new();
        let stale = cell.begin();
        let fresh = cell.begin();

        assert!(cell.resolve(fresh, vec![2]));
        assert!(!cell.resolve(stale, vec![1]));
        assert_eq!(cell.state().rows(), Some(&[2][..]));
    }

    #[test]
    fn stale_reject_is_discarded() {
        let mut cell = FetchCell::new();
        let stale = cell.begin();
        let fresh = cell.begin();

        assert!(cell.resolve(fresh, vec![7]));
        assert!(!cell.reject(stale, "slow failure"));
        assert_eq!(cell.state().rows(), Some(&[7][..]));
    }

    #[test]
    fn completed_token_cannot_complete_twice() {
        let mut cell = FetchCell::new();
        let token = cell.begin();
        assert!(cell.resolve(token, vec![1]));
        // A second begin supersedes the token even after completion.
        cell.begin();
        assert!(!cell.resolve(token, vec![9]));
        assert!(cell.state().is_pending());
    }
}
