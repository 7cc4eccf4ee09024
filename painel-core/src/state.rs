//! Page lifecycle shared by the four dashboards.

use std::cell::Cell;
use std::rc::Rc;

/// Observable phase of a dashboard page.
///
/// A page enters `Loading` on mount and on every filter apply, then settles
/// in exactly one of the other three variants.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Error(String),
    Empty,
    Ready(T),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> PageState<T> {
    /// `Ready` for `Some`, `Empty` for `None`.
    pub fn from_slot(slot: Option<T>) -> Self {
        match slot {
            Some(value) => Self::Ready(value),
            None => Self::Empty,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PageState<U> {
        match self {
            Self::Loading => PageState::Loading,
            Self::Error(message) => PageState::Error(message),
            Self::Empty => PageState::Empty,
            Self::Ready(value) => PageState::Ready(f(value)),
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::Empty => "empty",
            Self::Ready(_) => "ready",
        }
    }
}

/// First error in declaration order; later ones are dropped.
pub fn first_error<'a>(errors: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    errors.into_iter().flatten().next().map(str::to_string)
}

/// Hands out increasing tickets so that a load which finishes after a newer
/// one was started can detect that its result is stale. Clones share the
/// same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    latest: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestGuard {
    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}
