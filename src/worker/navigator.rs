//! Route changes requested by the event handler.

use crate::domain::Route;

/// Receives navigation requests.
pub trait Navigator {
    fn navigate(&mut self, route: &Route);
}

/// Navigator that records every route it is sent to.
#[derive(Debug, Default, Clone)]
pub struct HistoryNavigator {
    history: Vec<Route>,
}

impl HistoryNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent route, if any navigation happened.
    #[must_use]
    pub fn current(&self) -> Option<&Route> {
        self.history.last()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, route: &Route) {
        tracing::debug!(route = %route, "navigating");
        self.history.push(route.clone());
    }
}
