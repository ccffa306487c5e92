//! Navigation port and the in-process router adapter.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::Route;
use crate::events::AppEvent;

use super::AppEventEmitter;

/// Navigation boundary consumed by the route guard and views.
///
/// Location changes are observable as [`AppEvent::LocationChanged`] on the
/// emitter the router was built with.
pub trait Router: Send + Sync {
    /// The location currently displayed.
    fn current(&self) -> Route;

    /// Replace the current location (no new history entry).
    fn replace(&self, route: Route);

    /// Navigate forward to a location.
    fn push(&self, route: Route);
}

#[derive(Debug)]
struct RouterState {
    stack: Vec<Route>,
}

/// History-stack router held in memory.
pub struct MemoryRouter {
    state: Mutex<RouterState>,
    events: Arc<dyn AppEventEmitter>,
}

impl MemoryRouter {
    /// Create a router positioned at `initial`.
    ///
    /// No event is emitted for the initial location.
    pub fn new(initial: Route, events: Arc<dyn AppEventEmitter>) -> Self {
        Self {
            state: Mutex::new(RouterState {
                stack: vec![initial],
            }),
            events,
        }
    }

    /// Number of entries in the history stack.
    pub fn depth(&self) -> usize {
        self.lock().stack.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RouterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn announce(&self, route: Route) {
        tracing::debug!(route = %route, "Location changed");
        self.events.emit(AppEvent::location_changed(route));
    }
}

impl Router for MemoryRouter {
    fn current(&self) -> Route {
        self.lock().stack.last().cloned().unwrap_or_default()
    }

    fn replace(&self, route: Route) {
        {
            let mut state = self.lock();
            if state.stack.last() == Some(&route) {
                return;
            }
            state.stack.pop();
            state.stack.push(route.clone());
        }
        self.announce(route);
    }

    fn push(&self, route: Route) {
        {
            let mut state = self.lock();
            if state.stack.last() == Some(&route) {
                return;
            }
            state.stack.push(route.clone());
        }
        self.announce(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;

    fn router_with_log(initial: Route) -> (MemoryRouter, Arc<Mutex<Vec<Route>>>) {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bus.subscribe(move |event| {
            if let AppEvent::LocationChanged { route } = event {
                sink.lock().unwrap().push(route.clone());
            }
        });
        (MemoryRouter::new(initial, Arc::new(bus)), seen)
    }

    #[test]
    fn push_adds_history() {
        let (router, seen) = router_with_log(Route::Dashboard);
        router.push(Route::OrderDetail("2".into()));
        assert_eq!(router.current(), Route::OrderDetail("2".into()));
        assert_eq!(router.depth(), 2);

        assert_eq!(*seen.lock().unwrap(), vec![Route::OrderDetail("2".into())]);
    }

    #[test]
    fn replace_keeps_depth() {
        let (router, _) = router_with_log(Route::Index);
        router.replace(Route::Login);
        assert_eq!(router.current(), Route::Login);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn navigating_to_current_location_is_silent() {
        let (router, seen) = router_with_log(Route::Login);
        router.replace(Route::Login);
        router.push(Route::Login);
        assert!(seen.lock().unwrap().is_empty());
    }
}
