//! Route guard - the single place that enforces authentication on navigation.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{AuthState, Route};
use crate::events::{AppEvent, EventBus, SubscriptionId};
use crate::ports::Router;

/// Outcome of evaluating the guard rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state still resolving; show the loading indicator.
    Loading,
    /// The current location may render.
    Stay,
    /// Replace the current location.
    Redirect(Route),
}

/// Pure guard rule.
pub fn decide(state: AuthState, location: &Route, landing: &Route) -> GuardDecision {
    match state {
        AuthState::Authenticating => GuardDecision::Loading,
        AuthState::Unauthenticated if !location.is_auth_group() => {
            GuardDecision::Redirect(Route::Login)
        }
        AuthState::Authenticated if matches!(location, Route::Login | Route::Index) => {
            GuardDecision::Redirect(landing.clone())
        }
        AuthState::Unauthenticated | AuthState::Authenticated => GuardDecision::Stay,
    }
}

/// Applies [`decide`] against a router whenever auth state or location moves.
pub struct RouteGuard {
    router: Arc<dyn Router>,
    landing: Route,
    last_state: Mutex<AuthState>,
}

impl RouteGuard {
    pub fn new(router: Arc<dyn Router>, landing: Route, initial: AuthState) -> Self {
        Self {
            router,
            landing,
            last_state: Mutex::new(initial),
        }
    }

    /// Last auth state observed.
    pub fn observed_state(&self) -> AuthState {
        *self.last_state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Evaluate the rule for the current location and apply any redirect.
    pub fn enforce(&self) -> GuardDecision {
        let state = self.observed_state();
        let location = self.router.current();
        let decision = decide(state, &location, &self.landing);

        tracing::debug!(state = %state, location = %location, ?decision, "Route guard");
        if let GuardDecision::Redirect(target) = &decision {
            self.router.replace(target.clone());
        }
        decision
    }

    /// React to an event from the bus.
    pub fn on_event(&self, event: &AppEvent) {
        match event {
            AppEvent::AuthStateChanged { state } => {
                *self.last_state.lock().unwrap_or_else(PoisonError::into_inner) = *state;
                self.enforce();
            }
            AppEvent::LocationChanged { .. } => {
                self.enforce();
            }
            AppEvent::LocaleChanged { .. } | AppEvent::SpeechStateChanged { .. } => {}
        }
    }

    /// Subscribe the guard to `bus`.
    pub fn attach(self: &Arc<Self>, bus: &EventBus) -> SubscriptionId {
        let guard = Arc::downgrade(self);
        bus.subscribe(move |event| {
            if let Some(guard) = guard.upgrade() {
                guard.on_event(event);
            }
        })
    }
}
