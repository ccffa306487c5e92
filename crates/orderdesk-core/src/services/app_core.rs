//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (the CLI, tests)
//! build a [`Ports`] container and receive an `AppCore` that wires every
//! service to one shared [`EventBus`].

use std::sync::Arc;

use crate::domain::{AuthState, Locale, Route};
use crate::events::{EventBus, SubscriptionId};
use crate::ports::{AppEventEmitter, CoreError, MemoryRouter, Ports, Router};
use crate::settings::{Settings, validate_settings};

use super::{
    Announcer, AuthController, GuardDecision, LanguageResolver, OrderService, RouteGuard,
    SpeechController,
};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let ports = Ports::new(store, engine, device_locale, orders);
/// let core = AppCore::new(ports, Settings::with_defaults())?;
/// core.start().await;
///
/// let landed = core.navigate(Route::Dashboard);
/// ```
pub struct AppCore {
    settings: Settings,
    bus: EventBus,
    router: Arc<MemoryRouter>,
    auth: Arc<AuthController>,
    guard: Arc<RouteGuard>,
    guard_subscription: SubscriptionId,
    languages: Arc<LanguageResolver>,
    speech: Arc<SpeechController>,
    orders: OrderService,
    announcer: Announcer,
}

impl AppCore {
    /// Wire services to `ports`. The route guard is attached immediately.
    pub fn new(ports: Ports, settings: Settings) -> Result<Self, CoreError> {
        validate_settings(&settings)?;

        let bus = EventBus::new();
        let events: Arc<dyn AppEventEmitter> = Arc::new(bus.clone());

        let router = Arc::new(MemoryRouter::new(Route::Index, Arc::clone(&events)));
        let auth = Arc::new(AuthController::new(
            Arc::clone(&ports.store),
            settings.clone(),
            Arc::clone(&events),
        ));
        let guard = Arc::new(RouteGuard::new(
            Arc::clone(&router) as Arc<dyn Router>,
            settings.landing_route.clone(),
            auth.state(),
        ));
        let guard_subscription = guard.attach(&bus);

        let languages = Arc::new(LanguageResolver::new(
            Arc::clone(&ports.store),
            Arc::clone(&ports.device_locale),
            Arc::clone(&events),
        ));
        let speech = Arc::new(SpeechController::new(
            Arc::clone(&ports.speech),
            Arc::clone(&languages),
            events,
        ));
        let announcer = Announcer::new(Arc::clone(&speech), Arc::clone(&languages));

        Ok(Self {
            settings,
            bus,
            router,
            auth,
            guard,
            guard_subscription,
            languages,
            speech,
            orders: OrderService::new(ports.orders),
            announcer,
        })
    }

    /// Startup sequence: resolve the locale, restore the session, and let the
    /// guard settle the initial location.
    pub async fn start(&self) -> AuthState {
        let locale = self.languages.resolve().await;
        let state = self.auth.restore_session().await;
        self.guard.enforce();
        tracing::info!(locale = %locale, state = %state, location = %self.router.current(), "App core started");
        state
    }

    /// Navigate to `route` and return where the guard let us land.
    pub fn navigate(&self, route: Route) -> Route {
        self.router.push(route);
        self.router.current()
    }

    /// Current guard verdict for the current location.
    pub fn guard_decision(&self) -> GuardDecision {
        self.guard.enforce()
    }

    pub fn location(&self) -> Route {
        self.router.current()
    }

    pub fn locale(&self) -> Locale {
        self.languages.current()
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The shared event bus; subscribe here to observe state changes.
    pub const fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn router(&self) -> &dyn Router {
        self.router.as_ref()
    }

    pub fn auth(&self) -> &AuthController {
        &self.auth
    }

    pub fn languages(&self) -> &LanguageResolver {
        &self.languages
    }

    pub fn speech(&self) -> &SpeechController {
        &self.speech
    }

    pub const fn orders(&self) -> &OrderService {
        &self.orders
    }

    pub const fn announcer(&self) -> &Announcer {
        &self.announcer
    }
}

impl Drop for AppCore {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.guard_subscription);
    }
}
