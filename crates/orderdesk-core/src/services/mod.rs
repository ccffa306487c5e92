//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete adapters; `AppCore` wires them together.

mod announcer;
mod app_core;
mod auth;
mod language;
mod orders;
mod route_guard;
mod session_store;
mod speech;

pub use announcer::{
    Announcer, Page, UnknownPage, order_details_text, order_list_text, order_summary_text,
    page_text, status_text, welcome_text,
};
pub use app_core::AppCore;
pub use auth::{AuthController, AuthError};
pub use language::{LANGUAGE_KEY, LanguageResolver, LocaleError};
pub use orders::OrderService;
pub use route_guard::{GuardDecision, RouteGuard, decide};
pub use session_store::{SESSION_KEY, SessionStore, StoredSession};
pub use speech::SpeechController;
