//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Enter the command's screen through the route guard
//!   2. Call `AppCore` services
//!   3. Format output for the terminal
//!
//! Handlers never check authentication themselves; the route guard decides.

pub mod announce;
pub mod language;
pub mod login;
pub mod logout;
pub mod orders;
pub mod speak;
pub mod status;

use orderdesk_core::{AppEvent, Route, SpeechState};
use tokio::sync::watch;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Navigate to `route`; fail if the guard sent us elsewhere.
pub fn enter(ctx: &CliContext, route: Route) -> Result<(), CliError> {
    let landed = ctx.app().navigate(route.clone());
    if landed == route {
        Ok(())
    } else {
        tracing::debug!(wanted = %route, landed = %landed, "Route guard redirected");
        Err(CliError::Unauthorized(format!(
            "{route} redirected to {landed}; run `orderdesk login <phone>` first"
        )))
    }
}

/// Block until the speech controller is idle again.
pub async fn wait_for_speech(ctx: &CliContext) {
    let app = ctx.app();
    let (tx, mut rx) = watch::channel(SpeechState::Speaking);
    let subscription = app.events().subscribe(move |event| {
        if let AppEvent::SpeechStateChanged { state, .. } = event {
            tx.send_replace(*state);
        }
    });

    // Checked after subscribing so a transition in between is not missed.
    if app.speech().is_speaking() {
        let _ = rx.wait_for(|state| *state == SpeechState::Idle).await;
    }
    app.events().unsubscribe(subscription);
}
