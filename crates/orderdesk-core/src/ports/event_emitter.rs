//! Event emitter trait for broadcasting state changes.
//!
//! Services emit through this abstraction so that the observer mechanism
//! (in-process bus, UI bridge, logging) stays out of their signatures.

use crate::events::AppEvent;

/// Trait for emitting application events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts that don't observe state
/// - `EventBus` - In-process subscribe/notify registry
pub trait AppEventEmitter: Send + Sync {
    /// Emit an application event.
    ///
    /// Delivery is synchronous: by the time this returns, every observer has
    /// seen the event.
    fn emit(&self, event: AppEvent);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn AppEventEmitter>;
}

/// A no-op event emitter for tests and headless contexts.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl AppEventEmitter for NoopEmitter {
    fn emit(&self, _event: AppEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Locale;
    use std::sync::Arc;

    #[test]
    fn test_noop_emitter() {
        let emitter = NoopEmitter::new();
        emitter.emit(AppEvent::locale_changed(Locale::Fr));
    }

    #[test]
    fn test_noop_emitter_clone_box() {
        let emitter = NoopEmitter::new();
        let _boxed: Box<dyn AppEventEmitter> = emitter.clone_box();
    }

    #[test]
    fn test_arc_emitter() {
        let emitter: Arc<dyn AppEventEmitter> = Arc::new(NoopEmitter::new());
        emitter.emit(AppEvent::locale_changed(Locale::En));
    }
}
