//! Domain types shared by ports and services.
//!
//! Pure data with no infrastructure dependencies.

mod locale;
mod order;
mod route;
mod session;
mod speech;

pub use locale::{Locale, VoiceParams};
pub use order::{
    Classification, Client, FIXTURE_CLIENT_PHONE, Order, OrderStatus, Product, fixture_client,
    fixture_orders,
};
pub use route::{Route, UnknownRoute};
pub use session::{AuthState, Credential, Session, SessionToken};
pub use speech::{SpeechSession, SpeechState, UtteranceLease};
