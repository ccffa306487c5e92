//! Main commands enum and the announce subcommands.

use clap::Subcommand;
use orderdesk_core::Page;

/// Available commands.
///
/// Every command runs after the session was restored; commands that show a
/// screen go through the route guard first.
#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with a phone number
    Login {
        /// Phone number, e.g. "+1234567890"
        phone: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show session, language and speech state
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List your orders (dashboard)
    Orders,

    /// Show one order in detail
    Order {
        /// Order id
        id: String,
    },

    /// Read text aloud
    Speak {
        /// Text to speak
        text: String,
        /// Language code (en, fr, pt); defaults to the app language
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Play an accessibility announcement
    Announce {
        #[command(subcommand)]
        target: AnnounceTarget,
    },

    /// Show or change the app language
    Language {
        /// Language code to switch to (en, fr, pt)
        code: Option<String>,
    },

    /// List supported languages
    Languages,

    /// List the voices the speech engine offers
    Voices,
}

/// What to announce.
#[derive(Subcommand, Clone)]
pub enum AnnounceTarget {
    /// Where you are (login, dashboard, order-details, back-to-dashboard)
    Page { page: Page },

    /// Welcome message with your membership tier
    Client,

    /// Summary of every order
    Orders,

    /// Full details of one order
    Order { id: String },

    /// Status sentence of one order
    Status { id: String },
}
