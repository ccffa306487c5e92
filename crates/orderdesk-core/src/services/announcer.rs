//! Accessibility announcements.
//!
//! Text is assembled from the message catalog in the active locale and
//! handed to the [`SpeechController`]. The `*_text` builders are pure so
//! that views can show the same sentence that gets spoken.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Client, Locale, Order, OrderStatus, UtteranceLease};
use crate::i18n::{format_amount, t, t_count};

use super::language::LanguageResolver;
use super::speech::SpeechController;

/// Screens that have a navigation announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    OrderDetails,
    BackToDashboard,
}

impl Page {
    pub const ALL: [Self; 4] = [
        Self::Login,
        Self::Dashboard,
        Self::OrderDetails,
        Self::BackToDashboard,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::OrderDetails => "order-details",
            Self::BackToDashboard => "back-to-dashboard",
        }
    }

    const fn message_key(self) -> &'static str {
        match self {
            Self::Login => "navigation.login",
            Self::Dashboard => "navigation.dashboard",
            Self::OrderDetails => "navigation.orderDetails",
            Self::BackToDashboard => "navigation.backToDashboard",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|page| page.name() == wanted)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

// ── Text builders ──────────────────────────────────────────────────

pub fn page_text(locale: Locale, page: Page) -> String {
    t(locale, page.message_key(), &[])
}

/// "Welcome back, John Doe. You are a Gold member."
pub fn welcome_text(locale: Locale, client: &Client) -> String {
    let tier = t(
        locale,
        &format!("orders.classification.{}", client.classification.key()),
        &[],
    );
    format!(
        "{}. {}",
        t(locale, "dashboard.welcomeBack", &[("name", client.name.as_str())]),
        t(locale, "speech.memberTier", &[("tier", tier.as_str())])
    )
}

pub fn order_summary_text(locale: Locale, order: &Order) -> String {
    let date = order.date.format("%Y-%m-%d").to_string();
    let status = t(locale, &format!("orders.status.{}", order.status.key()), &[]);
    format!(
        "{}, {}, {}",
        t(locale, "speech.orderNumber", &[("id", order.id.as_str())]),
        t(locale, "speech.placedOn", &[("date", date.as_str())]),
        t(locale, "speech.statusIs", &[("status", status.as_str())])
    )
}

pub fn order_list_text(locale: Locale, orders: &[Order]) -> String {
    let count = t_count(locale, "speech.orderCount", orders.len(), &[]);
    if orders.is_empty() {
        return count;
    }
    let summaries: Vec<String> = orders
        .iter()
        .map(|order| order_summary_text(locale, order))
        .collect();
    format!("{count} {}", summaries.join(". "))
}

pub fn order_details_text(locale: Locale, order: &Order) -> String {
    let total = format_amount(order.total());
    let mut text = format!(
        "{}. {} {}.",
        t(locale, "speech.orderDetails", &[("id", order.id.as_str())]),
        t_count(locale, "speech.containsProducts", order.products.len(), &[]),
        t(locale, "speech.totalAmount", &[("amount", total.as_str())])
    );

    if !order.products.is_empty() {
        let lines: Vec<String> = order
            .products
            .iter()
            .map(|product| {
                let quantity = product.quantity.to_string();
                let price = format_amount(product.line_total());
                t(
                    locale,
                    "speech.productDetails",
                    &[
                        ("name", product.name.as_str()),
                        ("quantity", quantity.as_str()),
                        ("price", price.as_str()),
                    ],
                )
            })
            .collect();
        text.push(' ');
        text.push_str(&t(locale, "speech.products", &[]));
        text.push_str(": ");
        text.push_str(&lines.join(". "));
    }
    text
}

pub fn status_text(locale: Locale, status: OrderStatus) -> String {
    let key = match status {
        OrderStatus::Delivered => "speech.orderDelivered",
        OrderStatus::Pending => "speech.orderPending",
        OrderStatus::Cancelled => "speech.orderCancelled",
    };
    t(locale, key, &[])
}

// ── Announcer ──────────────────────────────────────────────────────

/// Speaks announcements in the active locale.
pub struct Announcer {
    speech: Arc<SpeechController>,
    languages: Arc<LanguageResolver>,
}

impl Announcer {
    pub fn new(speech: Arc<SpeechController>, languages: Arc<LanguageResolver>) -> Self {
        Self { speech, languages }
    }

    async fn say(&self, build: impl FnOnce(Locale) -> String) -> Option<UtteranceLease> {
        let locale = self.languages.resolve().await;
        let text = build(locale);
        self.speech.speak(&text, locale).await
    }

    pub async fn announce_page(&self, page: Page) -> Option<UtteranceLease> {
        self.say(|locale| page_text(locale, page)).await
    }

    pub async fn announce_client(&self, client: &Client) -> Option<UtteranceLease> {
        self.say(|locale| welcome_text(locale, client)).await
    }

    pub async fn announce_order_list(&self, orders: &[Order]) -> Option<UtteranceLease> {
        self.say(|locale| order_list_text(locale, orders)).await
    }

    pub async fn announce_order_summary(&self, order: &Order) -> Option<UtteranceLease> {
        self.say(|locale| order_summary_text(locale, order)).await
    }

    pub async fn announce_order_details(&self, order: &Order) -> Option<UtteranceLease> {
        self.say(|locale| order_details_text(locale, order)).await
    }

    pub async fn announce_order_status(&self, status: OrderStatus) -> Option<UtteranceLease> {
        self.say(|locale| status_text(locale, status)).await
    }
}
