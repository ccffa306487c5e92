//! Client and order domain types, plus the built-in fixture data set.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Loyalty tier of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Gold,
    Silver,
    Bronze,
}

impl Classification {
    /// Catalog key suffix (`gold`, `silver`, `bronze`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        };
        f.write_str(label)
    }
}

/// The signed-in client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub classification: Classification,
    pub phone: String,
}

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Catalog key suffix (`pending`, `delivered`, `cancelled`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "Pending",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// A line item on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Price multiplied by quantity.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A client order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client_id: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub products: Vec<Product>,
}

impl Order {
    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        self.products.iter().map(Product::line_total).sum()
    }
}

// ── Fixtures ───────────────────────────────────────────────────────

/// Phone number of the one client known to the app.
pub const FIXTURE_CLIENT_PHONE: &str = "+1234567890";

/// The fixture client.
pub fn fixture_client() -> Client {
    Client {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        classification: Classification::Gold,
        phone: FIXTURE_CLIENT_PHONE.to_string(),
    }
}

fn product(name: &str, price: f64, quantity: u32) -> Product {
    Product {
        name: name.to_string(),
        price,
        quantity,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// The fixture orders, oldest first.
pub fn fixture_orders() -> Vec<Order> {
    vec![
        Order {
            id: "1".to_string(),
            client_id: "1".to_string(),
            date: date(2024, 3, 1),
            status: OrderStatus::Delivered,
            products: vec![product("Product 1", 99.99, 2), product("Product 2", 49.99, 1)],
        },
        Order {
            id: "2".to_string(),
            client_id: "1".to_string(),
            date: date(2024, 3, 15),
            status: OrderStatus::Pending,
            products: vec![product("Product 3", 199.99, 1)],
        },
        Order {
            id: "3".to_string(),
            client_id: "1".to_string(),
            date: date(2024, 3, 20),
            status: OrderStatus::Cancelled,
            products: vec![product("Product 1", 99.99, 1), product("Product 4", 149.99, 2)],
        },
    ]
}
