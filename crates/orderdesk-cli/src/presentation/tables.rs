//! Table formatting utilities for CLI output.

use orderdesk_core::i18n::{format_amount, t};
use orderdesk_core::{Locale, Order};

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use orderdesk_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Print orders as a table with localized status labels.
pub fn print_order_table(locale: Locale, orders: &[Order]) {
    println!(
        "{:<12} {:<12} {:<14} {:>10}",
        "#",
        "Date",
        "Status",
        t(locale, "orders.total", &[])
    );
    print_separator(51);

    for order in orders {
        let status = t(locale, &format!("orders.status.{}", order.status.key()), &[]);
        println!(
            "{:<12} {:<12} {:<14} {:>10}",
            truncate_string(&t(locale, "orders.order", &[("id", order.id.as_str())]), 12),
            order.date.format("%Y-%m-%d"),
            truncate_string(&status, 14),
            format_amount(order.total())
        );
    }
}
