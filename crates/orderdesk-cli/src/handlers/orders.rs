//! Dashboard and order detail handlers.

use anyhow::Result;
use orderdesk_core::i18n::{format_amount, t};
use orderdesk_core::{CoreError, Route};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_order_table, print_separator};

/// Show the dashboard: greeting and the order list.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    super::enter(ctx, Route::Dashboard)?;

    let app = ctx.app();
    let locale = app.locale();
    let client = app.orders().client().await.map_err(CliError::from)?;
    let orders = app.orders().orders().await.map_err(CliError::from)?;

    println!("{}", t(locale, "dashboard.welcomeBack", &[("name", client.name.as_str())]));
    println!();
    println!("{}", t(locale, "dashboard.recentOrders", &[]));
    print_order_table(locale, &orders);
    Ok(())
}

/// Show one order with its products.
pub async fn show(ctx: &CliContext, id: &str) -> Result<()> {
    super::enter(ctx, Route::OrderDetail(id.to_string()))?;

    let app = ctx.app();
    let locale = app.locale();
    let order = match app.orders().order(id).await {
        Ok(order) => order,
        Err(CoreError::NotFound(_)) => {
            return Err(CliError::NotFound(t(locale, "orders.notFound", &[])).into());
        }
        Err(e) => return Err(CliError::from(e).into()),
    };

    println!("{}", t(locale, "orders.order", &[("id", order.id.as_str())]));
    println!(
        "{}  ·  {}",
        order.date.format("%Y-%m-%d"),
        t(locale, &format!("orders.status.{}", order.status.key()), &[])
    );
    print_separator(40);
    for product in &order.products {
        println!(
            "{:<20} x{:<4} {:>12}",
            product.name,
            product.quantity,
            format_amount(product.line_total())
        );
    }
    print_separator(40);
    println!(
        "{:<26} {:>12}",
        t(locale, "orders.total", &[]),
        format_amount(order.total())
    );
    Ok(())
}
