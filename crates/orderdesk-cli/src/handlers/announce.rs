//! Announce command handler.

use anyhow::Result;
use orderdesk_core::{Order, Route};

use crate::bootstrap::CliContext;
use crate::commands::AnnounceTarget;
use crate::error::CliError;

pub async fn execute(ctx: &CliContext, target: AnnounceTarget) -> Result<()> {
    let app = ctx.app();
    let announcer = app.announcer();

    let lease = match target {
        AnnounceTarget::Page { page } => announcer.announce_page(page).await,
        AnnounceTarget::Client => {
            super::enter(ctx, Route::Dashboard)?;
            let client = app.orders().client().await.map_err(CliError::from)?;
            announcer.announce_client(&client).await
        }
        AnnounceTarget::Orders => {
            super::enter(ctx, Route::Dashboard)?;
            let orders = app.orders().orders().await.map_err(CliError::from)?;
            announcer.announce_order_list(&orders).await
        }
        AnnounceTarget::Order { id } => {
            let order = open_order(ctx, &id).await?;
            announcer.announce_order_details(&order).await
        }
        AnnounceTarget::Status { id } => {
            let order = open_order(ctx, &id).await?;
            announcer.announce_order_status(order.status).await
        }
    };

    if lease.is_some() {
        super::wait_for_speech(ctx).await;
    }
    Ok(())
}

async fn open_order(ctx: &CliContext, id: &str) -> Result<Order, CliError> {
    super::enter(ctx, Route::OrderDetail(id.to_string()))?;
    Ok(ctx.app().orders().order(id).await?)
}
