//! Logout command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

pub async fn execute(ctx: &CliContext) -> Result<()> {
    let app = ctx.app();
    app.speech().stop().await;
    app.auth().logout().await;
    println!("Signed out → {}", app.location());
    Ok(())
}
