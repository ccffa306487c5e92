//! Login command handler.

use anyhow::Result;
use orderdesk_core::AuthError;
use orderdesk_core::i18n::t;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Sign in with `phone` and show where the guard took us.
pub async fn execute(ctx: &CliContext, phone: &str) -> Result<()> {
    let app = ctx.app();
    let locale = app.locale();

    if let Err(err) = app.auth().login(phone).await {
        return Err(match err {
            AuthError::Storage(_) => CliError::from(err),
            other => CliError::Auth(t(locale, other.message_key(), &[])),
        }
        .into());
    }

    let client = app.orders().client().await.map_err(CliError::from)?;
    println!("{}", t(locale, "dashboard.welcomeBack", &[("name", client.name.as_str())]));
    println!("→ {}", app.location());
    Ok(())
}
