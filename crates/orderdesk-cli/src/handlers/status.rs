//! Status command handler.

use anyhow::Result;
use serde_json::json;

use crate::bootstrap::CliContext;

/// Print session, language, location and speech state.
pub fn execute(ctx: &CliContext, as_json: bool) -> Result<()> {
    let app = ctx.app();
    let state = app.auth().state();
    let locale = app.locale();
    let location = app.location();

    if as_json {
        let report = json!({
            "auth_state": state,
            "authenticated": state.is_authenticated(),
            "locale": locale.code(),
            "location": location.path(),
            "speech": app.speech().state(),
            "database": ctx.database_path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Session:   {state}");
    println!("Language:  {} ({})", locale.name(), locale.code());
    println!("Location:  {location}");
    println!("Database:  {}", ctx.database_path.display());
    Ok(())
}
