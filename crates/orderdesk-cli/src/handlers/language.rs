//! Language command handlers.

use anyhow::Result;
use orderdesk_core::i18n::t;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Show the active language, or switch to `code`.
pub async fn execute(ctx: &CliContext, code: Option<&str>) -> Result<()> {
    let languages = ctx.app().languages();

    let Some(code) = code else {
        let locale = languages.current();
        println!("{}: {} ({})", t(locale, "language.title", &[]), locale.native_name(), locale.code());
        return Ok(());
    };

    let locale = languages
        .select(code)
        .await
        .map_err(|e| CliError::Arguments(e.to_string()))?;
    println!("{}", t(locale, "language.changed", &[("language", locale.native_name())]));
    Ok(())
}

/// List supported languages, marking the active one.
pub fn list(ctx: &CliContext) -> Result<()> {
    let languages = ctx.app().languages();
    let current = languages.current();

    for locale in languages.supported() {
        let marker = if *locale == current { '*' } else { ' ' };
        println!("{marker} {:<3} {:<10} {}", locale.code(), locale.name(), locale.native_name());
    }
    Ok(())
}
