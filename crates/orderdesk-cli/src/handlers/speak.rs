//! Speak command handler.

use anyhow::Result;
use orderdesk_core::Locale;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Speak `text`, in `lang` when given, otherwise in the app language.
pub async fn execute(ctx: &CliContext, text: &str, lang: Option<&str>) -> Result<()> {
    let app = ctx.app();
    let locale = match lang {
        Some(code) => code
            .parse::<Locale>()
            .map_err(|e| CliError::Arguments(e.to_string()))?,
        None => app.locale(),
    };

    if app.speech().speak(text, locale).await.is_none() {
        return Err(CliError::Arguments("nothing to say".to_string()).into());
    }
    super::wait_for_speech(ctx).await;
    Ok(())
}

/// List engine voices, marking those for the app language.
pub async fn voices(ctx: &CliContext) -> Result<()> {
    let app = ctx.app();
    let language = app.locale().tts_language();

    for voice in app.speech().voices().await {
        let marker = if voice.language == language { '*' } else { ' ' };
        println!("{marker} {:<8} {:<24} {}", voice.language, voice.name, voice.identifier);
    }
    Ok(())
}
