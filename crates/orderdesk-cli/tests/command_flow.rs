//! End-to-end command flow against a temporary database.

use std::path::Path;
use std::time::Duration;

use orderdesk_cli::{AnnounceTarget, CliConfig, CliContext, CliError, bootstrap, handlers};
use orderdesk_core::{AuthState, Locale, Page, Route, Settings};

async fn context(dir: &Path) -> CliContext {
    bootstrap(CliConfig {
        data_dir: Some(dir.to_path_buf()),
        settings: Settings::immediate(),
        word_pace: Duration::ZERO,
    })
    .await
    .unwrap()
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

#[tokio::test]
async fn guarded_commands_require_sign_in() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;

    let err = handlers::orders::execute(&ctx).await.unwrap_err();
    assert_eq!(exit_code(&err), 77);
    assert_eq!(ctx.app().location(), Route::Login);
}

#[tokio::test]
async fn wrong_phone_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;
    ctx.app().languages().select("en").await.unwrap();

    let err = handlers::login::execute(&ctx, "+0000000000").await.unwrap_err();
    assert_eq!(exit_code(&err), 77);
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn session_persists_between_invocations() {
    let dir = tempfile::tempdir().unwrap();

    let first = context(dir.path()).await;
    handlers::login::execute(&first, "+1234567890").await.unwrap();
    handlers::language::execute(&first, Some("fr")).await.unwrap();
    drop(first);

    let second = context(dir.path()).await;
    assert_eq!(second.app().auth().state(), AuthState::Authenticated);
    assert_eq!(second.app().locale(), Locale::Fr);
    handlers::orders::execute(&second).await.unwrap();
    handlers::orders::show(&second, "2").await.unwrap();

    let err = handlers::orders::show(&second, "42").await.unwrap_err();
    assert_eq!(exit_code(&err), 66);
}

#[tokio::test]
async fn announcements_finish_before_returning() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;
    handlers::login::execute(&ctx, "+1234567890").await.unwrap();

    handlers::announce::execute(&ctx, AnnounceTarget::Order { id: "1".into() })
        .await
        .unwrap();
    assert!(!ctx.app().speech().is_speaking());

    handlers::announce::execute(&ctx, AnnounceTarget::Page { page: Page::Dashboard })
        .await
        .unwrap();
    handlers::speak::execute(&ctx, "Olá", Some("pt")).await.unwrap();
    assert_eq!(ctx.app().speech().current().unwrap().locale, Locale::Pt);
}

#[tokio::test]
async fn unsupported_language_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;

    let err = handlers::language::execute(&ctx, Some("de")).await.unwrap_err();
    assert_eq!(exit_code(&err), 2);

    let err = handlers::speak::execute(&ctx, "   ", None).await.unwrap_err();
    assert_eq!(exit_code(&err), 2);
}

#[tokio::test]
async fn voices_are_listed_without_signing_in() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path()).await;

    handlers::speak::voices(&ctx).await.unwrap();
    assert_eq!(ctx.app().speech().voices().await.len(), 3);
}
