//! Entry point for the i18n-autotranslate command.

use std::process::ExitCode;

use clap::Parser;
use i18n_autotranslate::Error;
use i18n_autotranslate::cli::Cli;
use i18n_autotranslate::runner;
use i18n_autotranslate::translate::GoogleTranslator;
use tracing_subscriber::EnvFilter;

/// Exit status of a run that completed
const SUCCESS: u8 = 0;
/// Exit status of a run that failed
const FAILURE: u8 = 1;
/// Exit status when the run is stopped by SIGINT or SIGTERM
const INTERRUPTED: u8 = 130;

/// How the run ended
#[derive(Debug)]
enum Outcome {
    Completed(Result<(), Error>),
    /// シグナルを受信した（名前を保持する）
    Interrupted(&'static str),
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    // シグナル受信時は実行中の Future を破棄し、生成した設定ファイルを削除してから終了する
    let outcome = tokio::select! {
        result = execute(cli) => Outcome::Completed(result),
        signal = shutdown_signal() => Outcome::Interrupted(signal),
    };

    ExitCode::from(exit_status(&outcome))
}

/// 終了結果をログに出し、プロセスの終了ステータスに変換する
fn exit_status(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Completed(Ok(())) => SUCCESS,
        Outcome::Completed(Err(error)) => {
            tracing::error!("{error}");
            tracing::info!("run the command without \"--lint\" to add missing translations");
            FAILURE
        }
        Outcome::Interrupted(signal) => {
            tracing::warn!("Received {signal}, exiting");
            INTERRUPTED
        }
    }
}

async fn execute(cli: Cli) -> Result<(), Error> {
    let working_dir = std::env::current_dir().map_err(Error::WorkingDir)?;
    let options = cli.into_options(working_dir)?;
    let provider = GoogleTranslator::new(&options.settings.translation)?;

    runner::run(&options, &provider).await?;
    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> &'static str {
    use tokio::signal::unix::{
        SignalKind,
        signal,
    };

    let Ok(mut terminate) = signal(SignalKind::terminate()) else {
        tracing::debug!("Failed to install SIGTERM handler");
        return ctrl_c().await;
    };

    tokio::select! {
        name = ctrl_c() => name,
        _ = terminate.recv() => "SIGTERM",
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> &'static str {
    ctrl_c().await
}

/// Resolves on Ctrl+C; never resolves if the handler cannot be installed.
async fn ctrl_c() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::debug!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    "SIGINT"
}

#[cfg(test)]
mod tests {
    use i18n_autotranslate::extractor::ExtractorError;
    use i18n_autotranslate::lint::LintError;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_exit_status_success() {
        assert_eq!(exit_status(&Outcome::Completed(Ok(()))), 0);
    }

    #[rstest]
    #[case(Error::Lint(LintError::MissingTranslation {
        locale: "es".to_string(),
        key: "hello".to_string(),
    }))]
    #[case(Error::Extractor(ExtractorError::Failed { command: "exit 2".to_string(), code: Some(2) }))]
    fn test_exit_status_failure(#[case] error: Error) {
        assert_eq!(exit_status(&Outcome::Completed(Err(error))), 1);
    }

    #[rstest]
    #[case("SIGINT")]
    #[case("SIGTERM")]
    fn test_exit_status_interrupted(#[case] signal: &'static str) {
        assert_eq!(exit_status(&Outcome::Interrupted(signal)), 130);
    }
}
