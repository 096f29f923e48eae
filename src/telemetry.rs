use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{Builder, InitError, Rotation},
};
use tracing_subscriber::layer::SubscriberExt;

use crate::settings::types::Settings;

pub fn get_subscriber(
    settings: &Settings,
) -> Result<(impl tracing::Subscriber + Send + Sync, WorkerGuard), InitError> {
    let env_filter = match settings.debug {
        true => "trace",
        false => "info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(env_filter));

    let json_log = match settings.debug {
        true => None,
        false => Some(tracing_subscriber::fmt::layer().json()),
    };

    let file_appender = Builder::new()
        .rotation(Rotation::HOURLY)
        .max_log_files(settings.application.max_log_files)
        .build("./logs")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    let stdout_log = tracing_subscriber::fmt::layer().pretty();
    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(stdout_log)
        .with(json_log)
        .with(file_log);

    Ok((subscriber, guard))
}

/// Installs the global subscriber. Keep the returned guard alive for as long
/// as file logs should be flushed.
pub fn init_subscriber(settings: &Settings) -> Result<WorkerGuard, InitError> {
    let (subscriber, guard) = get_subscriber(settings)?;
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
    Ok(guard)
}
