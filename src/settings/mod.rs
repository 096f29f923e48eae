use std::path::PathBuf;

use types::{Environment, Settings};

pub mod types;

pub fn get_settings() -> Result<Settings, config::ConfigError> {
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    get_settings_for(environment)
}

pub fn get_test_settings() -> Settings {
    get_settings_for(Environment::Testing).expect("Error on getting settings.")
}

pub fn get_settings_for(environment: Environment) -> Result<Settings, config::ConfigError> {
    let settings_directory = settings_directory()?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(settings_directory.join("base.yaml")))
        .add_source(config::File::from(
            settings_directory.join(environment_filename),
        ))
        // E.g. 'APP_APPLICATION__PORT=5001' would set 'Settings.application.port'
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

fn settings_directory() -> Result<PathBuf, config::ConfigError> {
    std::env::current_dir()
        .map(|base_path| base_path.join("settings"))
        .map_err(|e| {
            config::ConfigError::Message(format!(
                "Failed to determine the current directory: {}",
                e
            ))
        })
}
