use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub site: SiteSettings,
    pub database: DatabaseSettings,
    pub debug: bool,
    pub secret: SecretSettings,
    pub email: EmailSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub frontend_url: String,
    pub protocol: String,
    pub max_log_files: usize,
}

/// Name and domain used in confirmation emails and links.
#[derive(Deserialize, Clone, Debug)]
pub struct SiteSettings {
    pub name: String,
    pub domain: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct SecretSettings {
    pub secret_key: String,
    /// Minutes a confirmation token stays valid.
    pub token_expiration: i64,
    pub hmac_secret: String,
}

impl std::fmt::Debug for SecretSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretSettings")
            .field("token_expiration", &self.token_expiration)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailBackend {
    Smtp,
    Console,
    Memory,
}

#[derive(Deserialize, Clone)]
pub struct EmailSettings {
    pub backend: EmailBackend,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub host_user: String,
    #[serde(default)]
    pub host_user_password: String,
    pub sender: String,
}

impl std::fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailSettings")
            .field("backend", &self.backend)
            .field("host", &self.host)
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

pub enum Environment {
    Testing,
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Testing => "testing",
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use 'testing', 'development' or 'production'.",
                other
            )),
        }
    }
}
