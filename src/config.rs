use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Show the login control in the header
    #[arg(long, env = "USE_LOGIN")]
    pub use_login: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub ui: UiConfig,
    pub backend: BackendConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Login control settings. The auth flow itself lives with the provider
/// behind `login_url`.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub use_login: bool,
    pub login_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Title shown in the header and the document `<title>`.
    pub title: String,
    /// Optional source repository link rendered with the GitHub icon.
    #[serde(default)]
    pub repository_url: Option<String>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Endpoint the question form posts to.
    pub chat_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("auth.use_login", false)?
            .set_default("auth.login_url", "/.auth/login/aad")?
            .set_default("ui.title", "AOAI + AI Search Q&A対応サンプル")?
            .set_default("ui.static_dir", "static")?
            .set_default("backend.chat_url", "/chat")?
            .set_default("log.format", "compact")?;

        // An explicit path must exist; ./config.* is picked up when present.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::from(path.as_path())),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. QA_SERVER__PORT=8000, QA_AUTH__USE_LOGIN=true
        builder = builder.add_source(
            Environment::with_prefix("QA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (and their plain env vars) win over everything else.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(use_login) = cli.use_login {
            builder = builder.set_override("auth.use_login", use_login)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
