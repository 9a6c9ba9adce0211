use serde::Deserialize;
use std::{env, fmt, fs, io, net::SocketAddr};

// Runtime settings for the HTTP server.

pub const CONFIG_PATH_VAR: &str = "FAILURE_RESPONDER_CONFIG";
pub const BIND_ADDR_VAR: &str = "FAILURE_RESPONDER_ADDR";
pub const EXPOSE_FAILURE_ROUTE_VAR: &str = "FAILURE_RESPONDER_EXPOSE_FAILURE_ROUTE";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3004);

// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    // Whether the `/failures/{code}` diagnostic route is mounted.
    pub expose_failure_route: bool,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            expose_failure_route: true,
            log_format: LogFormat::Compact,
        }
    }
}

// Optional TOML file layer; every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    bind_addr: Option<SocketAddr>,
    expose_failure_route: Option<bool>,
    log_format: Option<LogFormat>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: io::Error },
    Parse { path: String, source: toml::de::Error },
    InvalidValue { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config file {path}: {source}")
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config file {path}: {source}")
            }
            ConfigError::InvalidValue { var, value } => {
                write!(f, "invalid value {value:?} for {var}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

// Load configuration from the process environment and the optional file it names.
pub fn load() -> Result<ServerConfig, ConfigError> {
    let file = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => {
            let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            Some((path, contents))
        }
        Err(_) => None,
    };

    resolve(
        file.as_ref()
            .map(|(path, contents)| (path.as_str(), contents.as_str())),
        |key| env::var(key).ok(),
    )
}

// Layer defaults, then file contents, then environment overrides.
pub fn resolve<E>(file: Option<(&str, &str)>, env: E) -> Result<ServerConfig, ConfigError>
where
    E: Fn(&str) -> Option<String>,
{
    let mut config = ServerConfig::default();

    if let Some((path, contents)) = file {
        let file: FileConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        if let Some(bind_addr) = file.bind_addr {
            config.bind_addr = bind_addr;
        }
        if let Some(expose_failure_route) = file.expose_failure_route {
            config.expose_failure_route = expose_failure_route;
        }
        if let Some(log_format) = file.log_format {
            config.log_format = log_format;
        }
    }

    if let Some(value) = env(BIND_ADDR_VAR) {
        config.bind_addr = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: BIND_ADDR_VAR,
                value,
            })?;
    }

    if let Some(value) = env(EXPOSE_FAILURE_ROUTE_VAR) {
        config.expose_failure_route = parse_flag(&value).ok_or(ConfigError::InvalidValue {
            var: EXPOSE_FAILURE_ROUTE_VAR,
            value,
        })?;
    }

    if let Some(value) = env(LOG_FORMAT_VAR) {
        config.log_format = LogFormat::parse(&value).ok_or(ConfigError::InvalidValue {
            var: LOG_FORMAT_VAR,
            value,
        })?;
    }

    Ok(config)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
