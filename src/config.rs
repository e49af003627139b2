//! Server configuration, read from a TOML file and then overridden from the environment.

use std::env::var;
use std::fs::read_to_string;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;

/// Names the config file; `config.toml` in the working directory otherwise
pub const CONFIG_PATH_VAR: &str = "SCHOOL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bind_address: String,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub tls: Option<TlsConfig>,
    pub activities: ActivitiesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActivitiesConfig {
    /// Turns `max_participants` into a hard limit on signups
    pub enforce_capacity: bool,
    /// Replaces the built-in activity list
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".into(),
            static_dir: PathBuf::from("static"),
            log_level: "info".into(),
            tls: None,
            activities: ActivitiesConfig::default(),
        }
    }
}

impl Config {
    /// Loads the file named by `SCHOOL_CONFIG`, or `config.toml` if present.
    ///
    /// A missing default file is not an error; a missing file that was asked
    /// for explicitly is.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_path(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_path(DEFAULT_CONFIG_PATH)?
            }
            Err(_) => Self::default(),
        };

        Ok(config.with_overrides(|key| var(key).ok()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&contents, path)
    }

    fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str::<Config>(contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Applies `BIND_ADDRESS`, `STATIC_DIR` and `LOG_LEVEL` on top of the file values
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(bind_address) = lookup("BIND_ADDRESS") {
            self.bind_address = bind_address;
        }
        if let Some(static_dir) = lookup("STATIC_DIR") {
            self.static_dir = PathBuf::from(static_dir);
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.log_level = log_level;
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("bind_address", e.to_string()))
    }

    pub fn max_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|e| ConfigError::invalid("log_level", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_serve_plain_http_on_8000() {
        let config = Config::default();
        assert_eq!(config.socket_addr().unwrap().port(), 8000);
        assert_eq!(config.max_level().unwrap(), Level::INFO);
        assert!(config.tls.is_none());
        assert!(!config.activities.enforce_capacity);
    }

    #[test]
    fn reads_every_section_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
bind_address = "127.0.0.1:9090"
static_dir = "public"
log_level = "debug"

[tls]
cert_path = "cert.pem"
key_path = "key.pem"

[activities]
enforce_capacity = true
seed_file = "activities.toml"
"#
        )
        .unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9090");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.max_level().unwrap(), Level::DEBUG);
        assert_eq!(config.tls.unwrap().key_path, PathBuf::from("key.pem"));
        assert!(config.activities.enforce_capacity);
        assert_eq!(
            config.activities.seed_file,
            Some(PathBuf::from("activities.toml"))
        );
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml("log_level = \"warn\"", Path::new("inline")).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.max_level().unwrap(), Level::WARN);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("port = 1", Path::new("inline")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = Config::default().with_overrides(|key| match key {
            "BIND_ADDRESS" => Some("127.0.0.1:3000".into()),
            "LOG_LEVEL" => Some("trace".into()),
            _ => None,
        });

        assert_eq!(config.socket_addr().unwrap().port(), 3000);
        assert_eq!(config.max_level().unwrap(), Level::TRACE);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn bad_values_are_invalid() {
        let config = Config::default().with_overrides(|key| match key {
            "BIND_ADDRESS" => Some("not an address".into()),
            "LOG_LEVEL" => Some("loud".into()),
            _ => None,
        });

        assert!(matches!(config.socket_addr(), Err(ConfigError::Invalid { .. })));
        assert!(matches!(config.max_level(), Err(ConfigError::Invalid { .. })));
    }
}
