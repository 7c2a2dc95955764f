use crate::{env_or_default, env_parse, ConfigError, FromEnv};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Where the HTTP listener binds (`HOST`, `PORT`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port`, as accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("HOST", DEFAULT_HOST),
            port: env_parse("PORT", &DEFAULT_PORT.to_string())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_vars_fall_back_to_default() {
        temp_env::with_vars_unset(["HOST", "PORT"], || {
            assert_eq!(ServerConfig::from_env().unwrap(), ServerConfig::default());
        });
    }

    #[test]
    fn test_host_and_port_from_env() {
        temp_env::with_vars(
            [("HOST", Some("127.0.0.1")), ("PORT", Some("3000"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:3000");
            },
        );
    }

    #[test]
    fn test_port_out_of_range_names_the_variable() {
        for bad in ["http", "70000", "-1"] {
            temp_env::with_var("PORT", Some(bad), || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("'PORT'"), "{err}");
            });
        }
    }

    #[test]
    fn test_default_binds_all_interfaces() {
        assert_eq!(ServerConfig::default().address(), "0.0.0.0:8080");
    }
}
