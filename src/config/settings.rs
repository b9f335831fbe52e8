//! Runtime settings read from the environment (and `.env` when present).

use crate::error::ConfigError;

/// Fixed listen address.
pub const LISTEN_ADDR: &str = "0.0.0.0:3000";

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_DB_USER: &str = "root";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub listen_addr: String,
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `DATABASE_URL` wins; otherwise the MySQL URL is assembled from `DB_HOST`, `DB_PORT`,
    /// `DB_USER`, `DB_PASSWORD` and `DB_NAME`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => {
                let name = var("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
                let host = var("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.into());
                let port = match var("DB_PORT") {
                    Some(p) => p.parse::<u16>().map_err(|_| ConfigError::Invalid {
                        key: "DB_PORT",
                        value: p,
                    })?,
                    None => DEFAULT_DB_PORT,
                };
                let user = var("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.into());
                let password = lookup("DB_PASSWORD").unwrap_or_default();
                mysql_url(&host, port, &user, &password, &name)
            }
        };

        let max_connections = match var("DB_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DB_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            },
            None => 1,
        };

        Ok(Settings {
            database_url,
            max_connections,
            listen_addr: LISTEN_ADDR.to_string(),
        })
    }
}

fn mysql_url(host: &str, port: u16, user: &str, password: &str, name: &str) -> String {
    let user = urlencoding::encode(user);
    let name = urlencoding::encode(name);
    if password.is_empty() {
        format!("mysql://{}@{}:{}/{}", user, host, port, name)
    } else {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            user,
            urlencoding::encode(password),
            host,
            port,
            name
        )
    }
}
