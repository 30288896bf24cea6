use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_PATH: &str = "data/workouts.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
    pub max_connections: u32,
    pub allowed_origins: Vec<String>,
    pub seed_days: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_path = lookup("APP_DATABASE_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let max_connections = lookup("APP_DB_MAX_CONNECTIONS")
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let mut allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(value) => split_list(&value),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };
        for local in [format!("http://localhost:{port}"), format!("http://127.0.0.1:{port}")] {
            if !allowed_origins.contains(&local) {
                allowed_origins.push(local);
            }
        }

        let seed_days = lookup("APP_SEED_DAYS")
            .map(|value| split_list(&value))
            .unwrap_or_default();

        Self {
            port,
            database_path,
            max_connections,
            allowed_origins,
            seed_days,
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.trim_end_matches('/').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_path, PathBuf::from("data/workouts.db"));
        assert_eq!(config.max_connections, 10);
        assert_eq!(
            config.allowed_origins,
            ["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert!(config.seed_days.is_empty());
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = config_from(&[("PORT", "http"), ("APP_DB_MAX_CONNECTIONS", "0")]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn origins_and_seed_lists_are_split() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("ALLOWED_ORIGINS", "https://gym.example.com/, ,http://localhost:3000"),
            ("APP_SEED_DAYS", "Push, Pull ,Legs"),
        ]);
        assert_eq!(
            config.allowed_origins,
            [
                "https://gym.example.com",
                "http://localhost:3000",
                "http://localhost:8080",
                "http://127.0.0.1:8080",
            ]
        );
        assert_eq!(config.seed_days, ["Push", "Pull", "Legs"]);
    }
}
