use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    pub database_acquire_timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(Environment::default()))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let conf = builder
            .set_default("service_name", "skillscore")?
            .set_default("listen_port", "3000")?
            .set_default("database_pool_max_connections", 5)?
            .set_default("database_acquire_timeout_secs", 5)?
            .build()?;
        conf.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_keys() {
        let s = Settings::from_builder(
            Config::builder()
                .set_override("database_url", "postgres://localhost/skillscore")
                .unwrap(),
        )
        .unwrap();
        assert_eq!(s.service_name, "skillscore");
        assert_eq!(s.listen_port, "3000");
        assert_eq!(s.database_pool_max_connections, 5);
        assert_eq!(s.database_acquire_timeout_secs, 5);
    }

    #[test]
    fn database_url_is_required() {
        let res = Settings::from_builder(Config::builder());
        assert!(res.is_err());
    }

    #[test]
    fn overrides_win_over_defaults() {
        let s = Settings::from_builder(
            Config::builder()
                .set_override("database_url", "postgres://db/skillscore")
                .unwrap()
                .set_override("listen_port", "8080")
                .unwrap()
                .set_override("database_pool_max_connections", "12")
                .unwrap(),
        )
        .unwrap();
        assert_eq!(s.listen_port, "8080");
        assert_eq!(s.database_pool_max_connections, 12);
    }
}
