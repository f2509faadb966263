use crate::{
    domain::standings::{StandingsConfig, TiePolicy},
    error::{config::ConfigError, AppError},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub app_url: String,

    pub standings: StandingsConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let app_url =
            std::env::var("APP_URL").unwrap_or_else(|_| format!("http://{}", bind_addr));

        let mut standings = StandingsConfig::default();
        if let Ok(value) = std::env::var("POINTS_PER_WIN") {
            standings.points_per_win =
                value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "POINTS_PER_WIN".to_string(),
                    value: value.clone(),
                })?;
        }
        if let Ok(value) = std::env::var("TIE_POLICY") {
            standings.tie_policy =
                value
                    .parse::<TiePolicy>()
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: "TIE_POLICY".to_string(),
                        value: value.clone(),
                    })?;
        }

        Ok(Self {
            database_url,
            bind_addr,
            app_url,
            standings,
        })
    }
}
