// ============================================================================
// CONFIG - Configuración en tiempo de compilación
// ============================================================================

pub const DEFAULT_APP_TITLE: &str = "Job Listings";
pub const DEFAULT_LISTING_CACHE_KEY: &str = "jobs";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_title: String,
    /// Clave única bajo la que se guarda el listado en localStorage
    pub listing_cache_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            listing_cache_key: DEFAULT_LISTING_CACHE_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            app_title: option_env!("APP_TITLE")
                .unwrap_or(DEFAULT_APP_TITLE).to_string(),
            listing_cache_key: option_env!("LISTING_CACHE_KEY")
                .filter(|key| !key.trim().is_empty())
                .unwrap_or(DEFAULT_LISTING_CACHE_KEY).to_string(),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL).to_string(),
        }
    }

    /// Nivel de log para wasm_logger; valores desconocidos caen a Info
    pub fn log_level(&self) -> log::Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" | "warning" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_jobs_key() {
        let config = AppConfig::default();
        assert_eq!(config.listing_cache_key, "jobs");
        assert_eq!(config.app_title, "Job Listings");
    }

    #[test]
    fn log_level_parsing_falls_back_to_info() {
        let mut config = AppConfig::default();
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "warning".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "verbose".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
