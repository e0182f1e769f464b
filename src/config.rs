use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// id del elemento ancla donde se monta la app (sin '#')
    pub mount_id: String,
    /// Base del History API, p.ej. "/" o "/gallery/"
    pub router_base: String,
    pub log_level: String,
    pub app_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            router_base: "/".to_string(),
            log_level: "info".to_string(),
            app_title: "Photos".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            mount_id: option_env!("APP_MOUNT_ID")
                .map(|id| id.trim_start_matches('#').to_string())
                .filter(|id| !id.is_empty())
                .unwrap_or(defaults.mount_id),
            router_base: option_env!("ROUTER_BASE")
                .map(str::to_string)
                .unwrap_or(defaults.router_base),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            app_title: option_env!("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
        }
    }

    /// Nivel de log para wasm_logger; un valor inválido cae a Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Resumen en JSON para el log de arranque
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<config: {}>", e))
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mount_on_app() {
        let config = AppConfig::default();
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.router_base, "/");
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.log_level = "WARN".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);

        config.log_level = "verbose".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_json_summary_round_trips() {
        let json = AppConfig::default().to_json();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
