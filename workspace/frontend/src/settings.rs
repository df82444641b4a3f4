use common::ContractVersion;
use dashboard::ColorScheme;
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Prefix prepended to every endpoint; empty means same origin as the page
    pub api_base: String,

    /// Backend contract the responses are decoded against
    pub contract: ContractVersion,

    /// How chart series get their colors
    pub color_scheme: ColorScheme,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            contract: ContractVersion::default(),
            color_scheme: ColorScheme::default(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Overrides kept in localStorage
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_base)) = storage.get_item("wattboard_api_base") {
                settings.api_base = api_base.trim_end_matches('/').to_string();
            }

            if let Ok(Some(contract)) = storage.get_item("wattboard_contract") {
                match contract.parse() {
                    Ok(contract) => settings.contract = contract,
                    Err(e) => log::warn!("Ignoring wattboard_contract: {}", e),
                }
            }

            if let Ok(Some(colors)) = storage.get_item("wattboard_colors") {
                match colors.parse() {
                    Ok(scheme) => settings.color_scheme = scheme,
                    Err(e) => log::warn!("Ignoring wattboard_colors: {}", e),
                }
            }

            if let Ok(Some(log_level)) = storage.get_item("wattboard_log_level") {
                if let Ok(level) = log_level.parse::<Level>() {
                    settings.log_level = level;
                }
            }
        }

        settings
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
