use std::path::PathBuf;

const LOG_LEVEL_VAR: &str = "CALC_LOG_LEVEL";
const PLUGIN_MANIFEST_VAR: &str = "CALC_PLUGIN_MANIFEST";
const HISTORY_LIMIT_VAR: &str = "CALC_HISTORY_LIMIT";

const LOG_LEVELS: &[&str] = &["TRACE", "DEBUG", "INFO", "WARN", "WARNING", "ERROR", "CRITICAL"];

/// Calculator configuration
///
/// None of these settings change arithmetic results; they only decide how
/// the calculator is assembled and how much it logs.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcConfig {
    /// Log verbosity (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    pub log_level: String,

    /// Optional plugin manifest adding operations at startup
    pub plugin_manifest: Option<PathBuf>,

    /// Maximum number of history entries kept (unbounded when unset)
    pub history_limit: Option<usize>,
}

impl CalcConfig {
    pub fn new() -> Self {
        Self {
            log_level: "WARNING".to_string(),
            plugin_manifest: None,
            history_limit: None,
        }
    }

    /// Set the log level
    pub fn log_level(mut self, level: &str) -> Self {
        self.log_level = level.trim().to_uppercase();
        self
    }

    /// Set the plugin manifest path
    pub fn plugin_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.plugin_manifest = Some(path.into());
        self
    }

    /// Set the history limit
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Read configuration from `CALC_*` environment variables
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.log_level(&level);
        }

        if let Some(path) = lookup(PLUGIN_MANIFEST_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.plugin_manifest(path.trim());
        }

        if let Some(raw) = lookup(HISTORY_LIMIT_VAR).filter(|v| !v.trim().is_empty()) {
            let limit = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid {}='{}'", HISTORY_LIMIT_VAR, raw))?;
            config = config.history_limit(limit);
        }

        config.validate()?;
        Ok(config)
    }

    /// Tracing filter directive for the configured level
    pub fn filter_directive(&self) -> &'static str {
        match self.log_level.as_str() {
            "TRACE" => "trace",
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" | "WARNING" => "warn",
            _ => "error",
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if self.history_limit == Some(0) {
            return Err("history_limit must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::new()
    }
}
