use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub refresh: RefreshConfig,
    pub logs: LogsConfig,
    pub status: StatusConfig,
    pub alerts: AlertsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Slow timer: inventory poll and stats batch.
    pub data_interval_ms: u64,
    /// Fast timer: marquee and port rotation only; never triggers a runtime call.
    pub animation_interval_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            data_interval_ms: 2000,
            animation_interval_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    pub tail_lines: usize,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { tail_lines: 500 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// How many data ticks a transient status message stays on screen.
    pub display_ticks: u32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self { display_ticks: 3 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    pub mem_warn_percent: f64,
    pub mem_critical_percent: f64,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            mem_warn_percent: 80.0,
            mem_critical_percent: 95.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset.
    pub level: String,
    /// Log file; stdout belongs to the dashboard. Defaults to <tmp>/dockprism.log.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> std::path::PathBuf {
        match &self.file {
            Some(f) => std::path::PathBuf::from(f),
            None => std::env::temp_dir().join("dockprism.log"),
        }
    }
}

impl AppConfig {
    /// Load from CONFIG_FILE (default `config.toml`). A missing file yields defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(std::path::Path::new(&path))
    }

    pub fn load_from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
            Err(e) => Err(anyhow::anyhow!("reading {}: {}", path.display(), e)),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.refresh.data_interval_ms > 0,
            "refresh.data_interval_ms must be > 0, got {}",
            self.refresh.data_interval_ms
        );
        anyhow::ensure!(
            self.refresh.animation_interval_ms > 0,
            "refresh.animation_interval_ms must be > 0, got {}",
            self.refresh.animation_interval_ms
        );
        anyhow::ensure!(
            self.logs.tail_lines > 0,
            "logs.tail_lines must be > 0, got {}",
            self.logs.tail_lines
        );
        anyhow::ensure!(
            self.status.display_ticks > 0,
            "status.display_ticks must be > 0, got {}",
            self.status.display_ticks
        );
        anyhow::ensure!(
            self.alerts.mem_warn_percent > 0.0
                && self.alerts.mem_warn_percent < self.alerts.mem_critical_percent,
            "alerts.mem_warn_percent must be > 0 and below alerts.mem_critical_percent, got {}",
            self.alerts.mem_warn_percent
        );
        anyhow::ensure!(
            self.alerts.mem_critical_percent <= 100.0,
            "alerts.mem_critical_percent must be <= 100, got {}",
            self.alerts.mem_critical_percent
        );
        Ok(())
    }
}
