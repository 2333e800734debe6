//! Configuration for globedock
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (GLOBEDOCK_*)
//! 3. Project config (globedock.toml next to the bundle)
//! 4. Built-in defaults
//!
//! Defaults reproduce the original deployment: static mode, Vite port
//! 5173, 900px embed on a black background.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::embed::EmbedOptions;
use crate::error::{GlobedockError, GlobedockResult};
use crate::probe::{Endpoint, TcpProbe, DEFAULT_DEV_PORT};
use crate::render::RenderConfig;

/// Config file name looked up next to the host page.
pub const CONFIG_FILE: &str = "globedock.toml";

/// Dev server section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound for one probe attempt, in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Embed the live dev server instead of the static bundle.
    #[serde(default)]
    pub use_dev_server: bool,

    /// Skip the probe and embed the endpoint regardless.
    #[serde(default)]
    pub force: bool,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            probe_timeout_ms: default_probe_timeout_ms(),
            use_dev_server: false,
            force: false,
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    DEFAULT_DEV_PORT
}

fn default_probe_timeout_ms() -> u64 {
    1000
}

/// Static bundle section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    #[serde(default = "default_bundle_root")]
    pub root: PathBuf,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            root: default_bundle_root(),
        }
    }
}

fn default_bundle_root() -> PathBuf {
    PathBuf::from("static")
}

/// Embed presentation section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            height: default_height(),
            background: default_background(),
        }
    }
}

fn default_title() -> String {
    "Globe Dashboard".to_string()
}

fn default_height() -> u32 {
    900
}

fn default_background() -> String {
    "#000000".to_string()
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dev: DevConfig,

    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub embed: EmbedConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GlobedockResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> GlobedockResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;
        Self::parse_with_warnings(&content, path)
    }

    fn parse_with_warnings(
        content: &str,
        path: &Path,
    ) -> GlobedockResult<(Self, Vec<ConfigWarning>)> {
        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(content);

        let config: Self = serde_ignored::deserialize(deserializer, |ignored| {
            unknown_paths.push(ignored.to_string());
        })
        .map_err(|e| GlobedockError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from the project config if present, else defaults. Env
    /// overrides apply either way.
    pub fn load_or_default(dir: Option<&Path>) -> Self {
        Self::load_or_default_with_warnings(dir).0
    }

    /// Same, but keeps the unknown-key warnings so the CLI can print
    /// them instead of letting a typoed key silently lose to a default.
    pub fn load_or_default_with_warnings(dir: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        if let Some(dir) = dir {
            let project_config = dir.join(CONFIG_FILE);
            if project_config.exists() {
                if let Ok((config, warnings)) = Self::load_with_warnings(&project_config) {
                    return (config.with_env_overrides(), warnings);
                }
            }
        }

        (Self::default().with_env_overrides(), Vec::new())
    }

    /// Apply environment variable overrides (GLOBEDOCK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_env_overrides_from(|key| std::env::var(key).ok())
    }

    // Split out so tests can inject an environment.
    fn with_env_overrides_from(mut self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = get_env("GLOBEDOCK_HOST") {
            self.dev.host = host;
        }

        if let Some(port) = get_env("GLOBEDOCK_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.dev.port = port;
            }
        }

        if let Some(root) = get_env("GLOBEDOCK_BUNDLE_ROOT") {
            self.bundle.root = PathBuf::from(root);
        }

        if let Some(val) = get_env("GLOBEDOCK_USE_DEV_SERVER") {
            self.dev.use_dev_server = val.to_lowercase() != "false" && val != "0";
        }

        self
    }

    /// Dev server endpoint from the `[dev]` section.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.dev.host.clone(), self.dev.port)
    }

    /// Probe with the configured timeout bound.
    pub fn probe(&self) -> TcpProbe {
        TcpProbe::new(Duration::from_millis(self.dev.probe_timeout_ms))
    }

    /// Assemble the explicit per-render configuration.
    pub fn render_config(&self, verbose_diagnostics: bool) -> RenderConfig {
        RenderConfig {
            use_remote_endpoint: self.dev.use_dev_server,
            force_skip_probe: self.dev.force,
            verbose_diagnostics,
            wrap_srcdoc: false,
            endpoint: self.endpoint(),
            bundle_root: self.bundle.root.clone(),
            embed: EmbedOptions {
                title: self.embed.title.clone(),
                height: self.embed.height,
                background: self.embed.background.clone(),
            },
        }
    }
}
