//! Adboard: a client for a classified-adverts service.
//!
//! Adboard provides:
//! - Advert listing with filter criteria (name, sale/buy, price range, tags)
//! - Criteria persisted locally and restored on the next run
//! - Last-triggered-wins list fetching: a late response never overwrites a newer one
//! - Advert creation with client-side validation and multipart upload
//! - A plain-text view layer and a `clap` command line
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - List / form / submit controllers                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - View models │   │ - JSON I/O    │   │ - API futures │
//! │ - Rendering   │   │ - Filters key │   │ - Dispatcher  │
//! │ - Prices      │   │ - Backend API │   │ - Navigation  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Remote & Infrastructure Layers             │
//! │  - Criteria, query encoding, drafts (domain/)       │
//! │  - HTTP adverts API (remote/)                       │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (criteria, adverts, drafts, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`remote`]: Adverts API trait and HTTP client
//! - [`storage`]: Local key-value persistence
//! - [`worker`]: Effect execution and event loop
//! - [`ui`]: View models and plain-text rendering
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/adboard/config.toml
//! api_url = "http://localhost:3001/apiv1"
//! trace_level = "debug"
//! request_timeout_secs = 10
//! ```
//!
//! Environment variables (`ADBOARD_API_URL`, `ADBOARD_DATA_DIR`,
//! `ADBOARD_TRACE_LEVEL`) override the file; command-line flags override both.
//!
//! # Example
//!
//! ```rust
//! use adboard::{handle_event, initialize, Action, Event};
//! use adboard::domain::{FilterCriteria, SaleFilter};
//! use adboard::storage::MemoryStorage;
//!
//! let storage = MemoryStorage::new();
//! let mut state = initialize(&storage);
//!
//! handle_event(&mut state, &Event::ListMounted)?;
//! let criteria = FilterCriteria { sale: SaleFilter::Sell, ..Default::default() };
//! let (_, actions) = handle_event(&mut state, &Event::FiltersSubmitted(criteria))?;
//!
//! assert!(matches!(actions[0], Action::PersistFilters(_)));
//! assert!(matches!(&actions[1], Action::FetchAdverts(r) if r.query == "sale=true"));
//! # Ok::<(), adboard::AdboardError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod remote;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{AdboardError, Result};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::{load_filters, Storage};

/// Default API root.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/apiv1";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration.
///
/// # Example
///
/// ```toml
/// api_url = "https://ads.example.com/apiv1"
/// data_dir = "~/.adboard"
/// trace_level = "debug"
/// request_timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root URL of the adverts API. Default: `http://localhost:3001/apiv1`
    pub api_url: String,

    /// Directory for the local store and the log file.
    ///
    /// `~` is expanded. Default: the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Timeout applied to every API request. Default: 30
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            trace_level: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `api_url`: String (empty falls back to the default)
    /// - `data_dir`: String → `PathBuf`, `~` expanded
    /// - `trace_level`: String → `Option<String>`
    /// - `request_timeout_secs`: String → `u64` (falls back to 30 on parse error)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use adboard::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "http://ads.local/apiv1".to_string());
    /// map.insert("request_timeout_secs".to_string(), "nope".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_url, "http://ads.local/apiv1");
    /// assert_eq!(config.request_timeout_secs, 30);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self::default().merge_map(config)
    }

    /// Overlays the keys present in `config` onto `self`.
    #[must_use]
    pub fn merge_map(mut self, config: &BTreeMap<String, String>) -> Self {
        if let Some(api_url) = config.get("api_url").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            self.api_url = api_url.to_string();
        }

        if let Some(data_dir) = config.get("data_dir").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            self.data_dir = Some(infrastructure::expand_tilde(data_dir));
        }

        if let Some(level) = config.get("trace_level").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            self.trace_level = Some(level.to_string());
        }

        if let Some(timeout) = config.get("request_timeout_secs") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => {
                    tracing::debug!(value = %timeout, "invalid request_timeout_secs, keeping previous value");
                }
            }
        }

        self
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`AdboardError::Io`] if the file cannot be read and
    /// [`AdboardError::Config`] if it is not valid configuration TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
            .map_err(|e| AdboardError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses TOML configuration; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AdboardError::Config`] on invalid TOML or unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| AdboardError::Config(e.to_string()))?;
        if let Some(dir) = config.data_dir.take() {
            config.data_dir = Some(infrastructure::expand_tilde(&dir.to_string_lossy()));
        }
        Ok(config)
    }

    /// Loads configuration from the file layer plus the environment.
    ///
    /// With `path`, that file must exist. Without it,
    /// `<config_dir>/config.toml` is read when present.
    ///
    /// # Errors
    ///
    /// See [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let from_file = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = infrastructure::get_config_dir().join(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        Ok(from_file.with_env_from(|key| std::env::var(key).ok()))
    }

    /// Overlays `ADBOARD_*` variables read through `lookup`.
    #[must_use]
    pub fn with_env_from<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut overrides = BTreeMap::new();
        for (var, key) in [
            ("ADBOARD_API_URL", "api_url"),
            ("ADBOARD_DATA_DIR", "data_dir"),
            ("ADBOARD_TRACE_LEVEL", "trace_level"),
        ] {
            if let Some(value) = lookup(var) {
                overrides.insert(key.to_string(), value);
            }
        }
        self.merge_map(&overrides)
    }

    /// Data directory after applying the platform default.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(infrastructure::get_data_dir)
    }
}

/// Creates application state with filter criteria restored from `storage`.
///
/// A missing, corrupt or invalid stored value yields the default criteria.
///
/// # Example
///
/// ```rust
/// use adboard::initialize;
/// use adboard::storage::MemoryStorage;
///
/// let state = initialize(&MemoryStorage::new());
/// assert!(state.filters().is_default());
/// ```
pub fn initialize(storage: &dyn Storage) -> AppState {
    tracing::debug!("initializing adboard state");
    AppState::new(load_filters(storage))
}
