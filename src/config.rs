#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    str::FromStr,
    sync::{Arc, Mutex, OnceLock},
};

use anyhow::{Result, bail};
use tracing::Level;

/// How computed results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Breakdown table with the result in the footer.
    #[default]
    Table,
    /// Pretty printed JSON.
    Json,
    /// Just the one line summary.
    Plain,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "plain" | "text" => Ok(OutputFormat::Plain),
            other => bail!("Unknown output format `{other}` (expected table, json or plain)"),
        }
    }
}

/// Whether terminal output is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Let `colored` decide from the terminal.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

impl FromStr for ColorChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" | "on" => Ok(ColorChoice::Always),
            "never" | "off" => Ok(ColorChoice::Never),
            other => bail!("Unknown color choice `{other}` (expected auto, always or never)"),
        }
    }
}

/// Settings read from the environment.
#[derive(Debug)]
pub struct ConfigState {
    /// Output format, possibly overridden from the command line.
    output:    Mutex<OutputFormat>,
    /// Colour preference.
    color:     ColorChoice,
    /// Maximum tracing level.
    log_level: Level,
    /// Values that were ignored, logged once a subscriber is installed.
    warnings:  Vec<String>,
}

impl ConfigState {
    /// Builds a configuration from the process environment.
    fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();
        let output = read_or_default(&lookup, "GRADEPOINT_OUTPUT", &mut warnings);
        let color = read_or_default(&lookup, "GRADEPOINT_COLOR", &mut warnings);
        let log_level = match lookup("GRADEPOINT_LOG") {
            Some(value) => value.trim().parse::<Level>().unwrap_or_else(|_| {
                warnings.push(format!(
                    "Ignoring GRADEPOINT_LOG: unknown level `{}` (expected trace, debug, info, \
                     warn or error)",
                    value.trim()
                ));
                Level::WARN
            }),
            None => Level::WARN,
        };

        Self {
            output: Mutex::new(output),
            color,
            log_level,
            warnings,
        }
    }

    /// Returns the output format.
    pub fn output(&self) -> OutputFormat {
        *self.output.lock().expect("output format poisoned")
    }

    /// Overrides the output format.
    pub fn set_output(&self, format: OutputFormat) {
        *self.output.lock().expect("output format poisoned") = format;
    }

    /// Returns the colour preference.
    pub fn color(&self) -> ColorChoice {
        self.color
    }

    /// Returns the maximum tracing level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Problems found while reading the environment.
    ///
    /// Configuration is read before logging is set up, so these are kept for
    /// the caller to log.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Applies the colour preference to `colored`.
    pub fn apply_color(&self) {
        match self.color {
            ColorChoice::Auto => colored::control::unset_override(),
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

/// Parses `key` from `lookup`, noting a warning and falling back to the
/// default when the value is unparsable.
fn read_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    warnings: &mut Vec<String>,
) -> T
where
    T: FromStr<Err = anyhow::Error> + Default,
{
    match lookup(key) {
        Some(value) => value.parse().unwrap_or_else(|e| {
            warnings.push(format!("Ignoring {key}: {e}"));
            T::default()
        }),
        None => T::default(),
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone, Debug)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> ConfigHandle {
    let mut guard = slot().lock().expect("config slot poisoned");
    let cfg = guard.get_or_insert_with(|| Arc::new(ConfigState::new()));
    ConfigHandle(Arc::clone(cfg))
}

/// Returns the configured output format.
pub fn output() -> OutputFormat {
    get().output()
}

/// Overrides the configured output format.
pub fn set_output(format: OutputFormat) {
    get().set_output(format);
}
