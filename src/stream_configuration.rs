//! Configuration types for stream previews and diagnostics

use serde::{Deserialize, Serialize};

use crate::error::{StreamError, StreamResult};

/// Environment variable overriding [`StreamConfig::preview_len`] in [`DEFAULT_CONFIG`]
pub const PREVIEW_LEN_ENV: &str = "LAZY_STREAM_PREVIEW_LEN";

/// Environment variable enabling [`StreamConfig::trace_forcing`] in [`DEFAULT_CONFIG`]
pub const TRACE_FORCING_ENV: &str = "LAZY_STREAM_TRACE_FORCING";

/// Controls how much of a stream human-facing helpers will force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Number of elements taken by previews and `materialize_preview`
    pub preview_len: usize,
    /// Element bound for `render_bounded`; `None` falls back to `preview_len`
    pub render_limit: Option<usize>,
    /// Emit a `trace` record every time a tail thunk is forced. Stream
    /// operations consult [`DEFAULT_CONFIG`], so set it through [`TRACE_FORCING_ENV`].
    pub trace_forcing: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            preview_len: 20,
            render_limit: None,
            trace_forcing: false,
        }
    }
}

impl StreamConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preview length
    pub fn preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = preview_len;
        self
    }

    /// Set the render limit
    pub fn render_limit(mut self, render_limit: usize) -> Self {
        self.render_limit = Some(render_limit);
        self
    }

    /// Enable or disable forcing traces
    pub fn trace_forcing(mut self, enabled: bool) -> Self {
        self.trace_forcing = enabled;
        self
    }

    /// Bound used when rendering potentially infinite streams
    pub fn effective_render_limit(&self) -> usize {
        self.render_limit.unwrap_or(self.preview_len)
    }

    /// Validate the configuration
    pub fn validate(&self) -> StreamResult<()> {
        if self.preview_len == 0 {
            return Err(StreamError::InvalidConfig(
                "preview_len must be greater than 0".to_string(),
            ));
        }
        if self.render_limit == Some(0) {
            return Err(StreamError::InvalidConfig(
                "render_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> StreamResult<Self> {
        let config: StreamConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> StreamResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Defaults, overridden by [`PREVIEW_LEN_ENV`] and [`TRACE_FORCING_ENV`]
    /// when they hold valid values
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(PREVIEW_LEN_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(len) if len > 0 => config.preview_len = len,
                _ => log::warn!("Ignoring invalid {}={:?}", PREVIEW_LEN_ENV, raw),
            }
        }
        if let Ok(raw) = std::env::var(TRACE_FORCING_ENV) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.trace_forcing = true,
                "0" | "false" | "no" | "off" => config.trace_forcing = false,
                _ => log::warn!("Ignoring invalid {}={:?}", TRACE_FORCING_ENV, raw),
            }
        }
        config
    }
}

lazy_static::lazy_static! {
    /// Process-wide read-only defaults used by the convenience helpers
    pub static ref DEFAULT_CONFIG: StreamConfig = StreamConfig::from_env();
}

/// Get the process-wide default configuration
pub fn default_config() -> &'static StreamConfig {
    &DEFAULT_CONFIG
}
