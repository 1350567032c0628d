//! Human-facing text helpers. Nothing here is needed to use a stream; these
//! exist for demos, logs and quick inspection.
use std::fmt;

use super::core::Stream;
use super::utility::UtilityStreamExt;
use crate::stream_configuration::StreamConfig;

impl<T: fmt::Display + Clone> Stream<T> {
    /// Debug rendering of at most `limit` elements.
    ///
    /// Ends with `- End of Stream -` when the stream is exhausted within the
    /// limit and with `...` otherwise, so it is safe on infinite streams.
    pub fn render_bounded(&self, limit: usize) -> String {
        self.render_prefix(Some(limit))
    }

    /// [`Stream::render_bounded`] using `config.effective_render_limit()`
    pub fn render_with(&self, config: &StreamConfig) -> String {
        self.render_bounded(config.effective_render_limit())
    }

    /// An optional `*description*` line followed by the first
    /// `config.preview_len` elements, one per line.
    pub fn preview(&self, description: Option<&str>, config: &StreamConfig) -> String {
        let mut out = String::new();
        if let Some(description) = description {
            out.push_str(&format!("*{}*\n", description));
        }
        for item in self.materialize_preview(config) {
            out.push_str(&format!("{}\n", item));
        }
        out
    }
}

/// `description: value`, for printing a single property of a stream
pub fn describe(description: &str, value: impl fmt::Display) -> String {
    format!("{}: {}", description, value)
}
