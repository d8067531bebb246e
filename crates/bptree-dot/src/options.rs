//! Rendering options for the DOT emitter.

/// Placeholder drawn in key cells that a block does not fill.
pub const DEFAULT_PLACEHOLDER: &str = "_";

/// Knobs that change how blocks are drawn, not which blocks are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub placeholder: String,
    /// Escape `&`, `<`, `>` and `"` in keys. Off by default so keys can carry
    /// label markup such as `&hellip;` or `<b>`.
    pub escape_keys: bool,
}

impl RenderOptions {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_escape_keys(mut self, escape_keys: bool) -> Self {
        self.escape_keys = escape_keys;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            escape_keys: false,
        }
    }
}
