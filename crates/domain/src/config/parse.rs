use serde::{Deserialize, Serialize};

/// Knobs that shape parser output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParseOptions {
    /// Join multi-segment TXT strings with a space instead of nothing.
    #[serde(default = "default_true")]
    pub preserve_spacing: bool,

    /// Keep the trailing `.` on fully qualified names in output.
    #[serde(default = "default_true")]
    pub keep_trailing_dot: bool,

    /// Return one ordered list instead of records grouped by type.
    #[serde(default)]
    pub flatten: bool,

    /// Abort on the first record whose rdata fails to decode instead of
    /// collecting the failure and moving on.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            preserve_spacing: true,
            keep_trailing_dot: true,
            flatten: false,
            strict: false,
        }
    }
}

impl ParseOptions {
    pub fn flattened(mut self) -> Self {
        self.flatten = true;
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn without_trailing_dot(mut self) -> Self {
        self.keep_trailing_dot = false;
        self
    }

    pub fn compact_text(mut self) -> Self {
        self.preserve_spacing = false;
        self
    }
}

fn default_true() -> bool {
    true
}
