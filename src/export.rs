//! Textual export of a diff, for copy and download.
//!
//! Each op becomes one line prefixed `"+ "`, `"- "` or `"  "`. The text is
//! generated from a [`DiffResult`] alone; nothing is re-diffed.
//!
//! ```text
//! --- old          (optional header pair)
//! +++ new
//! @@ -1,3 +1,3 @@  (only in hunk mode)
//!   a
//! - b
//! + x
//!   c
//! ```

use crate::result::DiffResult;
use crate::tokenize::LINE_BREAK;

// =============================================================================
// ExportConfig
// =============================================================================

/// Default label of the old side in the header.
pub const DEFAULT_OLD_LABEL: &str = "old";

/// Default label of the new side in the header.
pub const DEFAULT_NEW_LABEL: &str = "new";

/// Configuration for textual export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Whether to emit the `--- old` / `+++ new` header pair.
    pub header: bool,
    /// Header label of the old side (default: "old").
    pub old_label: String,
    /// Header label of the new side (default: "new").
    pub new_label: String,
    /// `Some(n)`: emit only hunks with `n` context lines, each under an
    /// `@@` line. `None`: emit every op.
    pub context: Option<usize>,
    /// Whether to end the output with a line break.
    pub trailing_newline: bool,
}

impl ExportConfig {
    /// Every op, no header. What a "copy diff" action produces.
    pub const PLAIN: Self = Self {
        header: false,
        old_label: String::new(), // Will use DEFAULT_OLD_LABEL
        new_label: String::new(), // Will use DEFAULT_NEW_LABEL
        context: None,
        trailing_newline: false,
    };

    /// Patch-like download: header, hunks with 3 context lines.
    pub fn patch() -> Self {
        Self {
            header: true,
            context: Some(3),
            trailing_newline: true,
            ..Self::PLAIN
        }
    }

    /// Emit the header pair with custom labels.
    pub fn with_header(mut self, old_label: impl Into<String>, new_label: impl Into<String>) -> Self {
        self.header = true;
        self.old_label = old_label.into();
        self.new_label = new_label.into();
        self
    }

    /// Emit only hunks with `context` surrounding lines.
    pub fn with_context(mut self, context: usize) -> Self {
        self.context = Some(context);
        self
    }

    /// Get the old-side label.
    pub fn old_label(&self) -> &str {
        if self.old_label.is_empty() {
            DEFAULT_OLD_LABEL
        } else {
            &self.old_label
        }
    }

    /// Get the new-side label.
    pub fn new_label(&self) -> &str {
        if self.new_label.is_empty() {
            DEFAULT_NEW_LABEL
        } else {
            &self.new_label
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::PLAIN
    }
}

// =============================================================================
// Export
// =============================================================================

/// Render a diff to its textual interchange form.
pub fn to_text(result: &DiffResult, config: &ExportConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    if config.header {
        lines.push(format!("--- {}", config.old_label()));
        lines.push(format!("+++ {}", config.new_label()));
    }

    match config.context {
        Some(context) => {
            for hunk in result.hunks(context) {
                lines.push(hunk.header());
                lines.extend(hunk.ops.iter().map(ToString::to_string));
            }
        }
        None => lines.extend(result.ops.iter().map(ToString::to_string)),
    }

    let mut output = lines.join("\n");
    if config.trailing_newline && !lines.is_empty() {
        output.push(LINE_BREAK);
    }
    output
}

/// Render a diff to UTF-8 bytes, ready to be written to a file.
pub fn to_text_bytes(result: &DiffResult, config: &ExportConfig) -> Vec<u8> {
    to_text(result, config).into_bytes()
}

// =============================================================================
// Tests
// =============================================================================
