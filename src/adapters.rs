//! Adapter traits for plugins.
//!
//! A typesetting engine is plugged in by implementing [`MathEngineAdapter`]
//! and setting it on [`RenderPlugins`](crate::RenderPlugins), or by handing
//! it to [`math_plugin`](crate::math_plugin).

use std::fmt;

use crate::parser::options::MathOptions;

/// How an expression is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum DisplayMode {
    /// Within a line of text, from `$...$`.
    Inline,

    /// On its own, from `$$...$$`.
    Display,
}

impl DisplayMode {
    /// Whether this is display mode.
    pub fn is_display(self) -> bool {
        self == DisplayMode::Display
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayMode::Inline => "inline",
            DisplayMode::Display => "display",
        })
    }
}

/// Why an engine could not typeset an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypesetError {
    /// A `{` group opened at byte `position` was never closed.
    #[error("unclosed group opened at byte {position}")]
    UnclosedGroup {
        /// Byte offset of the `{`.
        position: usize,
    },

    /// A `}` at byte `position` closes no group.
    #[error("unexpected `}}` at byte {position}")]
    UnexpectedClose {
        /// Byte offset of the `}`.
        position: usize,
    },

    /// Any other failure reported by an engine.
    #[error("{0}")]
    Engine(String),
}

/// Implement this adapter to typeset math with an engine of your choice.
///
/// The renderer never lets a failure escape: when `render` returns an error
/// the literal expression is emitted in its place.
pub trait MathEngineAdapter {
    /// Typeset `latex`, the trimmed source between the delimiters, in the
    /// given `mode`.  The returned string is inserted into the output as is.
    fn render(
        &self,
        latex: &str,
        mode: DisplayMode,
        options: &MathOptions,
    ) -> Result<String, TypesetError>;
}
