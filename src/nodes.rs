//! The math nodes added to the markdown-it syntax tree.

use std::fmt;

use markdown_it::{Node, NodeValue, Renderer};

/// A range of source lines.  Zero-based; `start` is inclusive and `end`
/// exclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan {
    /// The first line.
    pub start: usize,

    /// One past the last line.
    pub end: usize,
}

impl LineSpan {
    /// The number of lines spanned.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no lines.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<(usize, usize)> for LineSpan {
    fn from((start, end): (usize, usize)) -> Self {
        LineSpan { start, end }
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// **Inline**. Math delimited by single dollars.
///
/// ``` md
/// The area is $\pi r^2$.
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathInline {
    /// The expression source between the delimiters, trimmed.
    pub content: String,

    /// The delimiter used, always `$`.
    pub markup: &'static str,

    /// The typeset output, once [`typeset`](crate::typeset) has run.
    pub rendered: Option<String>,
}

/// **Block**. Display math delimited by double dollars.
///
/// ``` md
/// $$
/// \int_0^1 x\,dx
/// $$
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathBlock {
    /// The expression source between the delimiters.  Indentation common to
    /// the interior lines is removed and the whole is trimmed.
    pub content: String,

    /// The delimiter used, always `$$`.
    pub markup: &'static str,

    /// The source lines covered, delimiters included.
    pub map: LineSpan,

    /// The typeset output, once [`typeset`](crate::typeset) has run.  Ends
    /// with a newline.
    pub rendered: Option<String>,
}

impl NodeValue for MathInline {
    fn render(&self, _: &Node, fmt: &mut dyn Renderer) {
        match self.rendered {
            Some(ref html) => fmt.text_raw(html),
            None => fmt.text(&self.content),
        }
    }
}

impl NodeValue for MathBlock {
    fn render(&self, _: &Node, fmt: &mut dyn Renderer) {
        fmt.cr();
        match self.rendered {
            Some(ref html) => fmt.text_raw(html),
            None => fmt.text(&self.content),
        }
        fmt.cr();
    }
}
