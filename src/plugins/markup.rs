//! A typesetting engine that marks math up for client-side rendering.

use markdown_it::common::utils::escape_html;

use crate::adapters::{DisplayMode, MathEngineAdapter, TypesetError};
use crate::parser::options::MathOptions;

#[derive(Debug, Copy, Clone)]
/// Wraps each expression in an element carrying its display mode, for a
/// script such as KaTeX's auto-render to typeset in the browser:
///
/// ``` html
/// <span data-math-style="inline">x^2</span>
/// ```
///
/// Expressions with unbalanced `{`/`}` groups are rejected.
pub struct MarkupAdapter<'a> {
    tag: &'a str,
}

impl<'a> MarkupAdapter<'a> {
    /// Construct a new `MarkupAdapter` wrapping expressions in `tag`.
    pub fn new(tag: &'a str) -> Self {
        MarkupAdapter { tag }
    }
}

impl Default for MarkupAdapter<'_> {
    fn default() -> Self {
        MarkupAdapter::new("span")
    }
}

impl MathEngineAdapter for MarkupAdapter<'_> {
    fn render(
        &self,
        latex: &str,
        mode: DisplayMode,
        _options: &MathOptions,
    ) -> Result<String, TypesetError> {
        check_groups(latex)?;

        let mut out = String::with_capacity(latex.len() + 48);
        out.push('<');
        out.push_str(self.tag);
        out.push_str(" data-math-style=\"");
        out.push_str(match mode {
            DisplayMode::Inline => "inline",
            DisplayMode::Display => "display",
        });
        out.push_str("\">");
        out.push_str(&escape_html(latex));
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        Ok(out)
    }
}

/// Check that `{` and `}` pair up.  A byte following a backslash is a
/// control symbol and never opens or closes a group.
fn check_groups(latex: &str) -> Result<(), TypesetError> {
    let bytes = latex.as_bytes();
    let mut open = Vec::new();
    let mut ix = 0;

    while ix < bytes.len() {
        match bytes[ix] {
            b'\\' => ix += 1,
            b'{' => open.push(ix),
            b'}' => {
                if open.pop().is_none() {
                    return Err(TypesetError::UnexpectedClose { position: ix });
                }
            }
            _ => {}
        }
        ix += 1;
    }

    match open.pop() {
        Some(position) => Err(TypesetError::UnclosedGroup { position }),
        None => Ok(()),
    }
}
