//! Dollar math.
//!
//! Inline math is delimited by single dollars, `$x^2$`; display math by
//! double dollars at the edges of one or more lines:
//!
//! ``` md
//! $$
//! \sum_{k=1}^n k = \frac{n(n+1)}{2}
//! $$
//! ```
//!
//! A dollar is only an inline delimiter when it is not escaped and not part
//! of a `$$` pair, so display math never opens inline math by accident.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use markdown_it::parser::block::{BlockRule, BlockState};
use markdown_it::parser::core::CoreRule;
use markdown_it::parser::extset::MarkdownItExt;
use markdown_it::parser::inline::{InlineRule, InlineState};
use markdown_it::plugins::cmark::block::blockquote::BlockquoteScanner;
use markdown_it::plugins::cmark::inline::escape::EscapeScanner;
use markdown_it::{MarkdownIt, Node};

use crate::adapters::MathEngineAdapter;
use crate::html::typeset;
use crate::nodes::{LineSpan, MathBlock, MathInline};
use crate::parser::options::MathOptions;
use crate::strings;

const DOLLAR: u8 = b'$';
const BLOCK_DELIMITER: &str = "$$";

/// Whether the `$` at `pos` in `src` can open or close inline math.
///
/// Bytes outside `src` read as a space.  The dollar is rejected when it is
/// preceded by a backslash, when it is the second half of an unescaped `$$`,
/// or when it is followed by another dollar.  Only one byte of look-behind is
/// used for the backslash, so `\\$` is rejected just like `\$`.
///
/// ```
/// use dollarmath::is_valid_delim;
///
/// assert!(is_valid_delim(b"$x$", 0));
/// assert!(!is_valid_delim(b"\\$x", 1));
/// assert!(!is_valid_delim(b"$$x", 0));
/// assert!(!is_valid_delim(b"$$x", 1));
/// assert!(is_valid_delim(b"\\$$x", 2));
/// ```
pub fn is_valid_delim(src: &[u8], pos: usize) -> bool {
    if src.get(pos) != Some(&DOLLAR) {
        return false;
    }

    let byte_at = |ix: Option<usize>| ix.and_then(|ix| src.get(ix)).copied().unwrap_or(b' ');
    let second_last = byte_at(pos.checked_sub(2));
    let last = byte_at(pos.checked_sub(1));
    let next = byte_at(Some(pos + 1));

    !(last == b'\\' || (last == DOLLAR && second_last != b'\\') || next == DOLLAR)
}

/// The inline rule: `$...$`.
///
/// A dollar that is not a valid delimiter is left to the host, which emits
/// it as text.  If no closing delimiter is found before the end of the
/// segment the rule declines.  `check` never matches, so an enclosing
/// `skip_token` scan steps over a `$` one character at a time.
#[derive(Debug)]
pub struct MathInlineScanner;

impl InlineRule for MathInlineScanner {
    const MARKER: char = '$';

    fn check(_: &mut InlineState) -> Option<usize> {
        None
    }

    fn run(state: &mut InlineState) -> Option<(Node, usize)> {
        let start = state.pos;
        if !is_valid_delim(state.src.as_bytes(), start) {
            return None;
        }

        let md = state.md;
        state.pos += 1;

        let mut found = false;
        while state.pos < state.pos_max {
            if is_valid_delim(state.src.as_bytes(), state.pos) {
                found = true;
                break;
            }
            md.inline.skip_token(state);
        }

        let close = state.pos;
        state.pos = start;
        if !found {
            return None;
        }

        let node = Node::new(MathInline {
            content: state.src[start + 1..close].trim().to_string(),
            markup: "$",
            rendered: None,
        });
        Some((node, close + 1 - start))
    }
}

/// How the scan for a display math block ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEnd {
    /// The line `line` ended with `$$`.  For a single-line block this is the
    /// opening line.
    Closed {
        /// The line holding the closing delimiter.
        line: usize,
    },

    /// No closing delimiter before a de-indented line or the end of the
    /// container.  `line` is the first line not consumed.
    Unterminated {
        /// The first line after the block.
        line: usize,
    },
}

impl BlockEnd {
    /// The first line after the block.
    pub fn next_line(self) -> usize {
        match self {
            BlockEnd::Closed { line } => line + 1,
            BlockEnd::Unterminated { line } => line,
        }
    }

    /// One past the last line of the block's interior.
    fn interior_end(self) -> usize {
        match self {
            BlockEnd::Closed { line } | BlockEnd::Unterminated { line } => line,
        }
    }
}

fn opens_block(state: &BlockState, line: usize) -> bool {
    state.get_line(line).starts_with(BLOCK_DELIMITER)
}

/// Find the line closing the block opened on `start`, and the text on that
/// line before its final `$$`.
fn scan_block_end<'s>(state: &'s BlockState, start: usize) -> (BlockEnd, &'s str) {
    let mut next = start + 1;

    while next < state.line_max {
        if !state.is_empty(next) && state.line_indent(next) < 0 {
            // Content left of the container's indent ends the container.
            return (BlockEnd::Unterminated { line: next }, "");
        }

        let content = state.get_line(next).trim_end();
        if let Some(last_line) = content.strip_suffix(BLOCK_DELIMITER) {
            return (BlockEnd::Closed { line: next }, last_line);
        }

        next += 1;
    }

    (BlockEnd::Unterminated { line: state.line_max }, "")
}

/// The block rule: `$$...$$`, on one line or several.
///
/// Applies when the current line begins, after its indentation, with `$$`.
/// A block with no closing line still produces a node, ending at the first
/// de-indented line or the end of the container.
///
/// The first and last partial lines are trimmed.  Interior lines lose the
/// opening line's indentation and then whatever indentation they all share,
/// so relative indentation survives; the joined content is trimmed.
#[derive(Debug)]
pub struct MathBlockScanner;

impl BlockRule for MathBlockScanner {
    fn check(state: &mut BlockState) -> Option<()> {
        if opens_block(state, state.line) {
            Some(())
        } else {
            None
        }
    }

    fn run(state: &mut BlockState) -> Option<(Node, usize)> {
        let start = state.line;
        if !opens_block(state, start) {
            return None;
        }

        let mut first_line = &state.get_line(start)[BLOCK_DELIMITER.len()..];
        let (finish, last_line) = match first_line.trim().strip_suffix(BLOCK_DELIMITER) {
            Some(inner) => {
                first_line = inner;
                (BlockEnd::Closed { line: start }, "")
            }
            None => scan_block_end(state, start),
        };

        let mut content = String::new();
        let first_line = first_line.trim();
        if !first_line.is_empty() {
            content.push_str(first_line);
            content.push('\n');
        }
        let indent = state.line_indent(start).max(0) as usize + state.blk_indent;
        let (interior, _) = state.get_lines(start + 1, finish.interior_end(), indent, true);
        content.push_str(&strings::dedent(&interior));
        let last_line = last_line.trim();
        if !last_line.is_empty() {
            content.push_str(last_line);
        }

        let end = finish.next_line();
        let node = Node::new(MathBlock {
            content: content.trim().to_string(),
            markup: BLOCK_DELIMITER,
            map: LineSpan { start, end },
            rendered: None,
        });
        Some((node, end - start))
    }
}

/// Register `$...$` on `md`, immediately before the escape rule.
pub fn add_inline(md: &mut MarkdownIt) {
    md.inline
        .add_rule::<MathInlineScanner>()
        .before::<EscapeScanner>();
}

/// Register `$$...$$` on `md`, immediately after the block quote rule.  The
/// rule may interrupt paragraphs, block quotes and lists.
pub fn add_block(md: &mut MarkdownIt) {
    md.block
        .add_rule::<MathBlockScanner>()
        .after::<BlockquoteScanner>();
}

/// Register both math rules on `md`.  Math is parsed but not typeset; see
/// [`math_plugin`] or [`typeset`].
pub fn add(md: &mut MarkdownIt) {
    add_inline(md);
    add_block(md);
}

/// The engine and options [`math_plugin`] stores on a parser.
pub struct MathConfig {
    /// Options passed to the engine with every expression.
    pub options: MathOptions,

    /// The typesetting engine.
    pub engine: Arc<dyn MathEngineAdapter + Send + Sync>,
}

impl Debug for MathConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MathConfig")
            .field("options", &self.options)
            .field("engine", &"impl MathEngineAdapter")
            .finish()
    }
}

impl MarkdownItExt for MathConfig {}

/// Typesets every math node once the inline pass has run.
struct TypesetRule;

impl CoreRule for TypesetRule {
    fn run(root: &mut Node, md: &MarkdownIt) {
        if let Some(config) = md.ext.get::<MathConfig>() {
            typeset(root, &*config.engine, &config.options);
        }
    }
}

/// Register dollar math on `md`, typesetting through `engine`.
///
/// Call after the CommonMark rules are added, so the escape and block quote
/// rules the math rules are ordered against exist.
///
/// ```
/// use std::sync::Arc;
/// use dollarmath::{math_plugin, MathOptions};
/// use dollarmath::plugins::markup::MarkupAdapter;
///
/// let mut md = markdown_it::MarkdownIt::new();
/// markdown_it::plugins::cmark::add(&mut md);
/// math_plugin(&mut md, MathOptions::default(), Arc::new(MarkupAdapter::default()));
///
/// assert_eq!(
///     md.parse("$$ x^2 $$").render(),
///     "<span data-math-style=\"display\">x^2</span>\n"
/// );
/// ```
pub fn math_plugin(
    md: &mut MarkdownIt,
    options: MathOptions,
    engine: Arc<dyn MathEngineAdapter + Send + Sync>,
) {
    add(md);
    md.ext.insert(MathConfig { options, engine });
    md.add_rule::<TypesetRule>();
}
