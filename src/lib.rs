//! Dollar-delimited math for the [`markdown_it`] Markdown parser.
//!
//! Inline math is written `$...$`, display math `$$...$$` on lines of its
//! own.  The scanners register themselves as markdown-it rules, producing
//! [`MathInline`] and [`MathBlock`] nodes whose literal expression is handed
//! to a [`MathEngineAdapter`] for typesetting.
//!
//! ```
//! use dollarmath::{markdown_to_html, Options};
//!
//! assert_eq!(
//!     markdown_to_html("Euler: $e^{i\\pi} + 1 = 0$\n", &Options::default()),
//!     "<p>Euler: <span data-math-style=\"inline\">e^{i\\pi} + 1 = 0</span></p>\n"
//! );
//! ```
//!
//! A malformed expression is never fatal; the literal source is shown instead:
//!
//! ```
//! use dollarmath::{markdown_to_html, Options};
//!
//! assert_eq!(
//!     markdown_to_html("$\\frac{1}{$", &Options::default()),
//!     "<p>\\frac{1}{</p>\n"
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, missing_debug_implementations)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]
#![allow(clippy::new_without_default)]

pub mod adapters;
pub mod html;
pub mod nodes;
mod parser;
pub mod plugins;
mod strings;

pub use adapters::{DisplayMode, MathEngineAdapter, TypesetError};
pub use html::{render_block, render_inline, typeset};
pub use markdown_it;
pub use nodes::{LineSpan, MathBlock, MathInline};
pub use parser::create_parser;
pub use parser::math::{
    add, add_block, add_inline, is_valid_delim, math_plugin, BlockEnd, MathBlockScanner,
    MathConfig, MathInlineScanner,
};
pub use parser::options::{self, Extension, MathOptions, Options, Plugins, RenderPlugins};

use markdown_it::Node;
use plugins::markup::MarkupAdapter;

/// Parse a Markdown document to a markdown-it syntax tree, with the math
/// rules enabled according to `options`.  Math is not typeset; see
/// [`typeset`].
///
/// ```
/// use dollarmath::{parse_document, MathBlock, Options};
///
/// let root = parse_document("$$\n x^2 \n$$\n", &Options::default());
/// let math = root.children[0].cast::<MathBlock>().unwrap();
/// assert_eq!(math.content, "x^2");
/// ```
pub fn parse_document(md: &str, options: &Options) -> Node {
    create_parser(&options.extension).parse(md)
}

/// Render Markdown to HTML, typesetting math with the built-in
/// [`MarkupAdapter`].
///
/// See the documentation of the crate root for an example.
pub fn markdown_to_html(md: &str, options: &Options) -> String {
    markdown_to_html_with_plugins(md, options, &Plugins::default())
}

/// Render Markdown to HTML using the typesetting engine from `plugins`, if
/// one is set.
pub fn markdown_to_html_with_plugins(md: &str, options: &Options, plugins: &Plugins) -> String {
    let fallback = MarkupAdapter::default();
    let engine: &dyn MathEngineAdapter = match plugins.render.math_engine {
        Some(engine) => engine,
        None => &fallback,
    };

    let mut root = parse_document(md, options);
    typeset(&mut root, engine, &options.math);
    root.render()
}
