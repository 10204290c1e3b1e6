pub mod math;
pub mod options;

use markdown_it::plugins::cmark;
use markdown_it::MarkdownIt;

use self::options::Extension;

/// A CommonMark parser with the math rules `extension` selects.
pub fn create_parser(extension: &Extension) -> MarkdownIt {
    let mut md = MarkdownIt::new();
    cmark::add(&mut md);
    if extension.math_inline {
        math::add_inline(&mut md);
    }
    if extension.math_block {
        math::add_block(&mut md);
    }
    md
}
