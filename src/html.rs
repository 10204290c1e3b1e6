//! Typesetting for math nodes.
//!
//! Both entry points absorb engine failures: the literal expression is
//! returned in place of the engine's output, so a malformed expression never
//! aborts rendering.

use markdown_it::Node;

use crate::adapters::{DisplayMode, MathEngineAdapter};
use crate::nodes::{MathBlock, MathInline};
use crate::parser::options::MathOptions;

/// Typeset `content` as inline math.
pub fn render_inline(
    engine: &dyn MathEngineAdapter,
    content: &str,
    options: &MathOptions,
) -> String {
    typeset_expression(engine, content, DisplayMode::Inline, options)
}

/// Typeset `content` as display math, followed by a newline.
pub fn render_block(
    engine: &dyn MathEngineAdapter,
    content: &str,
    options: &MathOptions,
) -> String {
    let mut out = typeset_expression(engine, content, DisplayMode::Display, options);
    out.push('\n');
    out
}

/// Typeset every math node under `root`, in document order.  The output
/// replaces the literal expression when the tree is rendered.
///
/// ```
/// use dollarmath::{parse_document, typeset, Options};
/// use dollarmath::plugins::markup::MarkupAdapter;
///
/// let mut root = parse_document("$a<b$", &Options::default());
/// assert_eq!(root.render(), "<p>a&lt;b</p>\n");
///
/// typeset(&mut root, &MarkupAdapter::default(), &Default::default());
/// assert_eq!(
///     root.render(),
///     "<p><span data-math-style=\"inline\">a&lt;b</span></p>\n"
/// );
/// ```
pub fn typeset(root: &mut Node, engine: &dyn MathEngineAdapter, options: &MathOptions) {
    if let Some(math) = root.cast_mut::<MathInline>() {
        math.rendered = Some(render_inline(engine, &math.content, options));
    } else if let Some(math) = root.cast_mut::<MathBlock>() {
        math.rendered = Some(render_block(engine, &math.content, options));
    }

    for child in root.children.iter_mut() {
        typeset(child, engine, options);
    }
}

fn typeset_expression(
    engine: &dyn MathEngineAdapter,
    content: &str,
    mode: DisplayMode,
    options: &MathOptions,
) -> String {
    match engine.render(content, mode, options) {
        Ok(html) => html,
        Err(err) => {
            if options.throw_on_error {
                log::warn!("cannot typeset {} math {:?}: {}", mode, content, err);
            } else {
                log::debug!("falling back to source for {:?}: {}", content, err);
            }
            content.to_string()
        }
    }
}
