//! Server-side typesetting with KaTeX.

use std::collections::HashMap;

use katex::{Opts, OutputType};

use crate::adapters::{DisplayMode, MathEngineAdapter, TypesetError};
use crate::parser::options::MathOptions;

#[derive(Debug, Default, Copy, Clone)]
/// Typesets math with KaTeX.
///
/// The display mode comes from the delimiters.  These
/// [`settings`](MathOptions::settings) are passed through to KaTeX:
///
/// | Setting | Value |
/// |---|---|
/// | `output` | `html`, `mathml` or `htmlAndMathml` |
/// | `leqno`, `fleqn`, `trust` | `true` or `false` |
/// | `errorColor` | a CSS colour |
/// | `minRuleThickness`, `maxSize` | a number of ems |
/// | `maxExpand` | an integer |
///
/// A setting whose key starts with a backslash defines a macro, e.g.
/// `\RR` = `\mathbb{R}`.  Other keys are ignored.
///
/// KaTeX is always asked to report parse errors rather than render them in
/// `errorColor`, so a malformed expression falls back to its source.
/// [`throw_on_error`](MathOptions::throw_on_error) decides whether that is
/// logged.
pub struct KatexAdapter;

impl KatexAdapter {
    /// Construct a new `KatexAdapter`.
    pub fn new() -> Self {
        KatexAdapter
    }
}

impl MathEngineAdapter for KatexAdapter {
    fn render(
        &self,
        latex: &str,
        mode: DisplayMode,
        options: &MathOptions,
    ) -> Result<String, TypesetError> {
        let opts = katex_opts(mode, options)?;
        katex::render_with_opts(latex, opts).map_err(|err| TypesetError::Engine(err.to_string()))
    }
}

fn katex_opts(mode: DisplayMode, options: &MathOptions) -> Result<Opts, TypesetError> {
    let mut builder = Opts::builder();
    builder.display_mode(mode.is_display()).throw_on_error(true);
    let mut macros = HashMap::new();

    for (key, value) in &options.settings {
        match key.as_str() {
            "output" => {
                builder.output_type(match value.as_str() {
                    "html" => OutputType::Html,
                    "mathml" => OutputType::Mathml,
                    "htmlAndMathml" => OutputType::HtmlAndMathml,
                    _ => return Err(invalid_setting(key, value)),
                });
            }
            "leqno" => {
                builder.leqno(parse_setting::<bool>(key, value)?);
            }
            "fleqn" => {
                builder.fleqn(parse_setting::<bool>(key, value)?);
            }
            "trust" => {
                builder.trust(parse_setting::<bool>(key, value)?);
            }
            "errorColor" => {
                builder.error_color(value.clone());
            }
            "minRuleThickness" => {
                builder.min_rule_thickness(parse_setting::<f64>(key, value)?);
            }
            "maxSize" => {
                builder.max_size(parse_setting::<f64>(key, value)?);
            }
            "maxExpand" => {
                builder.max_expand(parse_setting::<i32>(key, value)?);
            }
            _ if key.starts_with('\\') => {
                macros.insert(key.clone(), value.clone());
            }
            _ => log::debug!("ignoring unknown KaTeX setting {:?}", key),
        }
    }

    if !macros.is_empty() {
        builder.macros(macros);
    }
    builder
        .build()
        .map_err(|err| TypesetError::Engine(err.to_string()))
}

fn parse_setting<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, TypesetError> {
    value.parse().map_err(|_| invalid_setting(key, value))
}

fn invalid_setting(key: &str, value: &str) -> TypesetError {
    TypesetError::Engine(format!("invalid value {:?} for KaTeX setting {}", value, key))
}
