//! Configuration for parsing and typesetting.

#[cfg(feature = "bon")]
use bon::Builder;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};

use crate::adapters::MathEngineAdapter;

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Select which math syntaxes are recognized.
    #[cfg_attr(feature = "bon", builder(default))]
    pub extension: Extension,

    /// Configure the typesetting engine.
    #[cfg_attr(feature = "bon", builder(default))]
    pub math: MathOptions,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options to select extensions.  Both are on by default.
pub struct Extension {
    /// Recognize `$...$` inside paragraphs.
    ///
    /// ```rust
    /// # use dollarmath::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("$x$\n", &options),
    ///            "<p><span data-math-style=\"inline\">x</span></p>\n");
    ///
    /// options.extension.math_inline = false;
    /// assert_eq!(markdown_to_html("$x$\n", &options),
    ///            "<p>$x$</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub math_inline: bool,

    /// Recognize `$$...$$` blocks.
    ///
    /// ```rust
    /// # use dollarmath::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("$$\nx\n$$\n", &options),
    ///            "<span data-math-style=\"display\">x</span>\n");
    ///
    /// options.extension.math_block = false;
    /// options.extension.math_inline = false;
    /// assert_eq!(markdown_to_html("$$\nx\n$$\n", &options),
    ///            "<p>$$\nx\n$$</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub math_block: bool,
}

impl Default for Extension {
    fn default() -> Self {
        Extension {
            math_inline: true,
            math_block: true,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options handed to the typesetting engine with every expression.
///
/// The display mode is not part of these; the engine receives it as a
/// separate argument, so one `MathOptions` serves both inline and display
/// math.
pub struct MathOptions {
    /// Report typesetting failures through the `log` facade.  Rendering
    /// falls back to the literal expression either way.
    #[cfg_attr(feature = "bon", builder(default))]
    pub throw_on_error: bool,

    /// Engine-specific settings, passed through untouched.
    #[cfg_attr(feature = "bon", builder(default))]
    pub settings: BTreeMap<String, String>,
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella plugins struct.
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: RenderPlugins<'p>,
}

#[derive(Default, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Plugins for alternative rendering.
pub struct RenderPlugins<'p> {
    /// The engine math is typeset with.  The built-in
    /// [`MarkupAdapter`](crate::plugins::markup::MarkupAdapter) is used when
    /// unset.
    ///
    /// ```rust
    /// # use dollarmath::{markdown_to_html_with_plugins, Options, Plugins};
    /// # use dollarmath::{DisplayMode, MathEngineAdapter, MathOptions, TypesetError};
    /// struct Upper;
    ///
    /// impl MathEngineAdapter for Upper {
    ///     fn render(&self, latex: &str, _mode: DisplayMode, _options: &MathOptions)
    ///         -> Result<String, TypesetError> {
    ///         Ok(latex.to_uppercase())
    ///     }
    /// }
    ///
    /// let mut plugins = Plugins::default();
    /// plugins.render.math_engine = Some(&Upper);
    ///
    /// assert_eq!(markdown_to_html_with_plugins("$ab$ and $$cd$$", &Options::default(), &plugins),
    ///            "<p>AB and $$cd$$</p>\n");
    /// ```
    pub math_engine: Option<&'p dyn MathEngineAdapter>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPlugins")
            .field(
                "math_engine",
                &self.math_engine.map(|_| "impl MathEngineAdapter"),
            )
            .finish()
    }
}
