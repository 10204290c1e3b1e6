use super::*;
use markdown_it::MarkdownIt;
use std::sync::Arc;

#[test]
fn exercise_full_api() {
    let default_options = Options::default();
    let default_plugins = Plugins::default();

    // Use every member of the exposed API without any defaults.
    // Not looking for specific outputs, just want to know if the API changes shape.

    let _: Node = parse_document("$x$", &default_options);
    let _: String = markdown_to_html("$x$", &default_options);
    let _: String = markdown_to_html_with_plugins("$x$", &default_options, &default_plugins);

    let extension = Extension {
        math_inline: true,
        math_block: true,
    };
    let _: MarkdownIt = create_parser(&extension);

    let mut md: MarkdownIt = MarkdownIt::new();
    markdown_it::plugins::cmark::add(&mut md);
    add_inline(&mut md);
    add_block(&mut md);
    let mut md: MarkdownIt = MarkdownIt::new();
    markdown_it::plugins::cmark::add(&mut md);
    let engine: Arc<dyn MathEngineAdapter + Send + Sync> =
        Arc::new(plugins::markup::MarkupAdapter::new("span"));
    math_plugin(&mut md, MathOptions::default(), engine.clone());
    let _: Option<&MathConfig> = md.ext.get::<MathConfig>();

    let mut root: Node = md.parse("$x$");
    typeset(&mut root, &*engine, &MathOptions::default());
    let _: String = root.render();
    let _: String = render_inline(&*engine, "x", &MathOptions::default());
    let _: String = render_block(&*engine, "x", &MathOptions::default());

    let _: bool = is_valid_delim(b"$", 0);
    let _: usize = BlockEnd::Closed { line: 0 }.next_line();
    let _ = (MathInlineScanner, MathBlockScanner);

    let math = MathOptions {
        throw_on_error: false,
        settings: Default::default(),
    };
    let _ = Options { extension, math };

    let adapter = plugins::markup::MarkupAdapter::default();
    let plugins = Plugins {
        render: RenderPlugins {
            math_engine: Some(&adapter),
        },
    };
    let _ = plugins;

    let _ = MathInline {
        content: String::new(),
        markup: "$",
        rendered: None,
    };
    let _ = MathBlock {
        content: String::new(),
        markup: "$$",
        map: LineSpan::from((0, 1)),
        rendered: None,
    };
    let _: usize = LineSpan::from((0, 1)).len();
    let _: bool = DisplayMode::Display.is_display();
    let _: Result<String, TypesetError> =
        adapter.render("x", DisplayMode::Inline, &MathOptions::default());
}

#[test]
fn extensions_default_on() {
    let options = Options::default();
    assert!(options.extension.math_inline);
    assert!(options.extension.math_block);
    assert!(!options.math.throw_on_error);
    assert!(options.math.settings.is_empty());
}

#[cfg(feature = "bon")]
#[test]
fn builders() {
    let options = Options::builder()
        .extension(Extension::builder().math_inline(false).build())
        .math(MathOptions::builder().throw_on_error(true).build())
        .build();
    assert!(!options.extension.math_inline);
    assert!(options.extension.math_block);
    assert!(options.math.throw_on_error);

    html_opts_w("$x$ $$y$$", "<p>$x$ $$y$$</p>\n", &options);

    let engine = FailingAdapter;
    let plugins = Plugins::builder()
        .render(RenderPlugins::builder().math_engine(&engine).build())
        .build();
    html_plugins("$$\\nope$$", "\\nope\n", &plugins);
}

#[test]
fn rules_are_ordered_for_commonmark() {
    // Ahead of the escape rule, `\$` must still be an escape.
    let mut md = MarkdownIt::new();
    markdown_it::plugins::cmark::add(&mut md);
    add(&mut md);
    assert_eq!(md.parse("\\$x$").render(), "<p>$x$</p>\n");

    // Ahead of paragraphs, `$$` interrupts one.
    assert_eq!(md.parse("a\n$$\nb\n$$").render(), "<p>a</p>\nb\n");
}

#[test]
fn debug_output() {
    let config = MathConfig {
        options: MathOptions::default(),
        engine: Arc::new(plugins::markup::MarkupAdapter::default()),
    };
    let debug = format!("{:?}", config);
    assert!(debug.contains("MathConfig"));
    assert!(debug.contains("impl MathEngineAdapter"));

    let engine = plugins::markup::MarkupAdapter::default();
    let plugins = Plugins {
        render: RenderPlugins {
            math_engine: Some(&engine),
        },
    };
    assert!(format!("{:?}", plugins).contains("impl MathEngineAdapter"));

    assert_eq!(LineSpan::from((2, 5)).to_string(), "2-5");
}
