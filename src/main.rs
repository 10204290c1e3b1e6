//! The `dollarmath` binary.

use dollarmath::markdown_it::parser::inline::Text;
use dollarmath::markdown_it::Node;
use dollarmath::{
    markdown_to_html_with_plugins, parse_document, Extension, MathBlock, MathInline,
    MathOptions, Options, Plugins,
};

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

const EXIT_SUCCESS: i32 = 0;
const EXIT_PARSE_CONFIG: i32 = 2;
const EXIT_READ_INPUT: i32 = 3;

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(after_help = "\
By default, dollarmath will attempt to read command-line options from a config file specified by --config-file. \
This behaviour can be disabled by passing --config-file none. It is not an error if the file does not exist.")]
struct Cli {
    /// Markdown file to parse; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Report expressions the engine cannot typeset to standard error
    #[arg(long)]
    throw_on_error: bool,

    /// Pass an engine setting through to the typesetter
    #[arg(short, long = "setting", value_name = "KEY=VALUE", value_parser = parse_setting)]
    settings: Vec<(String, String)>,

    /// Do not recognize $...$ inline math
    #[arg(long)]
    no_inline_math: bool,

    /// Do not recognize $$...$$ block math
    #[arg(long)]
    no_block_math: bool,

    /// Typeset with KaTeX instead of marking math up for the browser
    #[cfg(feature = "katex")]
    #[arg(long)]
    katex: bool,

    /// Specify output format
    #[arg(short = 't', long = "to", value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Html,
    Tree,
}

fn parse_setting(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{}`", s)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();

    if cli.config_file != "none" {
        let config_file_path = &cli.config_file;
        if let Ok(config) = fs::read_to_string(config_file_path) {
            let mut args = std::env::args().collect::<Vec<_>>();
            let config_args = match shell_words::split(&config) {
                Ok(args) => args,
                Err(err) => {
                    eprintln!("failed to parse {}: {}", config_file_path, err);
                    process::exit(EXIT_PARSE_CONFIG);
                }
            };
            log::debug!("read {} arguments from {}", config_args.len(), config_file_path);
            args.splice(1..1, config_args);
            cli = Cli::parse_from(args);
        } else if *config_file_path != get_default_config_path() {
            eprintln!("failed to read config file {}", config_file_path);
            process::exit(EXIT_PARSE_CONFIG);
        }
    }

    let options = Options {
        extension: Extension {
            math_inline: !cli.no_inline_math,
            math_block: !cli.no_block_math,
        },
        math: MathOptions {
            throw_on_error: cli.throw_on_error,
            settings: cli.settings.iter().cloned().collect(),
        },
    };

    let mut input = String::with_capacity(2048);
    match cli.files {
        None => {
            io::stdin().read_to_string(&mut input)?;
        }
        Some(ref paths) => {
            for path in paths {
                match fs::read_to_string(path) {
                    Ok(contents) => input.push_str(&contents),
                    Err(err) => {
                        eprintln!("failed to read {}: {}", path.display(), err);
                        process::exit(EXIT_READ_INPUT);
                    }
                }
            }
        }
    }

    #[cfg(feature = "katex")]
    let katex = dollarmath::plugins::katex::KatexAdapter::new();
    #[allow(unused_mut)]
    let mut plugins = Plugins::default();
    #[cfg(feature = "katex")]
    if cli.katex {
        plugins.render.math_engine = Some(&katex);
    }

    let rendered = match cli.format {
        Format::Html => markdown_to_html_with_plugins(&input, &options, &plugins),
        Format::Tree => {
            let mut out = String::new();
            format_tree(&mut out, &parse_document(&input, &options), 0)?;
            out
        }
    };

    if let Some(output_filename) = cli.output {
        fs::write(output_filename, rendered.as_bytes())?;
    } else {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(rendered.as_bytes())?;
        lock.flush()?;
    }

    process::exit(EXIT_SUCCESS);
}

/// One node per line, children indented under their parent.
fn format_tree(out: &mut String, node: &Node, depth: usize) -> std::fmt::Result {
    let name = node.name();
    let name = name.rsplit("::").next().unwrap_or(name);
    write!(out, "{:indent$}{}", "", name, indent = depth * 2)?;

    if let Some(math) = node.cast::<MathBlock>() {
        write!(out, " [{}] {} {:?}", math.map, math.markup, math.content)?;
    } else if let Some(math) = node.cast::<MathInline>() {
        write!(out, " {} {:?}", math.markup, math.content)?;
    } else if let Some(text) = node.cast::<Text>() {
        write!(out, " {:?}", text.content)?;
    }
    out.push('\n');

    for child in &node.children {
        format_tree(out, child, depth + 1)?;
    }
    Ok(())
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> String {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("dollarmath") {
        if let Ok(path) = xdg_dirs.place_config_file("config") {
            if let Some(path_str) = path.to_str() {
                return path_str.into();
            }
        }
    }

    "none".into()
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> String {
    "none".into()
}
