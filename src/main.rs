mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::sync::Arc;
use vaultfile::schemas::feature;
use vaultfile::{Context, EncodingCodec, Options, load_verbose_with};

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let text = match decode_input(&config) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    // Input is decoded to UTF-8 up front, so glyph fields are UTF-8 too.
    let ctx = Context { codec: Arc::new(EncodingCodec::utf8()) };
    let opts = Options { stop_on_error: !config.keep_going, ..Options::default() };
    let out = load_verbose_with(feature::schema(), &text, &ctx, &opts);
    debug_report::print_load(&config.source, &out, config.color);

    if !out.errors.is_empty() {
        std::process::exit(1);
    }
}

struct CliConfig {
    path: Option<String>,
    source: String,
    encoding: EncodingCodec,
    keep_going: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut path: Option<String> = None;
    let mut encoding = EncodingCodec::utf8();
    let mut keep_going = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("vaultfile {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-k" | "--keep-going" => keep_going = true,
            "--encoding" => {
                let value = args.next().ok_or_else(|| "error: --encoding expects a value".to_string())?;
                encoding = parse_encoding(&value)?;
            }
            "-" => set_path(&mut path, arg)?,
            "--" => {
                for rest in args.by_ref() {
                    set_path(&mut path, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--encoding=") => {
                encoding = parse_encoding(arg.trim_start_matches("--encoding="))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => set_path(&mut path, arg)?,
        }
    }

    let path = path.filter(|p| p != "-");
    let source = path.clone().unwrap_or_else(|| "<stdin>".to_string());
    Ok(CliConfig { path, source, encoding, keep_going, color })
}

fn set_path(path: &mut Option<String>, value: String) -> Result<(), String> {
    if path.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *path = Some(value);
    Ok(())
}

fn parse_encoding(label: &str) -> Result<EncodingCodec, String> {
    EncodingCodec::for_label(label).ok_or_else(|| format!("error: unknown --encoding '{label}'"))
}

fn decode_input(config: &CliConfig) -> Result<String, String> {
    let bytes = match &config.path {
        Some(path) => std::fs::read(path).map_err(|err| format!("error: failed to read {path}: {err}"))?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
            buffer
        }
    };

    let (text, _, had_errors) = config.encoding.encoding().decode(&bytes);
    if had_errors {
        log::warn!("{}: malformed {} replaced", config.source, config.encoding.encoding().name());
    }
    Ok(text.into_owned())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "vaultfile {version}

Load a terrain directive file and report what it defines.

Usage:
  vaultfile [OPTIONS] [FILE]

  Reads stdin when FILE is omitted or '-'.

Options:
  --encoding <label>         Character encoding of the input (e.g. utf-8,
                             windows-1252). Default: utf-8
  -k, --keep-going           Report failing lines and continue instead of
                             stopping at the first one.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Logging:
  RUST_LOG=debug             Record lifecycle and rejected lines.
  RUST_LOG=trace             Every directive with its coerced arguments.

Exit codes:
  0  Success.
  1  The file has failing lines.
  2  Invalid arguments or unreadable input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
