// Command-line interface for anf
//
// This binary converts Apple News Format articles (JSON) into HTML documents and
// stylesheets. All of the work is done by anf-compiler; this crate reads files,
// layers configuration and writes the results.
//
// Usage:
//  anf <article.json> [-o <file>] [--css <file>]          - Convert to HTML (default)
//  anf convert <article.json> [-o <file>] [--css <file>]  - Same as above (explicit)
//  anf css <article.json> [-o <file>]                     - Print the article stylesheet
//  anf roles                                              - Show the effective role table
//
// Configuration:
//
// anf.toml in the working directory is layered over the built-in defaults, and
// --config <PATH> adds one more (required) layer on top. --debug and --embed-styles
// override the corresponding [compiler] keys.

use anf_compiler::{ArticleDocument, Compiler, CompilerOptions};
use anf_config::{AnfConfig, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "css", "roles", "help"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Path to the article JSON file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg(help: &'static str) -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help(help)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("anf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Apple News Format articles to HTML")
        .long_about(
            "anf converts Apple News Format article JSON into an HTML document and a\n\
            matching CSS stylesheet.\n\n\
            Components become elements classed by their role. The tag for each role\n\
            comes from the [[elements]] table in anf.toml (see `anf roles`).\n\n\
            Examples:\n  \
            anf article.json                       # HTML to stdout\n  \
            anf article.json -o article.html       # HTML to a file\n  \
            anf article.json --css article.css     # Also write the stylesheet\n  \
            anf css article.json                   # Stylesheet to stdout",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an anf.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Log conversion progress to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an article to HTML (default command)")
                .arg(input_arg())
                .arg(output_arg("Output file path (defaults to stdout)"))
                .arg(
                    Arg::new("css")
                        .long("css")
                        .value_name("PATH")
                        .help("Also write the article stylesheet to this file")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("embed-styles")
                        .long("embed-styles")
                        .help("Embed the stylesheet as a <style> element in <head>")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("css")
                .about("Output the stylesheet generated from the article styles")
                .arg(input_arg())
                .arg(output_arg("Output file path (defaults to stdout)")),
        )
        .subcommand(
            Command::new("roles")
                .about("List the role table used to pick element tags"),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A bare path as first argument means "convert"
            if args.len() > 1
                && !args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let debug_flag = matches.get_flag("debug");
    init_logging(debug_flag);

    let config = load_cli_config(&matches);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("css", sub_matches)) => handle_css_command(sub_matches, &config),
        Some(("roles", _)) => handle_roles_command(&config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "anf=debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn load_cli_config(matches: &ArgMatches) -> AnfConfig {
    let loader = Loader::new().with_optional_file("anf.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    let loader = if matches.get_flag("debug") {
        loader.set_override("compiler.debug", true)
    } else {
        Ok(loader)
    };

    loader.and_then(Loader::build).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn read_article(path: &str) -> ArticleDocument {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    ArticleDocument::from_json(&source).unwrap_or_else(|e| {
        eprintln!("Error in '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_or_print(output: Option<&String>, content: &str) {
    match output {
        Some(path) => fs::write(path, content).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{content}"),
    }
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &AnfConfig) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");

    let mut options = CompilerOptions::from(config);
    if matches.get_flag("embed-styles") {
        options = options.with_embedded_styles();
    }

    log::debug!(
        "converting {input} with {} role mappings",
        options.mappings.iter().count()
    );
    let mut compiler = Compiler::with_article(read_article(input), options);
    if let Err(e) = compiler.process() {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    }

    let html = compiler.html().unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });
    write_or_print(matches.get_one::<String>("output"), &html);

    if let Some(css_path) = matches.get_one::<String>("css") {
        let css = compiler.css().unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });
        write_or_print(Some(css_path), &css.to_css());
    }
}

/// Handle the css command
fn handle_css_command(matches: &ArgMatches, config: &AnfConfig) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");

    let compiler = Compiler::with_article(read_article(input), CompilerOptions::from(config));
    let css = compiler.css().unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });
    write_or_print(matches.get_one::<String>("output"), &css.to_css());
}

/// Handle the roles command
fn handle_roles_command(config: &AnfConfig) {
    let mappings = config.mappings();
    for mapping in mappings.iter() {
        if mapping.roles.is_empty() {
            println!("{}", mapping.tag);
        } else {
            println!("{}: {}", mapping.tag, mapping.roles.join(", "));
        }
    }

    for role in mappings.conflicts() {
        eprintln!(
            "Warning: role '{role}' is listed more than once; '{}' wins",
            mappings.resolve(role)
        );
    }
}
