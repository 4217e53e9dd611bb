// Command-line interface for adf
//
// This binary converts Atlassian Document Format (ADF) content, either a bare ADF document or a
// whole issue export, into readable reports.
//
// The core capabilities use the adf-babel crate. This crate is an interface for that library:
// it reads files, loads configuration and writes results, the library does the rest.
//
// Converting:
//
// The conversion needs a to and from pair. The from is detected from the file name and content
// (`*.adf.json` is ADF, a JSON object with `fields` is an issue export), while being overwrittable
// by an explicit --from flag.
// Usage:
//  adf <input> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  adf convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  adf inspect <path> [<transform>]      - Execute a transform (defaults to "markup-treeviz")
//  adf generate-css                      - Print the baseline HTML stylesheet
//  adf --list-formats                    - List formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Parameters naming a configuration knob update the
// configuration; the rest are passed to the format/transform.
// Example:
//  adf OPS-42.json --to html --extra-panel-background eeeeee --extra-css-path report.css

mod transforms;

use adf_babel::formats::{
    detect_input_format, get_default_css, AdfFormat, HtmlFormat, IssueFormat, JsonFormat,
    TagFormat, TextFormat, TreevizFormat,
};
use adf_babel::FormatRegistry;
use adf_config::{AdfConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following argument that is not a flag is the value
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("adf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting ADF documents and issue exports")
        .long_about(
            "adf turns Atlassian Document Format content into readable reports.\n\n\
            Commands:\n  \
            - convert: Render an ADF document or issue export (text, HTML, JSON, ...)\n  \
            - inspect: View the markup tree or the converted blocks\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Logging:\n  \
            Set RUST_LOG=debug to see which nodes and marks were degraded.\n\n\
            Examples:\n  \
            adf OPS-42.json --to text                # Issue report as plain text (stdout)\n  \
            adf OPS-42.json --to html -o ops-42.html # Issue report as an HTML page\n  \
            adf inspect body.adf.json                # Markup tree visualization",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an adf.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the markup tree or the converted blocks")
                .long_about(
                    "View the structure of a document at different processing stages.\n\n\
                    Transforms (stage-format):\n  \
                    - markup-treeviz:  ADF markup as tree visualization (default)\n  \
                    - plain-text:      Text content of the markup\n  \
                    - blocks-json:     Converted blocks as JSON\n  \
                    - blocks-tag:      Converted blocks as XML-like tags\n  \
                    - blocks-treeviz:  Converted blocks as tree visualization\n\n\
                    Extra Parameters:\n  \
                    --extra-runs       List styled runs in blocks-tag and blocks-treeviz\n  \
                    --extra-compact    Single-line blocks-json\n\n\
                    Examples:\n  \
                    adf inspect body.adf.json                        # Markup tree (default)\n  \
                    adf inspect OPS-42.json blocks-treeviz --extra-runs",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the ADF document or issue export")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'markup-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (adf or issue, detected if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document (default command)")
                .long_about(
                    "Convert an ADF document or issue export.\n\n\
                    Source formats:\n  \
                    - adf:     A bare ADF document (.adf.json)\n  \
                    - issue:   An issue export, rendered as a ticket report\n\n\
                    Target formats:\n  \
                    - text:    Plain text (.txt)\n  \
                    - html:    HTML page with embedded CSS (.html)\n  \
                    - json:    Converted blocks as JSON\n  \
                    - tag:     XML-like tag format\n  \
                    - treeviz: Tree visualization\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    adf convert OPS-42.json --to text            # Report as text (stdout)\n  \
                    adf convert body.adf.json --to html -o b.html\n  \
                    adf OPS-42.json --to json                    # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (detected from the file if not specified)")
                        .long_help(
                            "Source format to convert from: adf or issue.\n\n\
                            If not specified, files named *.adf.json are ADF documents,\n\
                            JSON objects with a 'fields' member are issue exports and\n\
                            anything else is read as ADF.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: text, html, json, tag, treeviz\n\
                            Use the format name, not the file extension.",
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the default CSS used for HTML export")
                .long_about(
                    "Outputs the baseline CSS embedded in every HTML export.\n\n\
                    Use this as a starting point for custom styling. Save it, edit it,\n\
                    then pass it via --extra-css-path (or convert.html.custom_css in\n\
                    adf.toml) to extend the default styles.\n\n\
                    Examples:\n  \
                    adf generate-css                    # Print CSS to stdout\n  \
                    adf generate-css > custom.css       # Save to file for editing",
                ),
        )
}

fn main() {
    env_logger::init();

    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that looks like a file means an implied convert
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "generate-css"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                eprintln!("Error: missing input path");
                std::process::exit(1);
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("markup-treeviz");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            handle_inspect_command(path, transform, from, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let (Some(input), Some(to)) = (
                sub_matches.get_one::<String>("input"),
                sub_matches.get_one::<String>("to"),
            ) else {
                eprintln!("Error: convert needs an input path and --to");
                std::process::exit(1);
            };
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &extra_params, &config);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Read an input file, exiting on failure.
fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Explicit `--from`, or the format detected from the file.
fn resolve_input_format(path: &str, source: &str, from: Option<&str>) -> String {
    match from {
        Some(explicit) => explicit.to_string(),
        None => {
            let detected = detect_input_format(path, source);
            log::debug!("detected input format '{detected}' for '{path}'");
            detected.to_string()
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    from: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &AdfConfig,
) {
    let source = read_input(path);
    let input_format = resolve_input_format(path, &source, from);
    let registry = build_registry(config);

    let output =
        transforms::execute_transform(&source, &input_format, transform, &registry, extra_params)
            .unwrap_or_else(|e| {
                eprintln!("Execution error: {e}");
                std::process::exit(1);
            });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: Option<&str>,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &AdfConfig,
) {
    let registry = build_registry(config);

    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);
    let from = resolve_input_format(input, &source, from);
    if let Err(e) = registry.get(&from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    log::debug!("converting '{input}' from {from} to {to}");

    let doc = registry.parse(&source, &from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    // Serialize (format-specific parameters allowed via --extra-*)
    let mut format_options = if to == "html" {
        html_params_from_config(config)
    } else {
        HashMap::new()
    };
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }
    let result = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", get_default_css());
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &AdfConfig) {
    let registry = build_registry(config);

    println!("Input formats:");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            if format.supports_parsing() {
                println!("  {name:<8} {}", format.description());
            }
        }
    }

    println!("\nOutput formats:");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            if format.supports_serialization() {
                println!("  {name:<8} {}", format.description());
            }
        }
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> AdfConfig {
    let loader = Loader::new().with_optional_file("adf.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Registry with every built-in format, configured from `config`.
fn build_registry(config: &AdfConfig) -> FormatRegistry {
    let transduce = (&config.transduce).into();
    let mut registry = FormatRegistry::new();
    registry.register(AdfFormat::new(transduce));
    registry.register(IssueFormat::new(
        (&config.report).into(),
        (&config.transduce).into(),
    ));
    registry.register(JsonFormat);
    registry.register(TextFormat::new((&config.convert.text).into()));
    registry.register(HtmlFormat::new((&config.convert.html).into()));
    registry.register(TagFormat);
    registry.register(TreevizFormat);
    registry
}

fn html_params_from_config(config: &AdfConfig) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if let Some(css_path) = &config.convert.html.custom_css {
        params.insert("css-path".to_string(), css_path.clone());
    }
    params
}

fn apply_config_overrides(config: &mut AdfConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["max-depth"]) {
        config.transduce.max_depth = parse_usize_arg("max-depth", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["max-list-level"]) {
        config.transduce.max_list_level = parse_usize_arg("max-list-level", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["references-field"]) {
        config.report.references_field = raw;
    }
    if let Some(raw) = take_override(extra_params, &["environment-field"]) {
        config.report.environment_field = raw;
    }
    if let Some(raw) = take_override(extra_params, &["timestamp-format"]) {
        config.report.timestamp_format = raw;
    }

    if let Some(raw) = take_override(extra_params, &["panel-background"]) {
        config.convert.html.panel_background = raw;
    }
    if let Some(raw) = take_override(extra_params, &["panel-border-color"]) {
        config.convert.html.panel_border_color = raw;
    }
    if let Some(raw) = take_override(extra_params, &["panel-border-width"]) {
        config.convert.html.panel_border_width = raw;
    }

    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.convert.html.custom_css = Some(path);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_usize_arg(flag: &str, raw: &str) -> usize {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid number '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
