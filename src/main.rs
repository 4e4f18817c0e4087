//! csv-sniff CLI - delimited-text dialect sniffer

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use csv_sniff::{Metadata, Sniffer, Type};
use tracing_subscriber::EnvFilter;

/// Sniff the dialect of delimited text files.
///
/// Detects the separator, indentation, whitespace handling, header presence
/// and column types of each file.
#[derive(Parser, Debug)]
#[command(name = "csv-sniff")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s) to sniff
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Declare whether the files have a header row instead of inferring it
    #[arg(long)]
    header: Option<bool>,

    /// Output format: text (default), json, or csv
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Show detailed field information and debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only output the detected separator
    #[arg(long)]
    separator_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut sniffer = Sniffer::new();
    if let Some(header) = args.header {
        sniffer.header(header);
    }

    let mut csv_out = match args.format {
        OutputFormat::Csv if !args.separator_only => Some(csv::Writer::from_writer(io::stdout())),
        _ => None,
    };
    let mut exit_code = ExitCode::SUCCESS;

    if let Some(writer) = csv_out.as_mut() {
        if let Err(e) = write_csv_header(writer) {
            eprintln!("Error writing output: {e}");
            return ExitCode::FAILURE;
        }
    }

    for file in &args.files {
        let result = sniffer
            .sniff_path(file)
            .map_err(Box::<dyn std::error::Error>::from)
            .and_then(|metadata| {
                if args.separator_only {
                    println!("{}", metadata.dialect.separator);
                    return Ok(());
                }
                match csv_out.as_mut() {
                    Some(writer) => write_csv_row(writer, file, &metadata),
                    None if args.format == OutputFormat::Json => {
                        println!("{}", json_output(file, &metadata, args.verbose));
                        Ok(())
                    }
                    None => {
                        print_text_output(file, &metadata, args.verbose);
                        Ok(())
                    }
                }
            });
        if let Err(e) = result {
            eprintln!("Error processing {}: {}", file.display(), e);
            exit_code = ExitCode::FAILURE;
        }
    }

    exit_code
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`, `debug` with `-v`).
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn type_names(metadata: &Metadata) -> Vec<String> {
    match metadata.types() {
        Some(types) => types.iter().map(Type::to_string).collect(),
        None => Vec::new(),
    }
}

fn print_text_output(path: &Path, metadata: &Metadata, verbose: bool) {
    let dialect = &metadata.dialect;
    println!("File: {}", path.display());
    println!("  Separator: {:?}", dialect.separator.as_char());
    println!("  Has header: {}", dialect.has_header);
    println!("  Indented: {}", dialect.indented);
    println!("  Whitespace significant: {}", dialect.whitespace_significant);
    println!("  Fields: {}", metadata.num_fields);
    match metadata.types() {
        Some(_) => println!("  Types: {}", type_names(metadata).join(", ")),
        None => println!("  Types: unknown (records differ in width)"),
    }

    if verbose {
        println!("  Field details:");
        let types = type_names(metadata);
        for (i, name) in metadata.fields.iter().enumerate() {
            let typ = types.get(i).map_or("?", String::as_str);
            println!("    {}: {} ({})", i + 1, name, typ);
        }
    }

    println!();
}

fn json_output(path: &Path, metadata: &Metadata, verbose: bool) -> String {
    let dialect = &metadata.dialect;
    let types = match metadata.types() {
        Some(_) => {
            let quoted: Vec<String> = type_names(metadata).iter().map(|t| json_string(t)).collect();
            format!("[{}]", quoted.join(","))
        }
        None => "null".to_string(),
    };

    let mut out = format!(
        r#"{{"file":{},"dialect":{{"separator":{},"has_header":{},"indented":{},"whitespace_significant":{},"types":{}}},"num_fields":{}"#,
        json_string(&path.display().to_string()),
        json_string(&dialect.separator.as_char().to_string()),
        dialect.has_header,
        dialect.indented,
        dialect.whitespace_significant,
        types,
        metadata.num_fields,
    );

    if verbose {
        let fields: Vec<String> = metadata.fields.iter().map(|f| json_string(f)).collect();
        out.push_str(&format!(r#","fields":[{}]"#, fields.join(",")));
    }

    out.push('}');
    out
}

/// Quote and escape a string for JSON output.
fn json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if u32::from(c) < 0x20 => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn write_csv_header<W: io::Write>(writer: &mut csv::Writer<W>) -> csv::Result<()> {
    writer.write_record([
        "file",
        "separator",
        "has_header",
        "indented",
        "whitespace_significant",
        "num_fields",
        "types",
    ])?;
    writer.flush()?;
    Ok(())
}

fn write_csv_row<W: io::Write>(
    writer: &mut csv::Writer<W>,
    path: &Path,
    metadata: &Metadata,
) -> Result<(), Box<dyn std::error::Error>> {
    let dialect = &metadata.dialect;
    writer.write_record([
        path.display().to_string(),
        dialect.separator.as_char().to_string(),
        dialect.has_header.to_string(),
        dialect.indented.to_string(),
        dialect.whitespace_significant.to_string(),
        metadata.num_fields.to_string(),
        type_names(metadata).join(" "),
    ])?;
    writer.flush()?;
    Ok(())
}
