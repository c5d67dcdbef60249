use std::path::PathBuf;

use serde::Deserialize;
use showtype_lib::{Diagnostics, Probe, Site};

use super::input_loader::{LoadError, load_catalog, load_json, read_input};

pub struct TraceArgs {
    pub sites_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub source_path: Option<PathBuf>,
    pub marker: String,
    pub color: bool,
}

/// Sites reported by the host analyzer for one source file.
#[derive(Debug, Deserialize)]
pub struct TraceInput {
    #[serde(default)]
    pub path: Option<String>,
    pub sites: Vec<Site>,
}

pub fn run(args: TraceArgs) {
    match trace_output(&args) {
        Ok(out) if out.is_empty() => {}
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn trace_output(args: &TraceArgs) -> Result<String, LoadError> {
    let input: TraceInput = load_json(&args.sites_path)?;
    let catalog = load_catalog(args.catalog_path.as_deref())?;
    let source = args.source_path.as_deref().map(read_input).transpose()?;

    let diagnostics = Probe::new(&catalog)
        .marker(args.marker.as_str())
        .inspect_all(&input.sites);

    // Fall back to the source file name when the document names no path.
    let source_name = args
        .source_path
        .as_ref()
        .map(|path| path.display().to_string());
    let path = input.path.as_deref().or(source_name.as_deref());

    Ok(format_diagnostics(&diagnostics, source.as_deref(), path, args.color))
}

fn format_diagnostics(
    diagnostics: &Diagnostics,
    source: Option<&str>,
    path: Option<&str>,
    colored: bool,
) -> String {
    let mut printer = diagnostics.printer().colored(colored);
    if let Some(source) = source {
        printer = printer.source(source);
        if let Some(path) = path {
            printer = printer.path(path);
        }
    }
    printer.render()
}
