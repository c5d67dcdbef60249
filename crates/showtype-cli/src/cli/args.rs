//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use showtype_lib::SHOW_TYPE_MARKER;

/// JSON type union (positional).
pub fn type_path_arg() -> Arg {
    Arg::new("type_path")
        .value_name("TYPE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON file holding a type union ('-' for stdin)")
}

/// JSON site document (positional).
pub fn sites_path_arg() -> Arg {
    Arg::new("sites_path")
        .value_name("SITES")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON file holding the analyzed sites ('-' for stdin)")
}

/// Class catalog (-c/--catalog).
pub fn catalog_arg() -> Arg {
    Arg::new("catalog_path")
        .short('c')
        .long("catalog")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON class catalog used to shorten names and label generics")
}

/// Source file the site spans point into (-s/--source).
pub fn source_arg() -> Arg {
    Arg::new("source_path")
        .short('s')
        .long("source")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Source file to annotate")
}

/// Print without the surrounding newlines (--inline).
pub fn inline_arg() -> Arg {
    Arg::new("inline")
        .long("inline")
        .action(ArgAction::SetTrue)
        .help("Print the bare rendering without surrounding blank lines")
}

/// Documentation-comment marker (--marker).
pub fn marker_arg() -> Arg {
    Arg::new("marker")
        .long("marker")
        .value_name("TEXT")
        .default_value(SHOW_TYPE_MARKER)
        .help("Marker that requests a trace in a documentation comment")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
