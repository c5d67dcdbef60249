//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use showtype_lib::SHOW_TYPE_MARKER;

use super::ColorChoice;
use crate::commands::render::RenderArgs;
use crate::commands::trace::TraceArgs;

pub struct RenderParams {
    pub type_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub inline: bool,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_path: required_path(m, "type_path"),
            catalog_path: m.get_one::<PathBuf>("catalog_path").cloned(),
            inline: m.get_flag("inline"),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            type_path: p.type_path,
            catalog_path: p.catalog_path,
            inline: p.inline,
        }
    }
}

pub struct TraceParams {
    pub sites_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub source_path: Option<PathBuf>,
    pub marker: String,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            sites_path: required_path(m, "sites_path"),
            catalog_path: m.get_one::<PathBuf>("catalog_path").cloned(),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            marker: m
                .get_one::<String>("marker")
                .cloned()
                .unwrap_or_else(|| SHOW_TYPE_MARKER.to_string()),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            sites_path: p.sites_path,
            catalog_path: p.catalog_path,
            source_path: p.source_path,
            marker: p.marker,
            color: p.color.should_colorize(),
        }
    }
}

/// Positionals marked `required(true)` are always present after parsing.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
