//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("showtype")
        .about("Render inferred static types as readable annotations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(render_command())
        .subcommand(trace_command())
}

/// Render a single type union.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Render a JSON type union")
        .override_usage(
            "\
  showtype render <TYPE>
  showtype render <TYPE> -c <FILE>
  showtype render - --inline",
        )
        .after_help(
            r#"EXAMPLES:
  showtype render type.json                  # framed rendering
  showtype render type.json -c classes.json  # short names, labeled generics
  echo '[{"kind":"opaque","id":"int"}]' | showtype render - --inline"#,
        )
        .arg(type_path_arg())
        .arg(catalog_arg())
        .arg(inline_arg())
}

/// Report the types of marked sites.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Report the types of sites marked with @show-type")
        .override_usage(
            "\
  showtype trace <SITES>
  showtype trace <SITES> -s <FILE> [-c <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  showtype trace sites.json                   # plain diagnostics
  showtype trace sites.json -s src/app.php    # annotated source snippets
  showtype trace sites.json --marker @dump    # custom marker"#,
        )
        .arg(sites_path_arg())
        .arg(catalog_arg())
        .arg(source_arg())
        .arg(marker_arg())
        .arg(color_arg())
}
