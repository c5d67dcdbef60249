use std::path::PathBuf;

use showtype_lib::{TypePrinter, TypeUnion};

use super::input_loader::{LoadError, load_catalog, load_json};

pub struct RenderArgs {
    pub type_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub inline: bool,
}

pub fn run(args: RenderArgs) {
    match render_output(&args) {
        Ok(out) if args.inline => println!("{}", out),
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn render_output(args: &RenderArgs) -> Result<String, LoadError> {
    let union: TypeUnion = load_json(&args.type_path)?;
    let catalog = load_catalog(args.catalog_path.as_deref())?;

    Ok(TypePrinter::new(&catalog)
        .framed(!args.inline)
        .render(&union))
}
