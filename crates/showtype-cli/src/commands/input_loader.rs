use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use showtype_lib::StaticCatalog;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String, LoadError> {
    let result = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };

    result.map_err(|source| LoadError::Io {
        path: display_name(path),
        source,
    })
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = read_input(path)?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: display_name(path),
        source,
    })
}

/// Catalog from a JSON file, or an empty one when no file is given.
pub fn load_catalog(path: Option<&Path>) -> Result<StaticCatalog, LoadError> {
    match path {
        Some(path) => {
            let catalog: StaticCatalog = load_json(path)?;
            tracing::debug!(classes = catalog.len(), path = %path.display(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(StaticCatalog::new()),
    }
}

fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
