use std::io;
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::parser::entry::{parse_statements, ParsedStatement};

/// Read statement files and join them into one text blob.
///
/// Every path is checked for existence before any is read. Line endings
/// are normalized to `\n` and each file is separated from the next by a
/// blank line, so statements never merge across files.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    let missing = paths
        .iter()
        .map(AsRef::<Path>::as_ref)
        .find(|p| !p.exists());
    if let Some(missing) = missing {
        return Err(Error::Load {
            path: missing.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "could not find file"),
        });
    }

    let mut combined = String::new();
    for path in paths {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "loaded statement file");
        combined.push_str("\n\n");
        combined.push_str(content.replace("\r\n", "\n").trim_matches('\n'));
    }
    Ok(combined)
}

/// Load statement files and parse every statement they contain.
pub fn load_queries<P: AsRef<Path>>(paths: &[P], config: &Config) -> Result<Vec<ParsedStatement>> {
    parse_statements(&load_files(paths)?, config)
}
