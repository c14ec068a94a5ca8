//! Init command: write the default column layout.

use std::env;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::commands::print_json;
use crate::config::{Config, project_config_path};
use crate::error::{MetacsvError, Result};
use crate::format::InitOutput;

const CONFIG_PREAMBLE: &str = "\
# metacsv column layout
#
# Each column maps a CSV header to an entity JSON field.
# kind: bool | string | stringList | entityReference | entityReferences |
#       classificationTags | glossaryTerms | tier | owners | reviewers | extension
# field defaults to the column name (tags for tag kinds).
";

/// Execute the init command in the current directory.
///
/// # Errors
///
/// Returns `AlreadyInitialized` if the config exists and `force` is unset, or
/// an I/O error if it cannot be written.
pub fn execute(force: bool, json: bool) -> Result<()> {
    let output = init_at(&env::current_dir()?, force)?;
    if json {
        return print_json(&output);
    }
    println!(
        "Wrote default layout ({} columns) to {}",
        output.columns,
        output.path.display()
    );
    Ok(())
}

/// Write the default layout under `root`.
///
/// # Errors
///
/// Same as [`execute`].
pub fn init_at(root: &Path, force: bool) -> Result<InitOutput> {
    let path = project_config_path(root);
    let overwritten = path.exists();
    if overwritten && !force {
        return Err(MetacsvError::AlreadyInitialized { path });
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let config = Config::default();
    fs::write(&path, format!("{CONFIG_PREAMBLE}{}", config.to_yaml()?))?;
    info!(path = %path.display(), "wrote default layout");

    Ok(InitOutput {
        path,
        columns: config.columns.len(),
        overwritten,
    })
}
