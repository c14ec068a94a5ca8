//! Command implementations.

pub mod completions;
pub mod export;
pub mod headers;
pub mod import;
pub mod init;
pub mod split;
pub mod version;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{MetacsvError, Result};

/// Read a whole input file, or stdin for `None` and `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            if !path.exists() {
                return Err(MetacsvError::FileNotFound(path.to_path_buf()));
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
