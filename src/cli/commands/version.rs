//! Version command implementation.

use serde::Serialize;

use crate::cli::commands::print_json;
use crate::error::Result;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    codec_version: &'a str,
    build: &'a str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let output = VersionOutput {
        version: env!("CARGO_PKG_VERSION"),
        codec_version: metacsv_codec::VERSION,
        build: if cfg!(debug_assertions) {
            "dev"
        } else {
            "release"
        },
    };

    if json {
        return print_json(&output);
    }
    println!("metacsv {} (codec {}, {})", output.version, output.codec_version, output.build);
    Ok(())
}
