//! Header row rendering.

use crate::model::Header;

/// Marker appended to the names of required columns.
pub const REQUIRED_MARKER: char = '*';

/// Render header metadata into display names, preserving order.
#[must_use]
pub fn render(headers: &[Header]) -> Vec<String> {
    headers.iter().map(render_header).collect()
}

/// Render one header: the name, with a trailing `*` when required.
#[must_use]
pub fn render_header(header: &Header) -> String {
    if header.required {
        format!("{}{REQUIRED_MARKER}", header.name)
    } else {
        header.name.clone()
    }
}

/// Recover header metadata from a rendered name.
#[must_use]
pub fn parse_header(rendered: &str) -> Header {
    let trimmed = rendered.trim();
    trimmed.strip_suffix(REQUIRED_MARKER).map_or_else(
        || Header::optional(trimmed),
        |name| Header::required(name.trim_end()),
    )
}
