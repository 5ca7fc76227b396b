use crate::parsing::blocks::types::HeadingLevel;

/// Heading block type with owned prefixes.
pub struct Heading;

impl Heading {
    pub const H2: &'static str = "## ";
    pub const H3: &'static str = "### ";

    /// Strips a heading prefix from a trimmed line.
    ///
    /// `## ` is tried before `### `; the two cannot both match.
    pub fn strip(line: &str) -> Option<(HeadingLevel, &str)> {
        if let Some(text) = line.strip_prefix(Self::H2) {
            Some((HeadingLevel::H2, text))
        } else {
            line.strip_prefix(Self::H3)
                .map(|text| (HeadingLevel::H3, text))
        }
    }
}
