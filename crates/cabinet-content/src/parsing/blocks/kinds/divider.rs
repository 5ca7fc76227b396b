/// Divider block type (thematic break).
///
/// Only a line that is exactly `---` after trimming is a divider.
pub struct Divider;

impl Divider {
    pub const MARKER: &'static str = "---";

    pub fn matches(line: &str) -> bool {
        line == Self::MARKER
    }
}
