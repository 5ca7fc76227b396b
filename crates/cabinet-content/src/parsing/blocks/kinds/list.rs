/// List item markers: `- ` for bullets, digits + `.` + whitespace for numbers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: &'static str = "- ";
    pub const NUMBER_DOT: char = '.';

    /// Returns the item text of a bullet line.
    pub fn strip_bullet(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BULLET)
    }

    /// Returns the item text of a numbered line such as `12. text`.
    ///
    /// The marker is one or more ASCII digits, a dot, then exactly one
    /// whitespace character; only that marker is removed.
    pub fn strip_number(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }

        let rest = line[digits..].strip_prefix(Self::NUMBER_DOT)?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => None,
        }
    }
}
