/// Strong emphasis inline type with owned delimiter constants.
pub struct Strong;

impl Strong {
    /// Opening and closing delimiter.
    pub const DELIM: &'static [u8] = b"**";

    /// Bytes a strong span never crosses.
    pub const LINE_BREAKS: &'static [u8] = b"\r\n";

    pub fn is_line_break(b: u8) -> bool {
        Self::LINE_BREAKS.contains(&b)
    }
}
