/// Bold inline type with owned delimiter constant.
///
/// `**text**`. The content is taken literally; nothing nests inside bold.
pub struct Bold;

impl Bold {
    /// The double-asterisk delimiter that opens and closes bold text.
    pub const DELIM: &'static [u8; 2] = b"**";
}
