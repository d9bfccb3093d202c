use std::borrow::Cow;

/// Rewrites a character literal as its decimal code when that form is not
/// longer than the original.
///
/// Only two shapes qualify: the escaped newline `'\n'`, which becomes `10`,
/// and the three-byte unescaped form (`'A'`), which becomes the byte's
/// decimal value. Everything else (`'\t'`, `'\x41'`, `'\u{1F600}'`,
/// multi-byte characters) is returned untouched.
pub fn encode_char_literal(text: &str) -> Cow<'_, str> {
    if text == "'\\n'" {
        return Cow::Borrowed("10");
    }

    let bytes = text.as_bytes();
    if bytes.len() == 3
        && bytes[0] == b'\''
        && bytes[2] == b'\''
        && bytes[1] != b'\\'
        && bytes[1] != b'\''
    {
        return Cow::Owned(bytes[1].to_string());
    }

    Cow::Borrowed(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_plain_bytes_as_decimal() {
        assert_eq!(encode_char_literal("'A'"), "65");
        assert_eq!(encode_char_literal("'0'"), "48");
        assert_eq!(encode_char_literal("' '"), "32");
        assert_eq!(encode_char_literal("'~'"), "126");
    }

    #[test]
    fn escaped_newline_is_ten() {
        assert_eq!(encode_char_literal("'\\n'"), "10");
    }

    #[test]
    fn other_shapes_are_untouched() {
        assert_eq!(encode_char_literal("'\\t'"), "'\\t'");
        assert_eq!(encode_char_literal("'\\''"), "'\\''");
        assert_eq!(encode_char_literal("'\\x41'"), "'\\x41'");
        assert_eq!(encode_char_literal("'\\u{1F600}'"), "'\\u{1F600}'");
        assert_eq!(encode_char_literal("'é'"), "'é'");
    }
}
