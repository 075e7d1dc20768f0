use entigen_config::LineEnding;

/// Rewrite every line terminator of `text` to `eol`.
pub fn convert_eol(text: &str, eol: LineEnding) -> String {
    let normalized = text.replace("\r\n", "\n");
    match eol {
        LineEnding::Lf => normalized,
        LineEnding::Crlf => normalized.replace('\n', "\r\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_to_crlf() {
        assert_eq!(convert_eol("a\nb\n", LineEnding::Crlf), "a\r\nb\r\n");
        assert_eq!(convert_eol("a\r\nb\n", LineEnding::Crlf), "a\r\nb\r\n");
    }

    #[test]
    fn test_convert_to_lf() {
        assert_eq!(convert_eol("a\r\nb\r\n", LineEnding::Lf), "a\nb\n");
        assert_eq!(convert_eol("a\nb", LineEnding::Lf), "a\nb");
    }
}
