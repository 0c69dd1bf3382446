//! 文本数值输入

/// 解析用户输入的数值
///
/// 空串、非数字以及非有限值（`NaN`、`inf`）都返回 `None`，
/// 这样上层的限幅逻辑永远不会拿到 `NaN`。
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number("  -90 "), Some(-90.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12deg"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
