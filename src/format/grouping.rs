/// Insert `separator` every three characters counted from the right.
///
/// Expects ASCII digits; no separator is placed before the first group or
/// after the last.
pub fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_runs_untouched() {
        assert_eq!(group_thousands("", '.'), "");
        assert_eq!(group_thousands("7", '.'), "7");
        assert_eq!(group_thousands("999", '.'), "999");
    }

    #[test]
    fn test_group_boundaries() {
        assert_eq!(group_thousands("1000", '.'), "1.000");
        assert_eq!(group_thousands("100000", '.'), "100.000");
        assert_eq!(group_thousands("2700000", '.'), "2.700.000");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(group_thousands("1234567", ','), "1,234,567");
        assert_eq!(group_thousands("1234567", '\''), "1'234'567");
    }
}
