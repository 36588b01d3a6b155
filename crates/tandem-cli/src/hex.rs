//! Hex pattern parsing for the search command.

use anyhow::{Result, anyhow, bail};

/// Parse a whitespace-separated hex byte string, e.g. `"DE AD BE EF"`.
///
/// No wildcard tokens: the matcher is exact.
pub fn parse_pattern(pattern: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for token in pattern.split_whitespace() {
        let value = u8::from_str_radix(token, 16)
            .map_err(|e| anyhow!("Invalid pattern token '{}': {}", token, e))?;
        bytes.push(value);
    }

    if bytes.is_empty() {
        bail!("Pattern is empty");
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern() {
        let bytes = parse_pattern("DE AD be ef 00").unwrap();
        assert_eq!(bytes, vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00]);
    }

    #[test]
    fn test_parse_pattern_rejects_bad_token() {
        assert!(parse_pattern("DE XY").is_err());
        assert!(parse_pattern("123").is_err());
    }

    #[test]
    fn test_parse_pattern_rejects_empty() {
        assert!(parse_pattern("").is_err());
        assert!(parse_pattern("   ").is_err());
    }
}
