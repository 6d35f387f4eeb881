//! parsing codepoint arguments

use std::str::FromStr;

use read_pfn::types::Codepoint;

/// A codepoint given on the command line.
///
/// Accepts `U+XXXX`, `0xXXXX`, a decimal number, or a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodepointArg(pub Codepoint);

impl FromStr for CodepointArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("U+")
            .or_else(|| s.strip_prefix("u+"))
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"));
        let raw = match hex {
            Some(digits) => u32::from_str_radix(digits, 16)
                .map_err(|_| format!("invalid hex codepoint '{}'", s.escape_default()))?,
            None => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => return Err("codepoint should be non-empty".into()),
                    (Some(c), None) if !c.is_ascii_digit() => c as u32,
                    _ => s
                        .parse::<u32>()
                        .map_err(|_| format!("invalid codepoint '{}'", s.escape_default()))?,
                }
            }
        };
        Ok(CodepointArg(Codepoint::new(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<u32, String> {
        s.parse::<CodepointArg>().map(|arg| arg.0.to_u32())
    }

    #[test]
    fn forms() {
        assert_eq!(parse("U+3042"), Ok(0x3042));
        assert_eq!(parse("0x41"), Ok(0x41));
        assert_eq!(parse("65"), Ok(65));
        assert_eq!(parse("A"), Ok(0x41));
        assert_eq!(parse("あ"), Ok(0x3042));
        // a lone digit is a number, not a character
        assert_eq!(parse("7"), Ok(7));
    }

    #[test]
    fn errors() {
        assert!(parse("").is_err());
        assert!(parse("U+ZZ").is_err());
        assert!(parse("AB").is_err());
    }
}
