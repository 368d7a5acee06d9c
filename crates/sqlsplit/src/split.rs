use sqlsplit_core::Result;

use regex::Regex;

/// Splits one raw SQL text blob into independently executable parts.
///
/// Splitting is purely lexical: a delimiter or pattern match inside a string
/// literal or comment still splits. Known limitation.
#[derive(Debug, Clone)]
pub enum Splitter {
    /// Tokenizes on any character of the set. Tokens are trimmed and empty
    /// segments between consecutive delimiters are dropped by construction.
    Delimiter(String),

    /// Splits on every match of the pattern. Empty segments are preserved;
    /// filtering them is the dispatcher's skip-empty policy.
    Pattern(Regex),
}

impl Splitter {
    pub fn delimiter(chars: impl Into<String>) -> Self {
        Splitter::Delimiter(chars.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|err| sqlsplit_core::err!("invalid split pattern `{pattern}`: {err}"))?;
        Ok(Splitter::Pattern(regex))
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        match self {
            Splitter::Delimiter(chars) => text
                .split(|c| chars.contains(c))
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
            Splitter::Pattern(regex) => regex.split(text).map(str::to_string).collect(),
        }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Splitter::delimiter(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_trims_and_drops_empties() {
        let splitter = Splitter::delimiter(";");
        assert_eq!(
            splitter.split(" a ;; b ;"),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn delimiter_set_splits_on_any_member() {
        let splitter = Splitter::delimiter(";\n");
        assert_eq!(
            splitter.split("a\nb;c"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn pattern_preserves_empty_segments() {
        let splitter = Splitter::pattern(r";\s*").unwrap();
        assert_eq!(
            splitter.split("a;; b;"),
            vec![
                "a".to_string(),
                "".to_string(),
                "b".to_string(),
                "".to_string()
            ]
        );
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(Splitter::pattern("(").is_err());
    }
}
