/// Policy for counting `?` placeholders in a sub-statement's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderScan {
    /// Counts every literal `?`, including inside string literals and
    /// comments. Compatible with configurations that relied on the original
    /// counting behavior.
    #[default]
    CountAll,

    /// Skips `'…'` literals (with `''` escapes), `"…"` quoted identifiers,
    /// `--` line comments, and `/* … */` block comments.
    QuoteAware,
}

impl PlaceholderScan {
    pub fn count(&self, sql: &str) -> usize {
        match self {
            PlaceholderScan::CountAll => sql.bytes().filter(|&b| b == b'?').count(),
            PlaceholderScan::QuoteAware => count_quote_aware(sql),
        }
    }
}

fn count_quote_aware(sql: &str) -> usize {
    let bytes = sql.as_bytes();
    let mut count = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'?' => {
                count += 1;
                i += 1;
            }
            quote @ (b'\'' | b'"') => {
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == quote {
                        // A doubled quote is an escape, not a terminator
                        if bytes.get(i + 1) == Some(&quote) {
                            i += 2;
                            continue;
                        }
                        i += 1;
                        break;
                    }
                    i += 1;
                }
            }
            b'-' if bytes.get(i + 1) == Some(&b'-') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i < bytes.len() {
                    if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    count
}
