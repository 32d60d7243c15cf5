//! Distinguished-name string parsing.
//!
//! Two DN dialects occur in practice: the slash-delimited openssl oneline
//! form (`/CN=x/O=y`) and the comma-delimited RFC 2253 form (`CN=x,O=y`).
//! The parser is a small explicit character scanner rather than a
//! split/regex pass, because delimiters may appear escaped inside values
//! (`O=Acme\, Inc.`) and multi-valued RDNs join pairs with `+`.
//!
//! Parsing is deliberately lenient: malformed segments are skipped, an
//! empty or unparseable string yields an empty sequence, and duplicate
//! attribute types are preserved in encounter order (X.509 DNs may legally
//! repeat an attribute).

/// DN string dialects seen in the wild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// openssl oneline form: `/CN=x/O=y`.
    Slash,
    /// RFC 2253 form: `CN=x,O=y`.
    Comma,
}

impl Dialect {
    /// Picks the dialect from the shape of the raw string: a leading `/`
    /// means the slash form, anything else the comma form.
    pub fn detect(raw: &str) -> Dialect {
        if raw.starts_with('/') {
            Dialect::Slash
        } else {
            Dialect::Comma
        }
    }

    fn delimiter(self) -> char {
        match self {
            Dialect::Slash => '/',
            Dialect::Comma => ',',
        }
    }
}

/// Parses a DN string into (attribute, value) pairs, auto-detecting the
/// dialect. See [`parse_with_dialect`] for the parsing rules.
pub fn parse(raw: &str) -> Vec<(String, String)> {
    parse_with_dialect(raw, Dialect::detect(raw))
}

/// Parses a DN string into (attribute, value) pairs using an explicit
/// dialect.
///
/// Rules:
/// - Segments end at an unescaped dialect delimiter or an unescaped `+`
///   (multi-valued RDN); `\` escapes the next character, and escapes are
///   resolved on output.
/// - Each segment splits on its first `=`; everything after it is the
///   value, so values may contain `=`.
/// - Segments without `=` or with an empty key are skipped.
pub fn parse_with_dialect(raw: &str, dialect: Dialect) -> Vec<(String, String)> {
    let delimiter = dialect.delimiter();
    let mut pairs = Vec::new();
    let mut segment = String::new();

    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // Escaped character: taken literally, including the delimiter.
            match chars.next() {
                Some(escaped) => segment.push(escaped),
                None => segment.push('\\'),
            }
        } else if c == delimiter || c == '+' {
            push_pair(&mut pairs, &segment);
            segment.clear();
        } else {
            segment.push(c);
        }
    }
    push_pair(&mut pairs, &segment);

    pairs
}

fn push_pair(pairs: &mut Vec<(String, String)>, segment: &str) {
    let segment = segment.trim();
    let Some((key, value)) = segment.split_once('=') else {
        return;
    };
    let key = key.trim();
    if key.is_empty() {
        return;
    }
    pairs.push((key.to_string(), value.to_string()));
}
