use crate::{
    decoder::trim_lws,
    header::{HeaderElement, NameValuePair},
};
use tracing::trace;

/// Parses a header value into its comma separated elements.
///
/// Each element is a `;` separated list of `name[=value]` pairs. The first
/// pair names the element, the rest are its parameters. Separators inside a
/// double quoted string are taken literally; quoted values lose their
/// enclosing quotes and `\x` quoted pairs are unescaped to `x`.
pub fn parse_elements(value: &str) -> Vec<HeaderElement> {
    let mut elements = Vec::new();

    for raw in split_unquoted(value, b',') {
        let mut pairs = split_unquoted(raw, b';').into_iter();
        let first = match pairs.next().and_then(parse_pair) {
            Some(p) => p,
            None => {
                trace!(element = raw, "skipping element without a name");
                continue;
            }
        };
        let params = pairs.filter_map(parse_pair).collect();
        elements.push(HeaderElement::new(first, params));
    }

    elements
}

fn parse_pair(raw: &str) -> Option<NameValuePair> {
    let (name, value) = match raw.find('=') {
        Some(eq) => (trim_lws(&raw[..eq]), Some(unquote(trim_lws(&raw[eq + 1..])))),
        None => (trim_lws(raw), None),
    };

    if name.is_empty() {
        return None;
    }

    Some(NameValuePair::new(name, value))
}

fn unquote(s: &str) -> String {
    if s.len() < 2 || !s.starts_with('"') || !s.ends_with('"') {
        return s.to_owned();
    }

    let mut out = String::with_capacity(s.len() - 2);
    let mut chars = s[1..s.len() - 1].chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(e) => out.push(e),
                None => out.push(c),
            },
            _ => out.push(c),
        }
    }
    out
}

/// Splits `s` on `sep`, ignoring separators inside double quoted strings.
/// A backslash inside a quoted string escapes the next byte.
fn split_unquoted(s: &str, sep: u8) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut escaped = false;

    for (idx, b) in bytes.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match *b {
            b'\\' if quoted => escaped = true,
            b'"' => quoted = !quoted,
            v if v == sep && !quoted => {
                parts.push(&s[start..idx]);
                start = idx + 1;
            }
            _ => (),
        }
    }
    parts.push(&s[start..]);

    parts
}
