use crate::decoder::parse_elements;
use std::fmt::{self, Display, Formatter, Write};

/// A `name[=value]` pair found inside a header value.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct NameValuePair {
    name: String,
    value: Option<String>,
}

impl NameValuePair {
    #[inline]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Display for NameValuePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match self.value {
            Some(ref v) if needs_quoting(v) => {
                f.write_str("=\"")?;
                for c in v.chars() {
                    if c == '"' || c == '\\' {
                        f.write_char('\\')?;
                    }
                    f.write_char(c)?;
                }
                f.write_char('"')
            }
            Some(ref v) => write!(f, "={}", v),
            None => Ok(()),
        }
    }
}

fn needs_quoting(v: &str) -> bool {
    v.is_empty()
        || v
            .bytes()
            .any(|b| matches!(b, b',' | b';' | b'=' | b' ' | b'\t' | b'"' | b'\\'))
}

/// One comma separated element of a header value, such as
/// `text/plain; q=0.5` in `Accept: text/html, text/plain; q=0.5`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HeaderElement {
    pair: NameValuePair,
    params: Vec<NameValuePair>,
}

impl HeaderElement {
    #[inline]
    pub(crate) fn new(pair: NameValuePair, params: Vec<NameValuePair>) -> Self {
        Self { pair, params }
    }

    /// Parses all elements of a header value. Elements without a name are
    /// skipped.
    #[inline]
    pub fn parse_all(value: &str) -> Vec<HeaderElement> {
        parse_elements(value)
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.pair.name()
    }

    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.pair.value()
    }

    #[inline]
    pub fn params(&self) -> &[NameValuePair] {
        &self.params
    }

    /// Returns the first parameter with exactly this name.
    pub fn param(&self, name: &str) -> Option<&NameValuePair> {
        self.params.iter().find(|p| p.name() == name)
    }
}

impl Display for HeaderElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pair)?;
        for p in &self.params {
            write!(f, "; {}", p)?;
        }
        Ok(())
    }
}
