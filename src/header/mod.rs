mod header_element;
mod header_list;
mod http_interop;

pub use header_element::*;
pub use header_list::*;

use crate::{
    decoder::decode_header_line,
    errors::{HeaderError, Result},
};
use bytes::BytesMut;
use std::{
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    str::{self, FromStr},
};
use tracing::trace;

const HASH_SEED: u32 = 17;

/// An HTTP header.
///
/// A header is immutable once built. Two headers are equal when their names
/// (compared case-sensitively) and values are equal; the autogenerated flag
/// does not take part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Header {
    name: String,
    value: Option<String>,
    autogenerated: bool,
}

impl Header {
    /// Creates a header that was supplied by the caller.
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Self::from_parts(name, Some(value.into()), false)
    }

    /// Creates a header that was synthesized rather than supplied by the caller.
    #[inline]
    pub fn new_autogenerated(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Self::from_parts(name, Some(value.into()), true)
    }

    /// Creates a header from all of its parts. The value may be absent.
    ///
    /// Fails with [`HeaderError::InvalidArgument`] when `name` is empty.
    pub fn from_parts(
        name: impl Into<String>,
        value: Option<String>,
        autogenerated: bool,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(HeaderError::InvalidArgument("name may not be empty"));
        }
        Ok(Self {
            name,
            value,
            autogenerated,
        })
    }

    /// Parses a single `name: value` header line.
    ///
    /// Only the first colon separates name from value. Both are trimmed of
    /// surrounding whitespace.
    ///
    /// An empty `line` stands in for an absent one and fails with
    /// [`HeaderError::InvalidArgument`], as does a line whose name trims to
    /// nothing. A non-empty line without a colon fails with
    /// [`HeaderError::Protocol`].
    pub fn parse(line: &str) -> Result<Self> {
        let (name, value) = decode_header_line(line)?;
        Self::new(name, value)
    }

    /// Same as [`Header::parse`] for a line that has not been checked for UTF-8.
    pub fn parse_bytes(line: &[u8]) -> Result<Self> {
        let line = str::from_utf8(line).map_err(|e| {
            trace!(err = %e, "header line is not valid UTF-8");
            HeaderError::Protocol(format!("header line is not valid UTF-8: {}", e))
        })?;
        Self::parse(line)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[inline]
    pub fn is_autogenerated(&self) -> bool {
        self.autogenerated
    }

    /// Parses the value into its elements, see [`HeaderElement::parse_all`].
    pub fn elements(&self) -> Vec<HeaderElement> {
        match self.value() {
            Some(v) => HeaderElement::parse_all(v),
            None => Vec::new(),
        }
    }

    /// Appends the header to `wbuf` as a CRLF terminated line.
    #[inline]
    pub fn encode(&self, wbuf: &mut BytesMut) {
        wbuf.extend_from_slice(self.name.as_bytes());
        wbuf.extend_from_slice(b": ");
        if let Some(ref value) = self.value {
            wbuf.extend_from_slice(value.as_bytes());
        }
        wbuf.extend_from_slice(b"\r\n");
    }
}

impl PartialEq for Header {
    #[inline]
    fn eq(&self, other: &Header) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for Header {}

impl Hash for Header {
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_SEED.hash(state);
        self.name.hash(state);
        self.value.hash(state);
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value().unwrap_or(""))
    }
}

impl FromStr for Header {
    type Err = HeaderError;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use tracing_test::traced_test;

    fn hash_of(hdr: &Header) -> u64 {
        let mut hasher = DefaultHasher::new();
        hdr.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_construct() {
        let hdr = Header::new("Content-Type", "text/html").unwrap();
        assert_eq!(hdr.name(), "Content-Type");
        assert_eq!(hdr.value(), Some("text/html"));
        assert!(!hdr.is_autogenerated());

        let hdr = Header::new("X-Empty", "").unwrap();
        assert_eq!(hdr.value(), Some(""));

        let hdr = Header::new_autogenerated("Host", "localhost").unwrap();
        assert!(hdr.is_autogenerated());

        let hdr = Header::from_parts("X-None", None, false).unwrap();
        assert_eq!(hdr.value(), None);
    }

    #[test]
    fn test_construct_empty_name() {
        assert!(matches!(
            Header::new("", "value"),
            Err(HeaderError::InvalidArgument(_))
        ));
        assert!(matches!(
            Header::new_autogenerated("", ""),
            Err(HeaderError::InvalidArgument(_))
        ));
        assert!(matches!(
            Header::from_parts(String::new(), None, true),
            Err(HeaderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display() {
        let expectations: Vec<(Header, &str)> = vec![
            (Header::new("Host", "localhost").unwrap(), "Host: localhost"),
            (Header::new("X-Empty", "").unwrap(), "X-Empty: "),
            (Header::from_parts("X-None", None, false).unwrap(), "X-None: "),
            (
                Header::parse("X-Range:   10:20:30 ").unwrap(),
                "X-Range: 10:20:30",
            ),
        ];

        for (hdr, s) in &expectations {
            assert_eq!(hdr.to_string(), *s);
        }
    }

    #[test]
    fn test_equality_and_hash() {
        let a = Header::new("Accept", "*/*").unwrap();
        let b = Header::new_autogenerated("Accept", "*/*").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let unequal = vec![
            Header::new("accept", "*/*").unwrap(),
            Header::new("Accept", "text/html").unwrap(),
            Header::new("Accept", "").unwrap(),
            Header::from_parts("Accept", None, false).unwrap(),
        ];
        for other in &unequal {
            assert_ne!(a, *other);
        }

        // absent and empty values are distinct
        assert_ne!(unequal[2], unequal[3]);

        let c = Header::from_parts("Accept", None, true).unwrap();
        assert_eq!(c, unequal[3]);
        assert_eq!(hash_of(&c), hash_of(&unequal[3]));
    }

    #[test]
    fn test_parse() {
        let hdr = Header::parse("Content-Type: text/html").unwrap();
        assert_eq!(hdr.name(), "Content-Type");
        assert_eq!(hdr.value(), Some("text/html"));
        assert!(!hdr.is_autogenerated());

        let hdr: Header = "X-Range:  10:20:30  ".parse().unwrap();
        assert_eq!(hdr.name(), "X-Range");
        assert_eq!(hdr.value(), Some("10:20:30"));

        let hdr = Header::parse_bytes(b"Host: localhost\r\n").unwrap();
        assert_eq!(hdr, Header::new("Host", "localhost").unwrap());
    }

    #[test]
    #[traced_test]
    fn test_parse_errors() {
        assert!(Header::parse("").unwrap_err().is_invalid_argument());
        assert!(Header::parse(": value").unwrap_err().is_invalid_argument());
        assert!(Header::parse("  :").unwrap_err().is_invalid_argument());
        assert!(Header::parse(" ").unwrap_err().is_protocol());

        match Header::parse("NoColonHere") {
            Err(HeaderError::Protocol(m)) => assert_eq!(m, "unable to parse header: NoColonHere"),
            res => panic!("unexpected result: {:?}", res),
        }

        assert!(Header::parse_bytes(b"X-Bad: \xc3\x28")
            .unwrap_err()
            .is_protocol());
    }

    #[test]
    fn test_display_round_trip() {
        let headers = vec![
            Header::new("Content-Type", "text/html").unwrap(),
            Header::new("X-Time", "10:30:00").unwrap(),
            Header::new("X-Empty", "").unwrap(),
            Header::new_autogenerated("Cookie", "a=b; c=d").unwrap(),
        ];

        for hdr in &headers {
            let parsed = Header::parse(&hdr.to_string()).unwrap();
            assert_eq!(parsed, *hdr);
        }
    }

    #[test]
    fn test_elements() {
        let hdr = Header::new("Accept", "text/html, text/plain; q=0.5").unwrap();
        let els = hdr.elements();
        assert_eq!(els.len(), 2);
        assert_eq!(els[1].name(), "text/plain");
        assert_eq!(els[1].param("q").and_then(|p| p.value()), Some("0.5"));

        let hdr = Header::from_parts("Accept", None, false).unwrap();
        assert!(hdr.elements().is_empty());
    }

    #[test]
    fn test_encode() {
        let mut wbuf = BytesMut::new();
        Header::new("Host", "localhost").unwrap().encode(&mut wbuf);
        Header::from_parts("X-None", None, false)
            .unwrap()
            .encode(&mut wbuf);
        assert_eq!(&wbuf[..], b"Host: localhost\r\nX-None: \r\n");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Header>();
    }
}
