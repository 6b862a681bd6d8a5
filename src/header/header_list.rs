use crate::{config::ParserCfg, decoder::decode_header_block, errors::Result, header::Header};
use bytes::BytesMut;
use std::{
    fmt::{self, Display, Formatter},
    slice::Iter,
};

/// An ordered list of headers. Names are matched exactly.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HeaderList {
    pub(crate) vec: Vec<Header>,
}

impl HeaderList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a header block terminated by an empty line.
    ///
    /// Returns the number of bytes consumed, including the empty line.
    #[inline]
    pub fn parse_block(buf: &[u8], cfg: &ParserCfg) -> Result<(usize, Self)> {
        decode_header_block(buf, cfg)
    }

    #[inline]
    pub fn push(&mut self, hdr: Header) {
        self.vec.push(hdr);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vec.clear();
    }

    #[inline]
    pub fn iter(&self) -> HeaderIterator<'_> {
        HeaderIterator {
            iter: self.vec.iter(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Header> {
        self.vec.iter().find(|h| h.name() == name)
    }

    pub fn get_all<'s, 'n>(&'s self, name: &'n str) -> impl Iterator<Item = &'s Header> + 'n
    where
        's: 'n,
    {
        self.vec.iter().filter(move |h| h.name() == name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes every header with this name, returning how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.vec.len();
        self.vec.retain(|h| h.name() != name);
        before - self.vec.len()
    }

    /// Writes all headers followed by the terminating empty line.
    pub fn encode(&self, wbuf: &mut BytesMut) {
        for hdr in self.vec.iter() {
            hdr.encode(wbuf);
        }
        wbuf.extend_from_slice(b"\r\n");
    }
}

impl Display for HeaderList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, hdr) in self.vec.iter().enumerate() {
            if i > 0 {
                f.write_str("\r\n")?;
            }
            write!(f, "{}", hdr)?;
        }
        Ok(())
    }
}

impl FromIterator<Header> for HeaderList {
    fn from_iter<I: IntoIterator<Item = Header>>(iter: I) -> Self {
        Self {
            vec: iter.into_iter().collect(),
        }
    }
}

impl<'b> IntoIterator for &'b HeaderList {
    type Item = &'b Header;
    type IntoIter = HeaderIterator<'b>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
pub struct HeaderIterator<'b> {
    pub(crate) iter: Iter<'b, Header>,
}

impl<'b> Iterator for HeaderIterator<'b> {
    type Item = &'b Header;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn list(pairs: &[(&str, &str)]) -> HeaderList {
        pairs
            .iter()
            .map(|(n, v)| Header::new(*n, *v).unwrap())
            .collect()
    }

    #[test]
    fn test_lookup() {
        let mut hl = list(&[("Via", "a"), ("Host", "localhost"), ("Via", "b")]);
        assert_eq!(hl.len(), 3);
        assert_eq!(hl.get("Via").and_then(|h| h.value()), Some("a"));
        assert!(hl.get("via").is_none());
        assert!(hl.contains("Host"));

        let vias: Vec<&str> = hl.get_all("Via").filter_map(|h| h.value()).collect();
        assert_eq!(vias, vec!["a", "b"]);

        assert_eq!(hl.remove("Via"), 2);
        assert_eq!(hl.remove("Via"), 0);
        assert_eq!(hl.len(), 1);
        assert!(!hl.contains("Via"));

        hl.clear();
        assert!(hl.is_empty());
    }

    #[test]
    fn test_encode() {
        let mut wbuf = BytesMut::new();
        list(&[("Host", "localhost"), ("X-Time", "10:30:00")]).encode(&mut wbuf);
        assert_eq!(&wbuf[..], b"Host: localhost\r\nX-Time: 10:30:00\r\n\r\n");

        let mut wbuf = BytesMut::new();
        HeaderList::new().encode(&mut wbuf);
        assert_eq!(&wbuf[..], b"\r\n");
    }

    #[test]
    #[traced_test]
    fn test_encode_parse_block() {
        let hl = list(&[("Host", "localhost"), ("Accept", "text/html, */*"), ("X-Empty", "")]);
        let mut wbuf = BytesMut::new();
        hl.encode(&mut wbuf);

        let (len, parsed) = HeaderList::parse_block(&wbuf, &ParserCfg::default()).unwrap();
        assert_eq!(len, wbuf.len());
        assert_eq!(parsed, hl);
    }

    #[test]
    fn test_display() {
        let hl = list(&[("A", "1"), ("B", "2")]);
        assert_eq!(hl.to_string(), "A: 1\r\nB: 2");
        assert_eq!(HeaderList::new().to_string(), "");

        let names: Vec<&str> = (&hl).into_iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
