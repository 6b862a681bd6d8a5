use crate::{
    errors::{HeaderError, Result},
    header::{Header, HeaderList},
};
use http::{HeaderMap, HeaderName, HeaderValue};

impl TryFrom<&Header> for (HeaderName, HeaderValue) {
    type Error = HeaderError;

    /// An absent value converts to an empty [`HeaderValue`].
    fn try_from(hdr: &Header) -> Result<Self> {
        let name = HeaderName::from_bytes(hdr.name().as_bytes()).map_err(http::Error::from)?;
        let value = HeaderValue::from_str(hdr.value().unwrap_or("")).map_err(http::Error::from)?;
        Ok((name, value))
    }
}

impl HeaderList {
    /// Converts the list into an [`http::HeaderMap`], keeping repeated headers
    /// in order.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.len());
        for hdr in self.iter() {
            let (name, value) = <(HeaderName, HeaderValue)>::try_from(hdr)?;
            map.append(name, value);
        }
        Ok(map)
    }
}
