use crate::config::ParserCfgBuilder;

pub const DEFAULT_MAX_LINE_LEN: usize = 8192;
pub const DEFAULT_MAX_HEADERS: usize = 128;

/// Limits applied while decoding a header block.
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParserCfg {
    pub(crate) max_line_len: usize,
    pub(crate) max_headers: usize,
}

impl ParserCfg {
    #[inline]
    pub fn builder() -> ParserCfgBuilder {
        ParserCfgBuilder::default()
    }

    /// Longest accepted header line, excluding the line terminator.
    #[inline]
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    #[inline]
    pub fn max_headers(&self) -> usize {
        self.max_headers
    }
}

impl Default for ParserCfg {
    #[inline]
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            max_headers: DEFAULT_MAX_HEADERS,
        }
    }
}
