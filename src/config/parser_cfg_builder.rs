use crate::config::{ParserCfg, DEFAULT_MAX_HEADERS, DEFAULT_MAX_LINE_LEN};

#[derive(Debug)]
#[non_exhaustive]
pub struct ParserCfgBuilder {
    max_line_len: usize,
    max_headers: usize,
}

impl ParserCfgBuilder {
    #[inline]
    pub fn max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    #[inline]
    pub fn max_headers(mut self, max_headers: usize) -> Self {
        self.max_headers = max_headers;
        self
    }

    pub fn build(self) -> ParserCfg {
        ParserCfg {
            max_line_len: self.max_line_len,
            max_headers: self.max_headers,
        }
    }
}

impl Default for ParserCfgBuilder {
    #[inline]
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            max_headers: DEFAULT_MAX_HEADERS,
        }
    }
}
