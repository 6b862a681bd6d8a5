use crate::{
    config::ParserCfg,
    errors::{HeaderError, Result},
    header::{Header, HeaderList},
};
use tracing::{instrument, trace};

mod elements;
pub use elements::*;

/// Splits a single header line at its first colon.
///
/// Both halves are trimmed of surrounding whitespace, where whitespace is any
/// character at or below `' '` (so a trailing CR/LF is dropped as well).
///
/// An empty line is the absent line and fails with
/// [`HeaderError::InvalidArgument`]; any other line without a colon fails
/// with [`HeaderError::Protocol`].
pub fn decode_header_line(line: &str) -> Result<(&str, &str)> {
    if line.is_empty() {
        return Err(HeaderError::InvalidArgument("header line may not be empty"));
    }

    let colon = match line.find(':') {
        Some(idx) => idx,
        None => {
            trace!(line = line, "no ':' in header line");
            return Err(HeaderError::Protocol(format!(
                "unable to parse header: {}",
                line
            )));
        }
    };

    Ok((trim_lws(&line[..colon]), trim_lws(&line[colon + 1..])))
}

/// Decodes a header block: lines terminated by CRLF (or a bare LF) up to and
/// including the first empty line.
///
/// Returns the number of bytes consumed and the decoded headers.
#[instrument(err, skip(buf, cfg), fields(len = buf.len()))]
pub fn decode_header_block(buf: &[u8], cfg: &ParserCfg) -> Result<(usize, HeaderList)> {
    let mut list = HeaderList::new();
    let mut pos = 0;

    loop {
        let rest = &buf[pos..];
        let eol = match rest.iter().position(|b| *b == b'\n') {
            Some(eol) => eol,
            None => {
                trace!(pos = pos, "no terminating empty line");
                return Err(HeaderError::Protocol("incomplete header block".into()));
            }
        };

        let mut line = &rest[..eol];
        if line.last() == Some(&b'\r') {
            line = &line[..line.len() - 1];
        }
        pos += eol + 1;

        if line.len() > cfg.max_line_len() {
            trace!(pos = pos, len = line.len(), "header line too long");
            return Err(HeaderError::Protocol(format!(
                "header line exceeds {} bytes",
                cfg.max_line_len()
            )));
        }

        if line.is_empty() {
            trace!(parsed_len = pos, headers = list.len(), "complete");
            return Ok((pos, list));
        }

        if is_spht(line[0]) {
            trace!(pos = pos, "continuation line");
            return Err(HeaderError::Protocol(
                "folded header lines are not supported".into(),
            ));
        }

        if list.len() == cfg.max_headers() {
            trace!(max = cfg.max_headers(), "too many headers");
            return Err(HeaderError::Protocol(format!(
                "more than {} headers",
                cfg.max_headers()
            )));
        }

        list.push(Header::parse_bytes(line)?);
    }
}

#[inline]
pub fn trim_lws(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

#[inline]
fn is_spht(b: u8) -> bool {
    b == b' ' || b == b'\t'
}
