//! Just enough HTTP/1.1 to serve small JSON requests.
//!
//! One request per connection. Bodies are read by `Content-Length` only;
//! chunked transfer encoding is not supported.

use std::io::{self, BufRead, Read, Write};

use serde::Serialize;

/// Largest request body accepted.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Longest request or header line accepted.
const MAX_LINE_LEN: usize = 8 * 1024;

/// Maximum number of header lines.
const MAX_HEADERS: usize = 64;

/// Why a request could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed request: {0}")]
    Malformed(String),

    #[error("request body of {0} bytes exceeds limit")]
    TooLarge(usize),

    #[error("connection closed before request was complete")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Status to answer with, or `None` when the peer is already gone.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Malformed(_) => Some(400),
            Self::TooLarge(_) => Some(413),
            Self::Closed | Self::Io(_) => None,
        }
    }
}

/// A parsed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    /// Header names are lowercased.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Read one request from `reader`.
    pub fn read_from(reader: &mut dyn BufRead) -> Result<Self, ParseError> {
        let request_line = read_line(reader)?.ok_or(ParseError::Closed)?;
        let mut parts = request_line.split_whitespace();
        let (Some(method), Some(target), Some(version)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::Malformed(format!("bad request line: {request_line:?}")));
        };
        if !version.starts_with("HTTP/1.") {
            return Err(ParseError::Malformed(format!("unsupported version: {version}")));
        }
        // Query strings are not routed on.
        let path = target.split('?').next().unwrap_or(target).to_string();

        let mut headers = Vec::new();
        loop {
            let line = read_line(reader)?.ok_or(ParseError::Closed)?;
            if line.is_empty() {
                break;
            }
            if headers.len() == MAX_HEADERS {
                return Err(ParseError::Malformed("too many headers".into()));
            }
            let Some((name, value)) = line.split_once(':') else {
                return Err(ParseError::Malformed(format!("bad header: {line:?}")));
            };
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }

        let mut request = Self {
            method: method.to_string(),
            path,
            headers,
            body: Vec::new(),
        };

        let length = match request.header("content-length") {
            Some(v) => v
                .parse::<usize>()
                .map_err(|_| ParseError::Malformed(format!("bad content-length: {v}")))?,
            None => 0,
        };
        if length > MAX_BODY_BYTES {
            return Err(ParseError::TooLarge(length));
        }
        request.body = vec![0; length];
        reader.read_exact(&mut request.body).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => ParseError::Closed,
            _ => ParseError::Io(e),
        })?;
        Ok(request)
    }

    /// First value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Read a CRLF- or LF-terminated line. `Ok(None)` on clean EOF.
fn read_line(reader: &mut dyn BufRead) -> Result<Option<String>, ParseError> {
    let mut buf = Vec::new();
    let n = reader
        .take(MAX_LINE_LEN as u64 + 1)
        .read_until(b'\n', &mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    if !buf.ends_with(b"\n") {
        if buf.len() > MAX_LINE_LEN {
            return Err(ParseError::Malformed("line too long".into()));
        }
        return Err(ParseError::Closed);
    }
    while buf.last().is_some_and(|b| *b == b'\n' || *b == b'\r') {
        buf.pop();
    }
    String::from_utf8(buf)
        .map(Some)
        .map_err(|_| ParseError::Malformed("header is not UTF-8".into()))
}

/// A JSON response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Serialize `value` as the response body.
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body },
            Err(e) => {
                log::error!("Failed to serialize response: {e}");
                Self::message(500, "An unexpected error occurred.")
            },
        }
    }

    /// `{"message": ...}` body.
    pub fn message(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "message": message }).to_string(),
        }
    }

    /// Write status line, headers and body.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(
            out,
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            reason_phrase(self.status),
            self.body.len()
        )?;
        out.write_all(self.body.as_bytes())?;
        out.flush()
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
