//! Blocking TCP listener for the site API.
//!
//! Connections are handled one at a time on the calling thread. Each
//! connection carries exactly one request.

use std::io::{BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::time::Duration;

use termfolio_types::error::Result;

use crate::http::{HttpRequest, HttpResponse};
use crate::router::Router;

/// Read timeout for a single connection.
const READ_TIMEOUT_SECS: u64 = 10;

/// Serves the site API (contact form and blog) over HTTP.
#[derive(Debug)]
pub struct SiteServer {
    listener: TcpListener,
    router: Router,
}

impl SiteServer {
    /// Bind to `addr`.
    pub fn bind(addr: impl ToSocketAddrs, router: Router) -> Result<Self> {
        let listener = TcpListener::bind(addr)?;
        log::info!("API server listening on {}", listener.local_addr()?);
        Ok(Self { listener, router })
    }

    /// Address actually bound (useful when binding port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept and answer connections until the listener fails.
    pub fn serve_forever(&mut self) -> Result<()> {
        loop {
            self.serve_one()?;
        }
    }

    /// Accept one connection and answer it. Per-connection failures are
    /// logged; only a failing listener is an error.
    pub fn serve_one(&mut self) -> Result<()> {
        let (stream, peer) = self.listener.accept()?;
        log::debug!("Connection from {peer}");
        if let Err(e) = self.handle_tcp(stream) {
            log::warn!("Connection from {peer} failed: {e}");
        }
        Ok(())
    }

    fn handle_tcp(&mut self, stream: TcpStream) -> Result<()> {
        stream.set_read_timeout(Some(Duration::from_secs(READ_TIMEOUT_SECS)))?;
        self.handle_connection(stream)
    }

    /// Read one request from `stream` and write the response back.
    pub fn handle_connection<S: Read + Write>(&mut self, mut stream: S) -> Result<()> {
        let parsed = {
            let mut reader = BufReader::new(&mut stream);
            HttpRequest::read_from(&mut reader)
        };

        let response = match parsed {
            Ok(req) => {
                let resp = self.router.route(&req);
                log::info!("{} {} -> {}", req.method, req.path, resp.status);
                resp
            },
            Err(e) => match e.status() {
                Some(status) => {
                    log::warn!("Rejected request: {e}");
                    HttpResponse::message(status, &e.to_string())
                },
                None => {
                    log::debug!("Dropped connection: {e}");
                    return Ok(());
                },
            },
        };

        response.write_to(&mut stream)?;
        Ok(())
    }
}
