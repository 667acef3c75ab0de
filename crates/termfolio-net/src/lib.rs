//! Networking: the contact form endpoint, the blog JSON API, and a small
//! blocking HTTP/1.1 listener that serves them.
//!
//! Mail delivery is simulated. Nothing here talks to a real mail service.

pub mod contact;
mod http;
mod router;
mod server;

pub use contact::{ContactReply, ContactRequest, ContactResponse, Mailer, SimulatedMailer, handle_contact};
pub use http::{HttpRequest, HttpResponse, MAX_BODY_BYTES, ParseError};
pub use router::Router;
pub use server::SiteServer;
