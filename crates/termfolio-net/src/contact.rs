//! Contact form submission.
//!
//! Validates the four form fields and hands the message to a [`Mailer`].
//! The shipped mailer only simulates delivery.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::Value;

use termfolio_types::error::{Result, TermfolioError};

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    /// Pull the four fields out of a JSON object. Returns `None` if any is
    /// missing, empty, or not a string.
    fn from_json(body: &Value) -> Option<Self> {
        let field = |name: &str| {
            body.get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Some(Self {
            name: field("name")?,
            email: field("email")?,
            subject: field("subject")?,
            message: field("message")?,
        })
    }
}

/// JSON body returned to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReply {
    pub success: bool,
    pub message: String,
}

/// Status code plus reply body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactResponse {
    pub status: u16,
    pub body: ContactReply,
}

impl ContactResponse {
    fn new(status: u16, success: bool, message: &str) -> Self {
        Self {
            status,
            body: ContactReply {
                success,
                message: message.to_string(),
            },
        }
    }
}

/// Delivers contact messages.
pub trait Mailer {
    fn send(&mut self, request: &ContactRequest) -> Result<()>;
}

/// Pretends to send mail, succeeding with a fixed probability.
#[derive(Debug)]
pub struct SimulatedMailer<R: Rng = StdRng> {
    rng: R,
    success_rate: f64,
}

impl SimulatedMailer<StdRng> {
    /// Seeded from OS entropy.
    pub fn from_entropy(success_rate: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), success_rate)
    }
}

impl<R: Rng> SimulatedMailer<R> {
    pub fn with_rng(rng: R, success_rate: f64) -> Self {
        Self {
            rng,
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }
}

impl<R: Rng> Mailer for SimulatedMailer<R> {
    fn send(&mut self, request: &ContactRequest) -> Result<()> {
        if self.rng.gen_bool(self.success_rate) {
            log::info!("Simulated email sending successful.");
            Ok(())
        } else {
            log::error!("Simulated email sending failed.");
            Err(TermfolioError::Mail(format!(
                "simulated delivery failure for {}",
                request.email
            )))
        }
    }
}

/// Handle a contact form POST body.
pub fn handle_contact(body: &[u8], mailer: &mut dyn Mailer) -> ContactResponse {
    let json: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            log::error!("Error processing contact form: {e}");
            return ContactResponse::new(500, false, "An unexpected error occurred.");
        },
    };

    let Some(request) = ContactRequest::from_json(&json) else {
        return ContactResponse::new(400, false, "Missing required fields.");
    };

    log::info!(
        "Received contact form submission: name={:?} email={:?} subject={:?}",
        request.name,
        request.email,
        request.subject
    );

    match mailer.send(&request) {
        Ok(()) => ContactResponse::new(200, true, "Message sent successfully! (Simulation)"),
        Err(_) => ContactResponse::new(
            500,
            false,
            "Failed to send message. Please try again later. (Simulation)",
        ),
    }
}
