//! Outbound email. The server only needs fire-and-forget notifications
//! (agent onboarding), so the seam is a small trait with a logging
//! implementation as the default.

use log::info;

pub trait EmailSender: Send + Sync {
    fn send(&self, to: &str, subject: &str, body: &str);
}

/// Logs that a message was sent. The body is never logged: onboarding
/// emails contain temporary passwords.
pub struct LogMailer;

impl EmailSender for LogMailer {
    fn send(&self, to: &str, subject: &str, _body: &str) {
        info!("Email queued: to={}, subject={}", to, subject);
    }
}
