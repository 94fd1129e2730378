//! Contact hand-off URI construction.
//!
//! The contact form never talks to a server; it builds a `mailto:` URI
//! and hands the visitor to their own mail client.

use urlencoding::encode;

/// Subject used when the visitor leaves the field empty.
pub const DEFAULT_SUBJECT: &str = "Hello from your portfolio";

/// A submitted contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Build the `mailto:` URI handed to the system mail client.
    ///
    /// Subject and body are percent-encoded; the body carries the
    /// sender's name and reply address above the message itself.
    pub fn mailto_uri(&self, to: &str) -> String {
        let subject = match self.subject.trim() {
            "" => DEFAULT_SUBJECT,
            trimmed => trimmed,
        };
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage: {}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            encode(subject),
            encode(&body)
        )
    }
}
