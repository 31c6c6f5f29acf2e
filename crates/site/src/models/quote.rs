//! Quote request records.
//!
//! Quotes are write-only from the web handlers: the contact form inserts
//! them and nothing on the site reads them back.

/// Data for recording a new quote request.
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub name: String,
    pub email: String,
    pub message: String,
}
