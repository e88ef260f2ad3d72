//! Small response bodies shared across handlers.

use serde::Serialize;

/// Acknowledgement for write-only submissions.
#[derive(Serialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}
