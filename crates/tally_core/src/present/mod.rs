//! Presenter seam for user-facing output.
//!
//! # Responsibility
//! - Define the output contract between core logic and the console.
//!
//! # Invariants
//! - Core never writes to stdout/stderr directly; every confirmation,
//!   listing and error message flows through a `Presenter`.

/// Output seam for confirmations, listings and error messages.
///
/// Implementations decide framing and destination; the core hands over
/// one fully composed message per announcement.
pub trait Presenter {
    fn show(&self, message: &str);
}
