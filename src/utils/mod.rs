//! Utility functions

pub mod crypto;
pub mod validation;

pub use crypto::generate_invite_code;
pub use validation::field_messages;
