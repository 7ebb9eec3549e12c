//! Authorization

pub mod acl;

pub use acl::{AccessControlLayer, Owned};
