//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - credentials: Form values, devices and validation rules
//! - suggestion: Password suggestion contract and action state
//! - send: Simulated transmission outcome and state
//! - common: Shared UI types

pub mod common;
pub mod credentials;
pub mod send;
pub mod suggestion;

pub use common::*;
pub use credentials::*;
pub use send::*;
pub use suggestion::*;
