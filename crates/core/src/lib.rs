//! `viewsmith-core` — shared contract between the shell and the generation API.
//!
//! This crate contains the wire shapes, identifiers, and pure submission rules
//! both sides agree on. It has no IO and compiles unchanged for native and
//! WASM targets.

pub mod error;
pub mod generate;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use generate::{
    DEFAULT_MODEL, ErrorDetail, GenerateRequest, GenerateResponse, SubmitError, can_submit,
};
pub use id::UserId;
