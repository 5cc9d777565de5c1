//! toksift - deterministic token classification.
//!
//! The heart of the crate is [`classifier::classify`]: a pure function
//! that partitions a JSON array of tokens into odd/even integers,
//! pure-alphabetic strings, and special strings, computes their integer
//! sum, and derives a reversed alternating-case string from every ASCII
//! letter in the input. Around it sit thin collaborators: request
//! decoding ([`request`]), the response envelope ([`response`]), identity
//! configuration ([`config`]), and the CLI definition ([`cli`]).

pub mod classifier;
pub mod cli;
pub mod config;
pub mod request;
pub mod response;

pub use classifier::{classify, ClassificationResult, ShapeError};
pub use config::Config;
pub use request::{decode_request, respond, DecodeError};
pub use response::ResponsePayload;
