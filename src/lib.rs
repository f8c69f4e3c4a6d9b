//! Translates a generic, string-keyed request into the compact binary
//! token stream carried by direct-connectivity requests to replica
//! servers, and back.
//!
//! The pipeline runs leaves-first: a [`wire::WireType`]/[`wire::Value`]
//! pair describes one on-the-wire payload shape, a [`registry`] binds
//! stable ids to those shapes, a [`token::Token`] is one such binding with
//! presence state, a [`stream::HeaderStream`] is the ordered collection of
//! all of them, and [`projector`] is what actually populates one from a
//! [`request::Request`].

pub mod config;
pub mod enums;
pub mod error;
pub mod path;
pub mod projector;
pub mod registry;
pub mod request;
pub mod resource_id;
pub mod stream;
pub mod token;
pub mod wire;

#[cfg(test)]
mod tests;

pub use config::CodecConfig;
pub use error::{DecodeError, EncodeError};
pub use projector::project;
pub use request::{Headers, Request};
pub use stream::HeaderStream;
