//! Error taxonomy for the token stream codec.
//!
//! Every failure the codec can produce is represented here; nothing is
//! recovered internally and no partial frame or partially-populated stream
//! is ever handed back to a caller.

use thiserror::Error;

use crate::wire::WireType;

/// Failures that can occur while turning a [`crate::request::Request`] into
/// an encoded token stream.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EncodeError {
    /// A header's textual value was outside its declared domain: a bad enum
    /// name, an unparseable number, or an out-of-range integer.
    #[error("invalid value for header {name:?}: {value:?}")]
    InvalidHeaderValue { name: String, value: String },

    /// A header that is supposed to carry base64 failed to decode.
    #[error("invalid base64 for header {name:?}")]
    InvalidBase64 { name: String },

    /// A name-based resource address failed position-0 validation.
    #[error("invalid resource address: {address:?}")]
    InvalidResourceAddress { address: String },

    /// A string/bytes value exceeded the wire type's length ceiling.
    #[error("value for header {name:?} is too long ({len} > {max})")]
    ValueTooLong { name: String, len: usize, max: usize },

    /// Programmer error: [`crate::token::Token::set`] was called with a
    /// value whose shape doesn't match the registry entry's wire type.
    #[error("domain violation setting id {id}: value shape doesn't match {wire_type:?}")]
    DomainViolation { id: u16, wire_type: WireType },
}

/// Failures that can occur while turning an encoded token stream back into
/// typed tokens.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DecodeError {
    /// The buffer ended in the middle of a token.
    #[error("buffer truncated mid-token")]
    Truncated,

    /// The declared wire type of a known id disagreed with what was on the
    /// wire.
    #[error("type mismatch for id {id}: expected {expected:?}, got {got:?}")]
    TypeMismatch {
        id: u16,
        expected: WireType,
        got: WireType,
    },

    /// The type byte on the wire isn't one of the recognized wire types, so
    /// the payload length (and therefore how far to advance) can't be
    /// determined.
    #[error("unknown wire type byte 0x{byte:02X}")]
    UnknownType { byte: u8 },
}
