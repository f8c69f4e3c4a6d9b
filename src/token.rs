//! A single typed cell bound to one [`RegistryEntry`].

use crate::error::EncodeError;
use crate::registry::RegistryEntry;
use crate::wire::Value;

/// A typed field with presence state, bound to a registry entry.
///
/// Invariant: `value`'s shape always matches `entry.wire_type`. The only way
/// to construct a `Token` is via [`Token::new`] (absent, default value) or
/// [`Token::set`] (present, caller-supplied value validated against the
/// entry's wire type).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    entry: &'static RegistryEntry,
    present: bool,
    value: Value,
}

impl Token {
    /// Construct an absent token carrying its registry entry's default
    /// value.
    pub fn new(entry: &'static RegistryEntry) -> Self {
        Token {
            entry,
            present: false,
            value: entry.default.clone(),
        }
    }

    /// Set this token's value, marking it present.
    ///
    /// Fails with [`EncodeError::DomainViolation`] if `value`'s shape
    /// doesn't match the registry entry's wire type — this is a programmer
    /// error, never a consequence of untrusted input, since every call site
    /// in this crate constructs `value` to already match.
    pub fn set(&mut self, value: Value) -> Result<(), EncodeError> {
        if value.wire_type() != self.entry.wire_type {
            log::error!(
                "domain violation: id {} expects {:?}, got value shaped as {:?}",
                self.entry.id.id(),
                self.entry.wire_type,
                value.wire_type()
            );
            return Err(EncodeError::DomainViolation {
                id: self.entry.id.id(),
                wire_type: self.entry.wire_type,
            });
        }
        self.value = value;
        self.present = true;
        Ok(())
    }

    pub fn entry(&self) -> &'static RegistryEntry {
        self.entry
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
