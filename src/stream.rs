//! The Header Stream: an ordered, id-keyed collection of tokens and the
//! unit of encode/decode.

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{DecodeError, EncodeError};
use crate::registry::{self, HeaderId};
use crate::token::Token;
use crate::wire::{Value, WireType};

/// An ordered collection of tokens, one per registry entry.
///
/// Construction always starts from [`HeaderStream::new`], which allocates
/// one absent [`Token`] per registry entry. `set`/`get` address a token by
/// its stable [`HeaderId`]; `encode`/`decode` move the whole stream to and
/// from the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStream {
    tokens: Vec<Token>,
}

impl Default for HeaderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderStream {
    /// A fresh stream with every token absent, carrying its registry
    /// entry's default value.
    pub fn new() -> Self {
        HeaderStream {
            tokens: registry::iter_ordered().map(Token::new).collect(),
        }
    }

    /// Set the value of the token addressed by `id`.
    pub fn set(&mut self, id: HeaderId, value: Value) -> Result<(), EncodeError> {
        self.tokens[id.id() as usize].set(value)
    }

    /// Read the value of the token addressed by `id`, if present.
    pub fn get(&self, id: HeaderId) -> Option<&Value> {
        let token = &self.tokens[id.id() as usize];
        token.is_present().then(|| token.value())
    }

    /// True if the token addressed by `id` has been set.
    pub fn is_present(&self, id: HeaderId) -> bool {
        self.tokens[id.id() as usize].is_present()
    }

    /// Iterate only the present tokens, in ascending id order.
    pub fn present_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_present())
    }

    /// Encode every present token, in ascending id order, as
    /// `id (u16 LE) | type_byte | payload`. Absent tokens are omitted
    /// entirely.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = BytesMut::new();
        for token in self.present_tokens() {
            log::trace!("encoding token {:?}", token.entry().id);
            out.put_u16_le(token.entry().id.id());
            out.put_u8(token.value().wire_type().as_byte());
            encode_value(token.value(), &mut out);
        }
        out.to_vec()
    }

    /// Decode a stream from a buffer containing a concatenation of tokens
    /// in any order, terminated by end-of-buffer.
    ///
    /// Unknown ids are skipped (the type byte alone determines payload
    /// length), so old readers stay forward-compatible with new fields.
    /// A known id whose wire type disagrees with what's on the wire is a
    /// hard decode failure: [`DecodeError::TypeMismatch`].
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        let mut stream = HeaderStream::new();
        let mut cursor: &[u8] = buf;

        while cursor.has_remaining() {
            if cursor.remaining() < 2 {
                return Err(DecodeError::Truncated);
            }
            let id = cursor.get_u16_le();

            if !cursor.has_remaining() {
                return Err(DecodeError::Truncated);
            }
            let type_byte = cursor.get_u8();
            let wire_type = WireType::from_byte(type_byte)?;

            let value = decode_value(wire_type, &mut cursor)?;

            match registry::lookup_by_id(id) {
                Some(entry) => {
                    if entry.wire_type != wire_type {
                        return Err(DecodeError::TypeMismatch {
                            id,
                            expected: entry.wire_type,
                            got: wire_type,
                        });
                    }
                    stream.tokens[id as usize]
                        .set(value)
                        .expect("wire type checked above");
                }
                None => {
                    log::debug!("decode: skipping unknown id {id}");
                }
            }
        }

        Ok(stream)
    }
}

fn encode_value(value: &Value, out: &mut BytesMut) {
    match value {
        Value::Byte(b) => out.put_u8(*b),
        Value::Bytes(bytes) => {
            out.put_u8(bytes.len() as u8);
            out.put_slice(bytes);
        }
        Value::SmallString(s) => {
            out.put_u8(s.len() as u8);
            out.put_slice(s.as_bytes());
        }
        Value::String(s) => {
            out.put_u16_le(s.len() as u16);
            out.put_slice(s.as_bytes());
        }
        Value::ULongString(s) => {
            out.put_u32_le(s.len() as u32);
            out.put_slice(s.as_bytes());
        }
        Value::Guid(bytes) => out.put_slice(bytes),
        Value::Long(v) => out.put_i32_le(*v),
        Value::ULong(v) => out.put_u32_le(*v),
        Value::LongLong(v) => out.put_i64_le(*v),
        Value::Double(v) => out.put_f64_le(*v),
    }
}

fn decode_value(wire_type: WireType, cursor: &mut &[u8]) -> Result<Value, DecodeError> {
    match wire_type {
        WireType::Byte => {
            if !cursor.has_remaining() {
                return Err(DecodeError::Truncated);
            }
            Ok(Value::Byte(cursor.get_u8()))
        }
        WireType::Bytes => {
            let bytes = take_length_prefixed_u8(cursor)?;
            Ok(Value::Bytes(bytes))
        }
        WireType::SmallString => {
            let bytes = take_length_prefixed_u8(cursor)?;
            Ok(Value::SmallString(String::from_utf8_lossy(&bytes).into_owned()))
        }
        WireType::String => {
            if cursor.remaining() < 2 {
                return Err(DecodeError::Truncated);
            }
            let len = cursor.get_u16_le() as usize;
            let bytes = take_exact(cursor, len)?;
            Ok(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        }
        WireType::ULongString => {
            if cursor.remaining() < 4 {
                return Err(DecodeError::Truncated);
            }
            let len = cursor.get_u32_le() as usize;
            let bytes = take_exact(cursor, len)?;
            Ok(Value::ULongString(String::from_utf8_lossy(&bytes).into_owned()))
        }
        WireType::Guid => {
            if cursor.remaining() < 16 {
                return Err(DecodeError::Truncated);
            }
            let mut buf = [0u8; 16];
            cursor.copy_to_slice(&mut buf);
            Ok(Value::Guid(buf))
        }
        WireType::Long => {
            if cursor.remaining() < 4 {
                return Err(DecodeError::Truncated);
            }
            Ok(Value::Long(cursor.get_i32_le()))
        }
        WireType::ULong => {
            if cursor.remaining() < 4 {
                return Err(DecodeError::Truncated);
            }
            Ok(Value::ULong(cursor.get_u32_le()))
        }
        WireType::LongLong => {
            if cursor.remaining() < 8 {
                return Err(DecodeError::Truncated);
            }
            Ok(Value::LongLong(cursor.get_i64_le()))
        }
        WireType::Double => {
            if cursor.remaining() < 8 {
                return Err(DecodeError::Truncated);
            }
            Ok(Value::Double(cursor.get_f64_le()))
        }
    }
}

/// Read a 1-byte length prefix followed by that many raw bytes (the shared
/// layout of `Bytes` and `SmallString`).
fn take_length_prefixed_u8(cursor: &mut &[u8]) -> Result<Vec<u8>, DecodeError> {
    if !cursor.has_remaining() {
        return Err(DecodeError::Truncated);
    }
    let len = cursor.get_u8() as usize;
    take_exact(cursor, len)
}

fn take_exact(cursor: &mut &[u8], len: usize) -> Result<Vec<u8>, DecodeError> {
    if cursor.remaining() < len {
        return Err(DecodeError::Truncated);
    }
    let mut buf = vec![0u8; len];
    cursor.copy_to_slice(&mut buf);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_omits_absent_tokens() {
        let mut stream = HeaderStream::new();
        stream.set(HeaderId::PayloadPresent, Value::Byte(1)).unwrap();
        let encoded = stream.encode();
        assert_eq!(encoded.len(), 2 + 1 + 1);
    }

    #[test]
    fn round_trip_preserves_present_tokens() {
        let mut stream = HeaderStream::new();
        stream.set(HeaderId::PayloadPresent, Value::Byte(1)).unwrap();
        stream
            .set(HeaderId::DatabaseName, Value::String("dbA".into()))
            .unwrap();
        stream.set(HeaderId::PageSize, Value::ULong(100)).unwrap();

        let encoded = stream.encode();
        let decoded = HeaderStream::decode(&encoded).unwrap();

        assert_eq!(decoded.get(HeaderId::PayloadPresent), Some(&Value::Byte(1)));
        assert_eq!(
            decoded.get(HeaderId::DatabaseName),
            Some(&Value::String("dbA".into()))
        );
        assert_eq!(decoded.get(HeaderId::PageSize), Some(&Value::ULong(100)));
        assert_eq!(decoded, stream);
    }

    #[test]
    fn decode_is_order_independent() {
        let mut a = HeaderStream::new();
        a.set(HeaderId::PayloadPresent, Value::Byte(1)).unwrap();
        a.set(HeaderId::PageSize, Value::ULong(42)).unwrap();
        let encoded_ascending = a.encode();

        // splice the two tokens in reverse order
        let mid = 2 + 1 + 1; // PayloadPresent token length
        let mut reordered = Vec::new();
        reordered.extend_from_slice(&encoded_ascending[mid..]);
        reordered.extend_from_slice(&encoded_ascending[..mid]);

        let decoded_ascending = HeaderStream::decode(&encoded_ascending).unwrap();
        let decoded_reordered = HeaderStream::decode(&reordered).unwrap();
        assert_eq!(decoded_ascending, decoded_reordered);
    }

    #[test]
    fn decode_skips_unknown_id_forward_compat() {
        let mut stream = HeaderStream::new();
        stream.set(HeaderId::PayloadPresent, Value::Byte(1)).unwrap();
        let mut encoded = stream.encode();

        // splice in a synthetic unknown token: id=0xFFFF, String("hi")
        encoded.extend_from_slice(&0xFFFFu16.to_le_bytes());
        encoded.push(WireType::String.as_byte());
        encoded.extend_from_slice(&2u16.to_le_bytes());
        encoded.extend_from_slice(b"hi");

        let decoded = HeaderStream::decode(&encoded).unwrap();
        assert_eq!(decoded, stream);
    }

    #[test]
    fn decode_rejects_type_mismatch_on_known_id() {
        let mut encoded = Vec::new();
        encoded.extend_from_slice(&HeaderId::PayloadPresent.id().to_le_bytes());
        encoded.push(WireType::Long.as_byte());
        encoded.extend_from_slice(&1i32.to_le_bytes());

        let err = HeaderStream::decode(&encoded).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                id: HeaderId::PayloadPresent.id(),
                expected: WireType::Byte,
                got: WireType::Long,
            }
        );
    }

    #[test]
    fn decode_truncated_mid_token_fails() {
        let mut encoded = Vec::new();
        encoded.extend_from_slice(&HeaderId::DatabaseName.id().to_le_bytes());
        encoded.push(WireType::String.as_byte());
        encoded.extend_from_slice(&10u16.to_le_bytes()); // claims 10 bytes
        encoded.extend_from_slice(b"short"); // only 5 present

        assert_eq!(HeaderStream::decode(&encoded), Err(DecodeError::Truncated));
    }

    #[test]
    fn decode_unknown_type_byte_fails() {
        let mut encoded = Vec::new();
        encoded.extend_from_slice(&0u16.to_le_bytes());
        encoded.push(0xFF);
        assert_eq!(
            HeaderStream::decode(&encoded),
            Err(DecodeError::UnknownType { byte: 0xFF })
        );
    }
}
