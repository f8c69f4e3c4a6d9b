//! Resource id decoding.
//!
//! A non-empty `resource_id` string is the protocol's URL-safe base64
//! encoding of a chain of 4-byte big-endian segment identifiers. This
//! codec only needs to reproduce that byte chain on the wire — it never
//! interprets the individual segments, so decoding is a single base64
//! pass.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

use crate::error::EncodeError;

/// Decode a resource id string into its raw wire bytes.
///
/// Fails with [`EncodeError::InvalidBase64`] if `id` isn't valid
/// URL-safe base64.
pub fn decode_resource_id(id: &str) -> Result<Vec<u8>, EncodeError> {
    URL_SAFE
        .decode(id)
        .or_else(|_| base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(id))
        .map_err(|_| EncodeError::InvalidBase64 {
            name: "resource_id".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_valid_resource_id() {
        let encoded = URL_SAFE.encode([1u8, 2, 3, 4]);
        let decoded = decode_resource_id(&encoded).unwrap();
        assert_eq!(decoded, vec![1, 2, 3, 4]);
    }

    #[test]
    fn decodes_unpadded_resource_id() {
        let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode([1u8, 2, 3, 4]);
        let decoded = decode_resource_id(&encoded).unwrap();
        assert_eq!(decoded, vec![1, 2, 3, 4]);
    }

    #[test]
    fn rejects_malformed_base64() {
        let err = decode_resource_id("not valid base64!!").unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidBase64 {
                name: "resource_id".to_string()
            }
        );
    }
}
