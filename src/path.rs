//! Name-based resource address parsing.
//!
//! Models the path walker as an index plus a small state machine over
//! fragment pairs, per the design note: the segment dictionary is closed
//! and small, so a static `match` suffices — no general-purpose path
//! grammar is needed.

use crate::error::EncodeError;
use crate::registry::HeaderId;

/// Walk `address` split on `/+`, dropping a leading empty fragment, and
/// return every `(segment, name)` pair recognized at its position.
///
/// Pair 0 must be `dbs`; any other segment there is
/// [`EncodeError::InvalidResourceAddress`]. Pairs 1-3 with an unrecognized
/// segment are silently skipped — this permits forward compatibility with
/// address shapes this codec doesn't yet know about, and matches the
/// source's behavior exactly.
pub fn parse_name_based_path(address: &str) -> Result<Vec<(HeaderId, String)>, EncodeError> {
    let fragments: Vec<&str> = address
        .split('/')
        .filter(|fragment| !fragment.is_empty())
        .collect();

    let mut out = Vec::new();
    let mut pair_index = 0usize;
    let mut cursor = 0usize;

    while cursor + 1 < fragments.len() {
        let segment = fragments[cursor];
        let name = fragments[cursor + 1];

        let target = match pair_index {
            0 => match segment {
                "dbs" => HeaderId::DatabaseName,
                other => {
                    return Err(EncodeError::InvalidResourceAddress {
                        address: format!("expected 'dbs' at position 0, got {other:?} in {address:?}"),
                    })
                }
            },
            1 => match segment {
                "colls" => HeaderId::CollectionName,
                "users" => HeaderId::UserName,
                "udts" => HeaderId::UserDefinedTypeName,
                _ => {
                    log::debug!("skipping unrecognized pair-1 segment {segment:?}");
                    cursor += 2;
                    pair_index += 1;
                    continue;
                }
            },
            2 => match segment {
                "docs" => HeaderId::DocumentName,
                "sprocs" => HeaderId::StoredProcedureName,
                "permissions" => HeaderId::PermissionName,
                "udfs" => HeaderId::UserDefinedFunctionName,
                "triggers" => HeaderId::TriggerName,
                "conflicts" => HeaderId::ConflictName,
                "pkranges" => HeaderId::PartitionKeyRangeName,
                "schemas" => HeaderId::SchemaName,
                _ => {
                    log::debug!("skipping unrecognized pair-2 segment {segment:?}");
                    cursor += 2;
                    pair_index += 1;
                    continue;
                }
            },
            3 => match segment {
                "attachments" => HeaderId::AttachmentName,
                _ => {
                    log::debug!("skipping unrecognized pair-3 segment {segment:?}");
                    cursor += 2;
                    pair_index += 1;
                    continue;
                }
            },
            _ => {
                // Pairs beyond index 3 are silently ignored, matching the source.
                break;
            }
        };

        out.push((target, name.to_string()));
        cursor += 2;
        pair_index += 1;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document_path() {
        let pairs = parse_name_based_path("/dbs/dbA/colls/cA/docs/d1").unwrap();
        assert_eq!(
            pairs,
            vec![
                (HeaderId::DatabaseName, "dbA".to_string()),
                (HeaderId::CollectionName, "cA".to_string()),
                (HeaderId::DocumentName, "d1".to_string()),
            ]
        );
    }

    #[test]
    fn handles_double_slashes() {
        let pairs = parse_name_based_path("//dbs//dbA/colls/cA").unwrap();
        assert_eq!(
            pairs,
            vec![
                (HeaderId::DatabaseName, "dbA".to_string()),
                (HeaderId::CollectionName, "cA".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_non_dbs_at_position_zero() {
        let err = parse_name_based_path("/colls/cA/docs/d1").unwrap_err();
        assert!(matches!(err, EncodeError::InvalidResourceAddress { .. }));
    }

    #[test]
    fn skips_unrecognized_segment_at_later_position() {
        let pairs = parse_name_based_path("/dbs/dbA/weird/xyz/docs/d1").unwrap();
        // pair-1 segment "weird" is unrecognized and skipped; pair-2 continues
        // from the next fragment pair, "docs"/"d1".
        assert_eq!(
            pairs,
            vec![
                (HeaderId::DatabaseName, "dbA".to_string()),
                (HeaderId::DocumentName, "d1".to_string()),
            ]
        );
    }

    #[test]
    fn pairs_beyond_index_three_are_ignored() {
        let pairs =
            parse_name_based_path("/dbs/dbA/colls/cA/docs/d1/attachments/a1/extra/trailing")
                .unwrap();
        assert_eq!(
            pairs,
            vec![
                (HeaderId::DatabaseName, "dbA".to_string()),
                (HeaderId::CollectionName, "cA".to_string()),
                (HeaderId::DocumentName, "d1".to_string()),
                (HeaderId::AttachmentName, "a1".to_string()),
            ]
        );
    }
}
