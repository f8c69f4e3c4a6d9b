//! The Header Registry: a static, append-only catalog of every field this
//! codec recognizes.
//!
//! Ids are stable wire identifiers and are never reused. The table backing
//! [`lookup_by_id`] is declared once as a `const` array and is safe to share
//! across threads without synchronization — nothing about it is ever
//! mutated after the process starts.

use crate::wire::{Value, WireType};

/// Stable, dense identifiers for every token this codec knows about.
///
/// These double as the registry's array index (`HeaderId as u16` is the
/// wire id) and as the symbolic name callers use to address a token in a
/// [`crate::stream::HeaderStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum HeaderId {
    PayloadPresent = 0,
    ReplicaPath = 1,
    ConsistencyLevel = 2,
    ContentSerializationFormat = 3,
    EnumerationDirection = 4,
    FanoutOperationState = 5,
    IndexingDirective = 6,
    MigrateCollectionDirective = 7,
    RemoteStorageType = 8,
    ReadFeedKeyType = 9,
    AllowScanOnQuery = 10,
    CanCharge = 11,
    CanOfferReplaceComplete = 12,
    CanThrottle = 13,
    DisableRuPerMinuteUsage = 14,
    EmitVerboseTracesInQuery = 15,
    EnableLogging = 16,
    EnableLowPrecisionOrderBy = 17,
    ExcludeSystemProperties = 18,
    IsAutoScaleRequest = 19,
    IsFanout = 20,
    IsReadOnlyScript = 21,
    IsUserRequest = 22,
    PopulateCollectionThroughputInfo = 23,
    PopulatePartitionStatistics = 24,
    PopulateQueryMetrics = 25,
    PopulateQuotaInfo = 26,
    ProfileRequest = 27,
    ForceQueryScan = 28,
    ShareThroughput = 29,
    SupportSpatialLegacyCoordinates = 30,
    UsePolygonsSmallerThanAHemisphere = 31,
    BinaryId = 32,
    StartId = 33,
    EndId = 34,
    StartEpk = 35,
    EndEpk = 36,
    Date = 37,
    Match = 38,
    PageSize = 39,
    ResponseContinuationTokenLimit = 40,
    ContinuationToken = 41,
    ResourceId = 42,
    DatabaseName = 43,
    CollectionName = 44,
    UserName = 45,
    UserDefinedTypeName = 46,
    DocumentName = 47,
    StoredProcedureName = 48,
    PermissionName = 49,
    UserDefinedFunctionName = 50,
    TriggerName = 51,
    ConflictName = 52,
    PartitionKeyRangeName = 53,
    SchemaName = 54,
    AttachmentName = 55,
    // Direct-coercion headers (§4.4.3): ordinary known headers with no
    // special-case handling beyond type-directed parsing.
    Authorization = 56,
    SessionToken = 57,
    ActivityId = 58,
    PartitionKey = 59,
    Version = 60,
    ResourceTokenExpiry = 61,
    CollectionPartitionIndex = 62,
    CollectionServiceIndex = 63,
    TransportRequestId = 64,
}

/// Number of entries in the registry; also the exclusive upper bound on
/// valid [`HeaderId`] discriminants.
pub const REGISTRY_LEN: usize = 65;

impl HeaderId {
    /// The stable wire identifier for this field.
    pub fn id(self) -> u16 {
        self as u16
    }
}

/// One catalog entry: a stable id bound to a wire type, a required flag,
/// and the default value implied when the token is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub id: HeaderId,
    /// The exact textual header name this field is populated from, if any.
    /// Framing-derived and path-derived fields (e.g. `PayloadPresent`,
    /// `DatabaseName`) have no direct header counterpart and carry `None`.
    pub header_name: Option<&'static str>,
    pub wire_type: WireType,
    pub required: bool,
    pub default: Value,
}

macro_rules! entry {
    ($id:ident, $name:expr, $wire:expr, $required:expr, $default:expr) => {
        RegistryEntry {
            id: HeaderId::$id,
            header_name: $name,
            wire_type: $wire,
            required: $required,
            default: $default,
        }
    };
}

/// The registry table, indexed by `HeaderId as usize`. Entries are declared
/// in ascending id order, matching [`crate::stream::HeaderStream::encode`]'s
/// emission order.
static REGISTRY: [RegistryEntry; REGISTRY_LEN] = [
    entry!(PayloadPresent, None, WireType::Byte, true, Value::Byte(0)),
    entry!(
        ReplicaPath,
        None,
        WireType::String,
        true,
        Value::String(String::new())
    ),
    entry!(
        ConsistencyLevel,
        Some("x-ms-consistency-level"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        ContentSerializationFormat,
        Some("x-ms-documentdb-content-serialization-format"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        EnumerationDirection,
        Some("x-ms-enumeration-direction"),
        WireType::Byte,
        false,
        Value::Byte(1)
    ),
    entry!(
        FanoutOperationState,
        Some("x-ms-fanout-operation-state"),
        WireType::Byte,
        false,
        Value::Byte(1)
    ),
    entry!(
        IndexingDirective,
        Some("x-ms-indexing-directive"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        MigrateCollectionDirective,
        Some("x-ms-migratecollection-directive"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        RemoteStorageType,
        Some("x-ms-remote-storage-type"),
        WireType::Byte,
        false,
        Value::Byte(1)
    ),
    entry!(
        ReadFeedKeyType,
        Some("x-ms-read-feed-key-type"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        AllowScanOnQuery,
        Some("x-ms-documentdb-allow-scan-on-query"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        CanCharge,
        Some("x-ms-cancharge"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        CanOfferReplaceComplete,
        Some("x-ms-can-offer-replace-complete"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        CanThrottle,
        Some("x-ms-canthrottle"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        DisableRuPerMinuteUsage,
        Some("x-ms-documentdb-disable-ru-per-minute-usage"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        EmitVerboseTracesInQuery,
        Some("x-ms-documentdb-emit-verbose-traces-in-query"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        EnableLogging,
        Some("x-ms-documentdb-script-enablelogging"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        EnableLowPrecisionOrderBy,
        Some("x-ms-documentdb-query-enable-low-precision-order-by"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        ExcludeSystemProperties,
        Some("x-ms-exclude-system-properties"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        IsAutoScaleRequest,
        Some("x-ms-is-auto-scale-request"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        IsFanout,
        Some("x-ms-is-fanout-request"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        IsReadOnlyScript,
        Some("x-ms-is-readonly-script"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        IsUserRequest,
        Some("x-ms-is-user-request"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        PopulateCollectionThroughputInfo,
        Some("x-ms-documentdb-populatecollectionthroughputinfo"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        PopulatePartitionStatistics,
        Some("x-ms-documentdb-populatepartitionstatistics"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        PopulateQueryMetrics,
        Some("x-ms-documentdb-populatequerymetrics"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        PopulateQuotaInfo,
        Some("x-ms-documentdb-populatequotainfo"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        ProfileRequest,
        Some("x-ms-profile-request"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        ForceQueryScan,
        Some("x-ms-documentdb-force-query-scan"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        ShareThroughput,
        Some("x-ms-share-throughput"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        SupportSpatialLegacyCoordinates,
        Some("x-ms-documentdb-supportspatiallegacycoordinates"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        UsePolygonsSmallerThanAHemisphere,
        Some("x-ms-documentdb-usepolygonssmallerthanahemisphere"),
        WireType::Byte,
        false,
        Value::Byte(0)
    ),
    entry!(
        BinaryId,
        Some("x-ms-binary-id"),
        WireType::Bytes,
        false,
        Value::Bytes(Vec::new())
    ),
    entry!(
        StartId,
        Some("x-ms-start-id"),
        WireType::Bytes,
        false,
        Value::Bytes(Vec::new())
    ),
    entry!(
        EndId,
        Some("x-ms-end-id"),
        WireType::Bytes,
        false,
        Value::Bytes(Vec::new())
    ),
    entry!(
        StartEpk,
        Some("x-ms-start-epk"),
        WireType::Bytes,
        false,
        Value::Bytes(Vec::new())
    ),
    entry!(
        EndEpk,
        Some("x-ms-end-epk"),
        WireType::Bytes,
        false,
        Value::Bytes(Vec::new())
    ),
    entry!(
        Date,
        Some("x-date"),
        WireType::SmallString,
        false,
        Value::SmallString(String::new())
    ),
    entry!(
        Match,
        None,
        WireType::SmallString,
        false,
        Value::SmallString(String::new())
    ),
    entry!(PageSize, None, WireType::ULong, false, Value::ULong(0)),
    entry!(
        ResponseContinuationTokenLimit,
        Some("x-ms-documentdb-responsecontinuationtokenlimitinkb"),
        WireType::ULong,
        false,
        Value::ULong(0)
    ),
    entry!(
        ContinuationToken,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        ResourceId,
        None,
        WireType::Bytes,
        false,
        Value::Bytes(Vec::new())
    ),
    entry!(
        DatabaseName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        CollectionName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        UserName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        UserDefinedTypeName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        DocumentName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        StoredProcedureName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        PermissionName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        UserDefinedFunctionName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        TriggerName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        ConflictName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        PartitionKeyRangeName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        SchemaName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        AttachmentName,
        None,
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        Authorization,
        Some("authorization"),
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        SessionToken,
        Some("x-ms-session-token"),
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        ActivityId,
        Some("x-ms-activity-id"),
        WireType::Guid,
        false,
        Value::Guid([0; 16])
    ),
    entry!(
        PartitionKey,
        Some("x-ms-documentdb-partitionkey"),
        WireType::String,
        false,
        Value::String(String::new())
    ),
    entry!(
        Version,
        Some("x-ms-version"),
        WireType::SmallString,
        false,
        Value::SmallString(String::new())
    ),
    entry!(
        ResourceTokenExpiry,
        Some("x-ms-documentdb-expiry-seconds"),
        WireType::ULong,
        false,
        Value::ULong(0)
    ),
    entry!(
        CollectionPartitionIndex,
        Some("x-ms-collection-partition-index"),
        WireType::ULong,
        false,
        Value::ULong(0)
    ),
    entry!(
        CollectionServiceIndex,
        Some("x-ms-collection-service-index"),
        WireType::ULong,
        false,
        Value::ULong(0)
    ),
    entry!(
        TransportRequestId,
        Some("x-ms-transport-request-id"),
        WireType::LongLong,
        false,
        Value::LongLong(0)
    ),
];

/// Look up a registry entry by its stable wire id.
pub fn lookup_by_id(id: u16) -> Option<&'static RegistryEntry> {
    REGISTRY.get(id as usize)
}

/// Look up a registry entry by the exact textual header name it's populated
/// from. Case-exact, per the spec: the input map is produced by the SDK and
/// uses canonical casing.
pub fn lookup_by_header_name(name: &str) -> Option<&'static RegistryEntry> {
    REGISTRY
        .iter()
        .find(|entry| entry.header_name == Some(name))
}

/// Iterate every entry in ascending id order.
pub fn iter_ordered() -> impl Iterator<Item = &'static RegistryEntry> {
    REGISTRY.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id_matches_declared_order() {
        for (index, entry) in REGISTRY.iter().enumerate() {
            assert_eq!(entry.id.id() as usize, index);
        }
    }

    #[test]
    fn lookup_by_id_out_of_range_is_none() {
        assert!(lookup_by_id(REGISTRY_LEN as u16).is_none());
    }

    #[test]
    fn lookup_by_header_name_finds_consistency_level() {
        let entry = lookup_by_header_name("x-ms-consistency-level").expect("present");
        assert_eq!(entry.id, HeaderId::ConsistencyLevel);
    }

    #[test]
    fn lookup_by_header_name_unknown_is_none() {
        assert!(lookup_by_header_name("x-ms-not-a-real-header").is_none());
    }

    #[test]
    fn iter_ordered_is_ascending() {
        let ids: Vec<u16> = iter_ordered().map(|e| e.id.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
