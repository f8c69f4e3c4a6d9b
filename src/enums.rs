//! Public (SDK-surface) enums and their wire-protocol counterparts.
//!
//! The two-level mapping (textual → public enum → wire enum) exists because
//! public enum identifiers are stable in the SDK surface but wire ids are
//! stable in the protocol; they happen not to coincide. The two enum types
//! are kept distinct on purpose — do not collapse them.

/// Consistency level requested for a read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyLevel {
    Strong,
    Bounded,
    Session,
    Eventual,
    ConsistentPrefix,
}

/// `ConsistencyLevel`'s wire-protocol encoding. Ids are protocol-stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireConsistencyLevel {
    Strong = 0,
    Bounded = 1,
    Session = 2,
    Eventual = 3,
    ConsistentPrefix = 4,
}

impl From<ConsistencyLevel> for WireConsistencyLevel {
    fn from(value: ConsistencyLevel) -> Self {
        match value {
            ConsistencyLevel::Strong => WireConsistencyLevel::Strong,
            ConsistencyLevel::Bounded => WireConsistencyLevel::Bounded,
            ConsistencyLevel::Session => WireConsistencyLevel::Session,
            ConsistencyLevel::Eventual => WireConsistencyLevel::Eventual,
            ConsistencyLevel::ConsistentPrefix => WireConsistencyLevel::ConsistentPrefix,
        }
    }
}

/// Payload serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSerializationFormat {
    JsonText,
    CosmosBinary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireContentSerializationFormat {
    JsonText = 0,
    CosmosBinary = 1,
}

impl From<ContentSerializationFormat> for WireContentSerializationFormat {
    fn from(value: ContentSerializationFormat) -> Self {
        match value {
            ContentSerializationFormat::JsonText => WireContentSerializationFormat::JsonText,
            ContentSerializationFormat::CosmosBinary => WireContentSerializationFormat::CosmosBinary,
        }
    }
}

/// Direction a feed enumeration should walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerationDirection {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireEnumerationDirection {
    Forward = 1,
    Reverse = 2,
}

impl From<EnumerationDirection> for WireEnumerationDirection {
    fn from(value: EnumerationDirection) -> Self {
        match value {
            EnumerationDirection::Forward => WireEnumerationDirection::Forward,
            EnumerationDirection::Reverse => WireEnumerationDirection::Reverse,
        }
    }
}

/// State of a fanned-out operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanoutOperationState {
    Started,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireFanoutOperationState {
    Started = 1,
    Completed = 2,
}

impl From<FanoutOperationState> for WireFanoutOperationState {
    fn from(value: FanoutOperationState) -> Self {
        match value {
            FanoutOperationState::Started => WireFanoutOperationState::Started,
            FanoutOperationState::Completed => WireFanoutOperationState::Completed,
        }
    }
}

/// Indexing directive for a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexingDirective {
    Default,
    Exclude,
    Include,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireIndexingDirective {
    Default = 0,
    Exclude = 1,
    Include = 2,
}

impl From<IndexingDirective> for WireIndexingDirective {
    fn from(value: IndexingDirective) -> Self {
        match value {
            IndexingDirective::Default => WireIndexingDirective::Default,
            IndexingDirective::Exclude => WireIndexingDirective::Exclude,
            IndexingDirective::Include => WireIndexingDirective::Include,
        }
    }
}

/// Directive for an in-flight collection migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateCollectionDirective {
    Freeze,
    Thaw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireMigrateCollectionDirective {
    Freeze = 0,
    Thaw = 1,
}

impl From<MigrateCollectionDirective> for WireMigrateCollectionDirective {
    fn from(value: MigrateCollectionDirective) -> Self {
        match value {
            MigrateCollectionDirective::Freeze => WireMigrateCollectionDirective::Freeze,
            MigrateCollectionDirective::Thaw => WireMigrateCollectionDirective::Thaw,
        }
    }
}

/// Backing storage tier for an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStorageType {
    Standard,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireRemoteStorageType {
    Standard = 1,
    Premium = 2,
}

impl From<RemoteStorageType> for WireRemoteStorageType {
    fn from(value: RemoteStorageType) -> Self {
        match value {
            RemoteStorageType::Standard => WireRemoteStorageType::Standard,
            RemoteStorageType::Premium => WireRemoteStorageType::Premium,
        }
    }
}

/// Key scheme used to resume a read-feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFeedKeyType {
    ResourceId,
    EffectivePartitionKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireReadFeedKeyType {
    ResourceId = 0,
    EffectivePartitionKey = 1,
}

impl From<ReadFeedKeyType> for WireReadFeedKeyType {
    fn from(value: ReadFeedKeyType) -> Self {
        match value {
            ReadFeedKeyType::ResourceId => WireReadFeedKeyType::ResourceId,
            ReadFeedKeyType::EffectivePartitionKey => WireReadFeedKeyType::EffectivePartitionKey,
        }
    }
}

/// The operation a [`crate::request::Request`] is performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpType {
    Create,
    Delete,
    ExecuteJavaScript,
    Query,
    SqlQuery,
    Read,
    ReadFeed,
    Replace,
    Upsert,
}

/// The kind of resource a [`crate::request::Request`] addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Attachment,
    Conflict,
    Database,
    Document,
    DocumentCollection,
    Offer,
    PartitionKeyRange,
    Permission,
    Schema,
    StoredProcedure,
    Trigger,
    User,
    UserDefinedFunction,
    UserDefinedType,
}

/// Case-insensitively parse a textual value into its public enum, then
/// return the small-integer wire id that value maps to.
///
/// This is the single dispatch point §4.4.2's "Enum-mapped headers" rule
/// describes: step (a) (text → public enum) and step (b) (public enum →
/// wire enum) are fused here since nothing in this crate ever needs the
/// public enum value on its own once it's been validated.
pub fn enum_header_wire_id(header_name: &str, value: &str) -> Option<u8> {
    let lower = value.to_ascii_lowercase();
    match header_name {
        "x-ms-consistency-level" => match lower.as_str() {
            "strong" => Some(WireConsistencyLevel::from(ConsistencyLevel::Strong) as u8),
            "bounded" => Some(WireConsistencyLevel::from(ConsistencyLevel::Bounded) as u8),
            "session" => Some(WireConsistencyLevel::from(ConsistencyLevel::Session) as u8),
            "eventual" => Some(WireConsistencyLevel::from(ConsistencyLevel::Eventual) as u8),
            "consistentprefix" => {
                Some(WireConsistencyLevel::from(ConsistencyLevel::ConsistentPrefix) as u8)
            }
            _ => None,
        },
        "x-ms-documentdb-content-serialization-format" => match lower.as_str() {
            "jsontext" => Some(
                WireContentSerializationFormat::from(ContentSerializationFormat::JsonText) as u8,
            ),
            "cosmosbinary" => Some(
                WireContentSerializationFormat::from(ContentSerializationFormat::CosmosBinary)
                    as u8,
            ),
            _ => None,
        },
        "x-ms-enumeration-direction" => match lower.as_str() {
            "forward" => Some(WireEnumerationDirection::from(EnumerationDirection::Forward) as u8),
            "reverse" => Some(WireEnumerationDirection::from(EnumerationDirection::Reverse) as u8),
            _ => None,
        },
        "x-ms-fanout-operation-state" => match lower.as_str() {
            "started" => Some(WireFanoutOperationState::from(FanoutOperationState::Started) as u8),
            "completed" => {
                Some(WireFanoutOperationState::from(FanoutOperationState::Completed) as u8)
            }
            _ => None,
        },
        "x-ms-indexing-directive" => match lower.as_str() {
            "default" => Some(WireIndexingDirective::from(IndexingDirective::Default) as u8),
            "exclude" => Some(WireIndexingDirective::from(IndexingDirective::Exclude) as u8),
            "include" => Some(WireIndexingDirective::from(IndexingDirective::Include) as u8),
            _ => None,
        },
        "x-ms-migratecollection-directive" => match lower.as_str() {
            "freeze" => Some(WireMigrateCollectionDirective::from(
                MigrateCollectionDirective::Freeze,
            ) as u8),
            "thaw" => {
                Some(WireMigrateCollectionDirective::from(MigrateCollectionDirective::Thaw) as u8)
            }
            _ => None,
        },
        "x-ms-remote-storage-type" => match lower.as_str() {
            "standard" => Some(WireRemoteStorageType::from(RemoteStorageType::Standard) as u8),
            "premium" => Some(WireRemoteStorageType::from(RemoteStorageType::Premium) as u8),
            _ => None,
        },
        "x-ms-read-feed-key-type" => match lower.as_str() {
            "resourceid" => Some(WireReadFeedKeyType::from(ReadFeedKeyType::ResourceId) as u8),
            "effectivepartitionkey" => {
                Some(WireReadFeedKeyType::from(ReadFeedKeyType::EffectivePartitionKey) as u8)
            }
            _ => None,
        },
        _ => None,
    }
}

/// Reverse of [`enum_header_wire_id`]: given the header name an enum-mapped
/// token came from and the wire byte a decoder read off it, return the
/// textual public-enum variant name that byte stands for.
///
/// The decoder itself never calls this — §4.5 leaves re-mapping wire enums
/// back to public enums as the caller's responsibility — but a caller that
/// wants it doesn't have to re-derive the table in [`enum_header_wire_id`]
/// by hand.
pub fn lookup_enum(header_name: &str, wire_byte: u8) -> Option<&'static str> {
    match header_name {
        "x-ms-consistency-level" => match wire_byte {
            0 => Some("Strong"),
            1 => Some("Bounded"),
            2 => Some("Session"),
            3 => Some("Eventual"),
            4 => Some("ConsistentPrefix"),
            _ => None,
        },
        "x-ms-documentdb-content-serialization-format" => match wire_byte {
            0 => Some("JsonText"),
            1 => Some("CosmosBinary"),
            _ => None,
        },
        "x-ms-enumeration-direction" => match wire_byte {
            1 => Some("Forward"),
            2 => Some("Reverse"),
            _ => None,
        },
        "x-ms-fanout-operation-state" => match wire_byte {
            1 => Some("Started"),
            2 => Some("Completed"),
            _ => None,
        },
        "x-ms-indexing-directive" => match wire_byte {
            0 => Some("Default"),
            1 => Some("Exclude"),
            2 => Some("Include"),
            _ => None,
        },
        "x-ms-migratecollection-directive" => match wire_byte {
            0 => Some("Freeze"),
            1 => Some("Thaw"),
            _ => None,
        },
        "x-ms-remote-storage-type" => match wire_byte {
            1 => Some("Standard"),
            2 => Some("Premium"),
            _ => None,
        },
        "x-ms-read-feed-key-type" => match wire_byte {
            0 => Some("ResourceId"),
            1 => Some("EffectivePartitionKey"),
            _ => None,
        },
        _ => None,
    }
}

/// True if `header_name` is one of the headers §4.4.2 maps through an enum.
pub fn is_enum_header(header_name: &str) -> bool {
    matches!(
        header_name,
        "x-ms-consistency-level"
            | "x-ms-documentdb-content-serialization-format"
            | "x-ms-enumeration-direction"
            | "x-ms-fanout-operation-state"
            | "x-ms-indexing-directive"
            | "x-ms-migratecollection-directive"
            | "x-ms-remote-storage-type"
            | "x-ms-read-feed-key-type"
    )
}
