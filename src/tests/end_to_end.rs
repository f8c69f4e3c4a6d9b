//! Exercises the full request -> token stream -> wire bytes -> token stream
//! pipeline, as opposed to the per-module unit tests that live alongside
//! each module's own source.

use crate::config::CodecConfig;
use crate::enums::{OpType, ResourceType};
use crate::projector::project;
use crate::registry::HeaderId;
use crate::request::Request;
use crate::stream::HeaderStream;
use crate::wire::Value;

#[test]
fn name_based_read_survives_a_full_round_trip() {
    let mut request = Request::new(
        OpType::Read,
        ResourceType::Document,
        "/dbs/dbA/colls/cA/docs/d1",
        "rntbd://10.0.0.1:1234/",
    );
    request.is_name_based = true;
    request
        .headers
        .insert("x-ms-consistency-level", "Session")
        .insert("x-ms-max-item-count", "50")
        .insert("x-ms-activity-id", "6ba7b810-9dad-11d1-80b4-00c04fd430c8");

    let stream = project(&request, &CodecConfig::default()).unwrap();
    let bytes = stream.encode();
    let decoded = HeaderStream::decode(&bytes).unwrap();

    assert_eq!(decoded, stream);
    assert_eq!(
        decoded.get(HeaderId::DatabaseName),
        Some(&Value::String("dbA".into()))
    );
    assert_eq!(
        decoded.get(HeaderId::CollectionName),
        Some(&Value::String("cA".into()))
    );
    assert_eq!(decoded.get(HeaderId::ConsistencyLevel), Some(&Value::Byte(2)));
    assert_eq!(decoded.get(HeaderId::PageSize), Some(&Value::ULong(50)));
    assert_eq!(
        decoded.get(HeaderId::ActivityId),
        Some(&Value::Guid([
            0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4,
            0x30, 0xc8
        ]))
    );
}

#[test]
fn write_with_payload_round_trips_and_sets_payload_present() {
    let mut request = Request::new(
        OpType::Create,
        ResourceType::Document,
        "/dbs/dbA/colls/cA/docs",
        "rntbd://10.0.0.1:1234/",
    );
    request.content = Some(br#"{"id":"d1"}"#.to_vec());
    request.continuation = Some("continue-from-here".to_string());
    request.headers.insert("If-Match", "\"etag-prior\"");

    let stream = project(&request, &CodecConfig::default()).unwrap();
    let decoded = HeaderStream::decode(&stream.encode()).unwrap();

    assert_eq!(decoded.get(HeaderId::PayloadPresent), Some(&Value::Byte(1)));
    assert_eq!(
        decoded.get(HeaderId::ContinuationToken),
        Some(&Value::String("continue-from-here".into()))
    );
    assert_eq!(
        decoded.get(HeaderId::Match),
        Some(&Value::SmallString("\"etag-prior\"".into()))
    );
}

#[test]
fn a_reader_that_predates_a_field_skips_it_without_losing_the_rest() {
    let mut request = Request::new(
        OpType::Read,
        ResourceType::Document,
        "/dbs/dbA/colls/cA/docs/d1",
        "rntbd://10.0.0.1:1234/",
    );
    request.is_name_based = true;

    let stream = project(&request, &CodecConfig::default()).unwrap();
    let mut bytes = stream.encode();

    // simulate a hypothetical future field this build doesn't know about
    bytes.extend_from_slice(&0xBEEFu16.to_le_bytes());
    bytes.push(crate::wire::WireType::ULong.as_byte());
    bytes.extend_from_slice(&123u32.to_le_bytes());

    let decoded = HeaderStream::decode(&bytes).unwrap();
    assert_eq!(decoded, stream);
}

#[test]
fn invalid_resource_address_is_rejected_before_anything_is_encoded() {
    let mut request = Request::new(
        OpType::Read,
        ResourceType::Document,
        "/colls/cA/docs/d1",
        "rntbd://10.0.0.1:1234/",
    );
    request.is_name_based = true;

    let err = project(&request, &CodecConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        crate::error::EncodeError::InvalidResourceAddress { .. }
    ));
}
