use chrono::{TimeZone, Utc};
use qslist::{
    BooleanCodec, DateTimeCodec, FloatCodec, FromStrCodec, IntegerCodec, ItemCodec, JsonCodec,
    ListCodec, StringCodec, TimestampCodec,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
struct Filter {
    field: String,
    value: i64,
}

#[test]
fn test_string_codec_accepts_anything() {
    assert_eq!(StringCodec.parse_item("").unwrap(), "");
    assert_eq!(StringCodec.parse_item("  spaced  ").unwrap(), "  spaced  ");
    assert_eq!(StringCodec.serialize_item(&"x".to_string()).unwrap(), "x");
}

#[test]
fn test_integer_codec_rejects_non_digits() {
    let codec = IntegerCodec::new();
    assert_eq!(codec.parse_item("42").unwrap(), 42);
    assert_eq!(codec.parse_item("-7").unwrap(), -7);
    assert!(codec.parse_item("42.5").is_err());
    assert!(codec.parse_item("four").is_err());
    assert!(codec.parse_item("").is_err());
}

#[test]
fn test_float_codec() {
    let codec = FloatCodec::new();
    assert_eq!(codec.parse_item("2.5").unwrap(), 2.5);
    assert_eq!(codec.serialize_item(&2.5).unwrap(), "2.5");
    assert!(codec.parse_item("NaN-ish").is_err());
}

#[test]
fn test_boolean_codec_is_strict() {
    let codec = BooleanCodec::new();
    assert!(codec.parse_item("true").unwrap());
    assert!(!codec.parse_item("false").unwrap());
    // Only the two literals parse; anything else is dropped at list level.
    assert!(codec.parse_item("TRUE").is_err());
    assert!(codec.parse_item("1").is_err());
}

#[test]
fn test_from_str_codec_over_ports() {
    let codec = ListCodec::new(FromStrCodec::<u16>::new());
    assert_eq!(codec.parse("8080,not-a-port,9090"), vec![8080, 9090]);
    assert_eq!(codec.serialize(&[80, 443]).unwrap(), "80,443");
}

#[test]
fn test_timestamp_codec_round_trip() {
    let codec = TimestampCodec;
    let instant = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

    let encoded = codec.serialize_item(&instant).unwrap();
    assert_eq!(encoded, "1700000000123");
    assert_eq!(codec.parse_item(&encoded).unwrap(), instant);
}

#[test]
fn test_timestamp_codec_rejects_non_numeric() {
    assert!(TimestampCodec.parse_item("yesterday").is_err());
    assert!(TimestampCodec.parse_item("2024-01-15").is_err());
}

#[test]
fn test_datetime_codec_round_trip() {
    let codec = DateTimeCodec;
    let instant = codec.parse_item("2024-01-15T10:30:00.250Z").unwrap();

    assert_eq!(
        codec.serialize_item(&instant).unwrap(),
        "2024-01-15T10:30:00.250Z"
    );
}

#[test]
fn test_datetime_codec_normalizes_offsets_to_utc() {
    let codec = DateTimeCodec;
    let instant = codec.parse_item("2024-01-15T12:30:00+02:00").unwrap();
    assert_eq!(
        codec.serialize_item(&instant).unwrap(),
        "2024-01-15T10:30:00.000Z"
    );
}

#[test]
fn test_datetime_codec_rejects_garbage() {
    assert!(DateTimeCodec.parse_item("not-a-date").is_err());
}

#[test]
fn test_json_codec_round_trip_in_a_list() {
    let codec = ListCodec::new(JsonCodec::<Filter>::new());
    let filters = vec![
        Filter {
            field: "status".to_string(),
            value: 1,
        },
        Filter {
            field: "owner".to_string(),
            value: 2,
        },
    ];

    let encoded = codec.serialize(&filters).unwrap();
    // JSON commas collide with the list separator and get escaped.
    assert!(encoded.contains("%2C"));
    assert_eq!(codec.parse(&encoded), filters);
}

#[test]
fn test_json_codec_drops_malformed_documents() {
    let codec = ListCodec::new(JsonCodec::<Filter>::new());
    let valid = codec
        .serialize(&[Filter {
            field: "status".to_string(),
            value: 1,
        }])
        .unwrap();

    let decoded = codec.parse(&format!("{valid},{{broken"));
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].field, "status");
}

#[test]
fn test_json_codec_default_equality_compares_documents() {
    let codec = JsonCodec::<Filter>::new();
    let a = Filter {
        field: "f".to_string(),
        value: 9,
    };
    assert!(codec.eq_items(&a, &a.clone()));
    assert!(!codec.eq_items(
        &a,
        &Filter {
            field: "f".to_string(),
            value: 10,
        }
    ));
}
