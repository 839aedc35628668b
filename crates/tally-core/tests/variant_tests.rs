use std::str::FromStr;

use tally_core::{ChecksumError, Variant};

#[test]
fn name_round_trips_through_from_str() {
    for variant in Variant::ALL {
        let parsed = Variant::from_str(variant.name()).expect("catalog name parses");
        assert_eq!(parsed, variant);
    }
}

#[test]
fn parsing_is_case_insensitive_and_accepts_dashed_names() {
    assert_eq!(Variant::from_str("CCITT").expect("parse"), Variant::Ccitt);
    assert_eq!(Variant::from_str("X-25").expect("parse"), Variant::X25);
    assert_eq!(Variant::from_str("z-modem").expect("parse"), Variant::Zmodem);
}

#[test]
fn unknown_name_is_invalid_input() {
    let err = Variant::from_str("crc32").unwrap_err();
    assert!(matches!(err, ChecksumError::InvalidInput(_)));
}

#[test]
fn arc_and_ieee_share_parameters() {
    assert_eq!(Variant::Arc.config(), Variant::Ieee.config());
}

#[test]
fn display_matches_name() {
    for variant in Variant::ALL {
        assert_eq!(variant.to_string(), variant.name());
    }
}

#[test]
fn catalog_lists_every_variant_once() {
    let mut names: Vec<&str> = Variant::ALL.iter().map(|variant| variant.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Variant::ALL.len());
}
