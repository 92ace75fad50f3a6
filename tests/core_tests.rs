use docso::core::*;
use rust_decimal_macros::dec;

fn north(n: u64) -> String {
    convert(n, Region::North).unwrap()
}

fn south(n: u64) -> String {
    convert(n, Region::South).unwrap()
}

// --- Documented examples ---

#[test]
fn zero_in_both_regions() {
    assert_eq!(north(0), "không");
    assert_eq!(south(0), "không");
}

#[test]
fn tens_and_teens() {
    assert_eq!(north(10), "mười");
    assert_eq!(north(11), "mười một");
    assert_eq!(north(15), "mười lăm");
    assert_eq!(north(21), "hai mươi mốt");
    assert_eq!(north(55), "năm mươi lăm");
    assert_eq!(north(71), "bảy mươi mốt");
}

#[test]
fn filler_word_by_region() {
    assert_eq!(north(105), "một trăm linh năm");
    assert_eq!(south(105), "một trăm lẻ năm");
}

#[test]
fn thousand_word_by_region() {
    assert_eq!(north(3_000), "ba nghìn");
    assert_eq!(south(3_000), "ba ngàn");
}

// --- Multi-group numbers ---

#[test]
fn zero_hundreds_regressions() {
    assert_eq!(north(1_005), "một nghìn không trăm linh năm");
    assert_eq!(north(100_005), "một trăm nghìn không trăm linh năm");
    assert_eq!(north(1_000_005), "một triệu không trăm linh năm");
    assert_eq!(south(1_005), "một ngàn không trăm lẻ năm");
}

#[test]
fn every_place_value() {
    assert_eq!(
        north(123_456_789_012),
        "một trăm hai mươi ba tỷ bốn trăm năm mươi sáu triệu \
         bảy trăm tám mươi chín nghìn không trăm mười hai"
    );
}

#[test]
fn snapshot_representative_numbers() {
    insta::assert_snapshot!(north(2_024), @"hai nghìn không trăm hai mươi bốn");
    insta::assert_snapshot!(south(2_024), @"hai ngàn không trăm hai mươi bốn");
    insta::assert_snapshot!(north(1_000_000_001), @"một tỷ không trăm linh một");
    insta::assert_snapshot!(south(30_015_000), @"ba mươi triệu không trăm mười lăm ngàn");
}

// --- Entry points and configuration ---

#[test]
fn converter_matches_free_functions() {
    let converter = ConverterBuilder::new().region(Region::South).build();
    for n in [0, 1, 15, 105, 1_005, 999_999_999_999] {
        assert_eq!(converter.convert(n).unwrap(), south(n));
    }
}

#[test]
fn words_join_to_string() {
    let numeral = to_words(1_234, Region::North).unwrap();
    assert_eq!(numeral.words().join(" "), numeral.to_string());
    assert_eq!(numeral.into_words().first(), Some(&"một"));
}

#[test]
fn decimal_and_text_inputs() {
    assert_eq!(convert_decimal(dec!(105), Region::South).unwrap(), "một trăm lẻ năm");
    assert_eq!(convert_str("21", "north").unwrap(), "hai mươi mốt");
    assert_eq!(convert_str("21.0", "south").unwrap(), "hai mươi mốt");
}

#[test]
fn config_roundtrip_json() {
    let converter: Converter = serde_json::from_str(r#"{"region":"south"}"#).unwrap();
    assert_eq!(converter.region, Region::South);

    let json = serde_json::to_string(&Converter::default()).unwrap();
    assert_eq!(json, r#"{"region":"north"}"#);

    let empty: Converter = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Converter::default());
}

#[test]
fn config_rejects_unknown_region() {
    assert!(serde_json::from_str::<Converter>(r#"{"region":"central"}"#).is_err());
}
