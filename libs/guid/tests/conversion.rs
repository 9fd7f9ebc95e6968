//! End-to-end conversion behaviour through the public API.

use guidbridge_guid::{
    convert, convert_batch, convert_with, ByteOrder, CompactGuid, ConversionFailure,
    ConvertOptions, GuidError, Uuid, VerboseGuid, SYMBOLS,
};
use proptest::prelude::*;
use rstest::rstest;

const COMPACT: &str = "OjUoLaQbSJaLY55KONd1nQ";
const VERBOSE: &str = "3a35282d-a41b-4896-8b63-9e4a38d7759d";

#[rstest]
#[case::no_artifacts("OjUoLaQbSJaLY55KONd1nQ", COMPACT, VERBOSE)]
#[case::hyphen_and_line_feed("OjUoLaQbSJa-\nLY55KONd1nQ", COMPACT, VERBOSE)]
#[case::line_feed_only("OjUoLaQbSJa\nLY55KONd1nQ", COMPACT, VERBOSE)]
#[case::hyphen_and_crlf("OjUoLaQbSJa-\r\nLY55KONd1nQ", COMPACT, VERBOSE)]
#[case::carriage_return_only("OjUoLaQbSJa\rLY55KONd1nQ", COMPACT, VERBOSE)]
#[case::indented_continuation("OjUoLaQbSJa-\n    LY55KONd1nQ", COMPACT, VERBOSE)]
#[case::legitimate_hyphen(
    "qn5yQy-\nFpkqfWJtOCWqM8Q",
    "qn5yQy-FpkqfWJtOCWqM8Q",
    "aa7e7243-2f85-a64a-9f58-9b4e096a8cf1"
)]
fn converts_wrapped_identifiers(
    #[case] input: &str,
    #[case] expected_compact: &str,
    #[case] expected_verbose: &str,
) {
    let conversion = convert(input).unwrap();
    assert_eq!(conversion.compact().as_str(), expected_compact);
    assert_eq!(conversion.verbose().to_string(), expected_verbose);
}

#[rstest]
#[case::truncated("OjUoLaQbSJaLY55KONd1", GuidError::UnrepairableLength { length: 20 })]
#[case::empty("", GuidError::UnrepairableLength { length: 0 })]
#[case::single_line_junk(
    "single_line_string_no_newline",
    GuidError::UnrepairableLength { length: 29 }
)]
#[case::standard_alphabet_symbol(
    "OjUoLaQbSJ+LY55KONd1nQ",
    GuidError::InvalidSymbol { symbol: '+', position: 10 }
)]
#[case::typo("OjUoLaQbSJaLY55KONd1n!", GuidError::InvalidSymbol { symbol: '!', position: 21 })]
#[case::ifc_dollar("OjUoLaQbSJaLY$5KONd1nQ", GuidError::InvalidSymbol { symbol: '$', position: 13 })]
#[case::dash_inside_identifier(
    "OjUoLa\u{2014}bSJaLY55KONd1nQ",
    GuidError::InvalidSymbol { symbol: '\u{2014}', position: 6 }
)]
#[case::dash_added_inside_identifier(
    "OjUoLa\u{2014}QbSJaLY55KONd1nQ",
    GuidError::UnrepairableLength { length: 23 }
)]
#[case::ambiguous_wrap_hyphens(
    "qn5yQy-\nFpkqf-\nWJtOCWqM8Q",
    GuidError::AmbiguousRepair { connectors: 2 }
)]
fn rejects_unrepairable_input(#[case] input: &str, #[case] expected: GuidError) {
    let failure = convert(input).unwrap_err();
    assert_eq!(failure.error(), &expected);
}

#[test]
fn failure_keeps_partial_cleanup() {
    let failure: ConversionFailure = convert("OjUoLaQbSJa-\nLY55KONd1").unwrap_err();
    // 21 symbols with the hyphen: nothing to trim, so the hyphen stays
    assert_eq!(failure.cleaned(), "OjUoLaQbSJa-LY55KONd1");
    assert!(failure.error().is_length_error());
}

#[test]
fn batch_entries_are_independent() {
    let inputs = [
        "OjUoLaQbSJa-\nLY55KONd1nQ",
        "OjUoLaQbSJaLY55KONd1",
        "qn5yQy-\nFpkqfWJtOCWqM8Q",
        "OjUoLaQbSJ+LY55KONd1nQ",
        "OjUoLaQbSJaLY55KONd1nQ",
    ];
    let report = convert_batch(inputs, &ConvertOptions::default());

    assert_eq!(report.len(), inputs.len());
    for (entry, input) in report.entries().iter().zip(inputs) {
        assert_eq!(entry.input, input);
        assert_eq!(entry.result, convert(input));
    }

    let ok: Vec<usize> = report.conversions().map(|(index, _)| index).collect();
    let failed: Vec<usize> = report.failures().map(|(index, _)| index).collect();
    assert_eq!(ok, vec![0, 2, 4]);
    assert_eq!(failed, vec![1, 3]);
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompactGuid>();
    assert_send_sync::<VerboseGuid>();
    assert_send_sync::<ConversionFailure>();
    assert_send_sync::<guidbridge_guid::BatchReport>();
}

#[test]
fn concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| convert("OjUoLaQbSJa-\nLY55KONd1nQ")))
        .collect();
    for handle in handles {
        let conversion = handle.join().unwrap().unwrap();
        assert_eq!(conversion.verbose().to_string(), VERBOSE);
    }
}

fn byte_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::BigEndian), Just(ByteOrder::MixedEndian)]
}

proptest! {
    #[test]
    fn roundtrip_any_value(value in any::<u128>(), order in byte_order(), braces in any::<bool>()) {
        let uuid = Uuid::from_u128(value);
        let compact = CompactGuid::from_uuid(uuid, order);
        let options = ConvertOptions::new().with_byte_order(order).with_braces(braces);

        let conversion = convert_with(compact.as_str(), &options).unwrap();
        prop_assert_eq!(conversion.verbose().uuid(), uuid);
        prop_assert!(!conversion.padding_anomaly());

        let reparsed = VerboseGuid::parse(&conversion.verbose().to_string()).unwrap();
        prop_assert_eq!(reparsed.to_compact(order), compact);
    }

    #[test]
    fn clean_input_is_idempotent(value in any::<u128>()) {
        let compact = CompactGuid::from_uuid(Uuid::from_u128(value), ByteOrder::BigEndian);
        let conversion = convert(compact.as_str()).unwrap();
        prop_assert_eq!(conversion.compact(), &compact);
        prop_assert!(!conversion.was_repaired());

        let again = convert(conversion.compact().as_str()).unwrap();
        prop_assert_eq!(again, conversion);
    }

    #[test]
    fn padded_input_is_idempotent(value in any::<u128>(), padding in 1u8..16) {
        let compact = CompactGuid::from_uuid(Uuid::from_u128(value), ByteOrder::BigEndian);
        let (head, last) = compact.as_str().split_at(21);
        let last = SYMBOLS
            .iter()
            .position(|&symbol| last.as_bytes()[0] == symbol)
            .unwrap() as u8;
        let padded = format!("{head}{}", SYMBOLS[usize::from(last | padding)] as char);

        let conversion = convert(&padded).unwrap();
        prop_assert_eq!(conversion.compact().as_str(), padded.as_str());
        prop_assert!(conversion.padding_anomaly());
        prop_assert_eq!(conversion.verbose().uuid().as_u128(), value);
        prop_assert_eq!(conversion.compact().canonical(), compact);

        let again = convert(conversion.compact().as_str()).unwrap();
        prop_assert_eq!(again, conversion);
    }

    #[test]
    fn single_wrap_is_recovered(
        value in any::<u128>(),
        split in 1usize..22,
        hyphen in any::<bool>(),
        crlf in any::<bool>(),
    ) {
        let compact = CompactGuid::from_uuid(Uuid::from_u128(value), ByteOrder::BigEndian);
        let (head, tail) = compact.as_str().split_at(split);
        let wrapped = format!(
            "{head}{}{}{tail}",
            if hyphen { "-" } else { "" },
            if crlf { "\r\n" } else { "\n" },
        );

        let conversion = convert(&wrapped).unwrap();
        prop_assert_eq!(conversion.compact(), &compact);
        prop_assert_eq!(conversion.verbose().uuid().as_u128(), value);
    }

    #[test]
    fn arbitrary_input_never_panics(input in "\\PC{0,40}") {
        match convert(&input) {
            Ok(conversion) => prop_assert_eq!(conversion.compact().as_str().len(), 22),
            Err(failure) => prop_assert!(!failure.cleaned().chars().any(char::is_whitespace)),
        }
    }

    #[test]
    fn wrong_length_always_fails(value in any::<u128>(), cut in 1usize..22) {
        let compact = CompactGuid::from_uuid(Uuid::from_u128(value), ByteOrder::BigEndian);
        let truncated = &compact.as_str()[..22 - cut];
        let failure = convert(truncated).unwrap_err();
        prop_assert!(failure.error().is_length_error());
    }
}
