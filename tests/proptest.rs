//! Property tests for resource path construction and criteria encoding.

use percent_encoding::percent_decode_str;
use proptest::prelude::*;
use url::Url;

use cmci::{CICS_PROGRAM, CmciPath, encode_uri_component};

/// Strategy producing CICS-style resource and region names.
fn cics_name() -> impl Strategy<Value = String> {
    "[A-Z0-9]{1,8}"
}

proptest! {
    #[test]
    fn encoding_round_trips_through_percent_decoding(input in "\\PC*") {
        let encoded = encode_uri_component(&input);
        let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
        prop_assert_eq!(decoded.as_ref(), input.as_str());
    }

    #[test]
    fn encoded_output_is_limited_to_unreserved_and_escapes(input in "\\PC*") {
        let encoded = encode_uri_component(&input);
        let mut chars = encoded.chars();
        while let Some(c) = chars.next() {
            if c == '%' {
                let high = chars.next();
                let low = chars.next();
                prop_assert!(high.is_some_and(|h| h.is_ascii_hexdigit()));
                prop_assert!(low.is_some_and(|l| l.is_ascii_hexdigit()));
            } else {
                prop_assert!(
                    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'),
                    "unexpected unescaped character {:?}",
                    c
                );
            }
        }
    }

    #[test]
    fn plex_and_region_occupy_fixed_path_segments(
        plex in cics_name(),
        region in cics_name(),
    ) {
        let with_plex = CmciPath::new(CICS_PROGRAM, Some(&plex), &region).build();
        let url = Url::parse(&format!("http://mvs1:1490{}", with_plex)).unwrap();
        let segments: Vec<&str> = url.path_segments().unwrap().collect();
        prop_assert_eq!(segments.len(), 4);
        prop_assert_eq!(segments[0], "CICSSystemManagement");
        prop_assert_eq!(segments[1], CICS_PROGRAM);
        prop_assert_eq!(segments[2], plex.as_str());
        prop_assert_eq!(segments[3], region.as_str());

        let without_plex = CmciPath::new(CICS_PROGRAM, None, &region).build();
        let url = Url::parse(&format!("http://mvs1:1490{}", without_plex)).unwrap();
        let segments: Vec<&str> = url.path_segments().unwrap().collect();
        prop_assert_eq!(segments.len(), 3);
        prop_assert_eq!(segments[2], region.as_str());
    }

    #[test]
    fn omitted_blank_and_named_plex_always_differ(
        plex in cics_name(),
        region in cics_name(),
    ) {
        let omitted = CmciPath::new(CICS_PROGRAM, None, &region).build();
        let blank = CmciPath::new(CICS_PROGRAM, Some(""), &region).build();
        let named = CmciPath::new(CICS_PROGRAM, Some(&plex), &region).build();
        prop_assert_ne!(&omitted, &blank);
        prop_assert_ne!(&blank, &named);
        prop_assert_ne!(&omitted, &named);
    }

    #[test]
    fn criteria_always_appears_parenthesized_after_the_marker(
        region in cics_name(),
        criteria in "\\PC{1,40}",
    ) {
        let built = CmciPath::new(CICS_PROGRAM, None, &region)
            .criteria(&criteria)
            .build();
        let marker = built.find("?CRITERIA=(").expect("criteria marker missing");
        prop_assert!(built.ends_with(')'));
        // Everything between the marker and the closing parenthesis is the
        // encoded expression; decoding it recovers the original.
        let encoded = &built[marker + "?CRITERIA=(".len()..built.len() - 1];
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
        prop_assert_eq!(decoded.as_ref(), criteria.as_str());
    }

    #[test]
    fn paths_without_query_items_never_contain_a_question_mark(
        region in cics_name(),
    ) {
        let built = CmciPath::new(CICS_PROGRAM, None, &region).build();
        prop_assert!(!built.contains('?'));
    }
}
