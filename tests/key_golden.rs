mod fixture;

use inputbar::{matches_key, parse_key};

#[test]
fn key_vectors_match_fixture() {
    let raw = fixture::read_fixture("key_vectors.tsv");
    for (line_num, parts) in fixture::rows(&raw) {
        match parts[0] {
            "parse" => {
                assert!(
                    parts.len() == 3,
                    "line {line_num}: expected 3 columns for parse, got {}",
                    parts.len()
                );
                let input = fixture::unescape(parts[1]);
                let expected = match parts[2].trim() {
                    "none" => None,
                    key_id => Some(key_id.to_string()),
                };
                assert_eq!(
                    parse_key(&input),
                    expected,
                    "line {line_num}: parse_key({input:?}) mismatch"
                );
            }
            "match" => {
                assert!(
                    parts.len() == 4,
                    "line {line_num}: expected 4 columns for match, got {}",
                    parts.len()
                );
                let input = fixture::unescape(parts[1]);
                let key_id = parts[2].trim();
                let expected = match parts[3].trim() {
                    "true" => true,
                    "false" => false,
                    other => panic!("line {line_num}: invalid expected value {other}"),
                };
                assert_eq!(
                    matches_key(&input, key_id),
                    expected,
                    "line {line_num}: matches_key({input:?}, {key_id:?}) mismatch"
                );
            }
            other => panic!("line {line_num}: unknown kind {other}"),
        }
    }
}
