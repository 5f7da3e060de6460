//! Endpoint path の組み立て
//!
//! `trigger/<kind>/<escaped argument>?ts=<ms>` をバックエンドとの互換のために
//! そのまま再現します。空のセグメントは省略されます。

use crate::domain::{TriggerArgument, TriggerKind};

/// JavaScript の `encodeURIComponent` と同じ規則で escape
///
/// 非予約文字: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub fn encode_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => result.push(byte as char),
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }
    result
}

/// ts を含まない endpoint path
pub fn endpoint_path(
    namespace: &str,
    kind: &TriggerKind,
    argument: Option<&TriggerArgument>,
) -> String {
    let argument = argument.map(|a| encode_component(&a.to_string()));
    [Some(namespace.to_string()), Some(kind.to_string()), argument]
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// cache-busting 用の `ts` を付けた request path
pub fn request_path(endpoint: &str, timestamp_ms: i64) -> String {
    format!("{endpoint}?ts={timestamp_ms}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ping", "ping")]
    #[case("a b", "a%20b")]
    #[case("a/b?c=d&e", "a%2Fb%3Fc%3Dd%26e")]
    #[case("it's (ok)!*~", "it's%20(ok)!*~")]
    #[case("Run cron 'nightly'", "Run%20cron%20'nightly'")]
    #[case("ü", "%C3%BC")]
    fn encodes_like_encode_uri_component(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(encode_component(input), expected);
    }

    #[test]
    fn endpoint_url_example() {
        let arg = TriggerArgument::from("ping");
        let path = endpoint_path("trigger", &TriggerKind::EndpointUrl, Some(&arg));
        assert_eq!(path, "trigger/TrigEndpointURL/ping");
        assert_eq!(
            request_path(&path, 1_700_000_000_000),
            "trigger/TrigEndpointURL/ping?ts=1700000000000"
        );
    }

    #[test]
    fn empty_argument_segment_is_dropped() {
        let kind = TriggerKind::from("TrigDashboard");
        assert_eq!(endpoint_path("trigger", &kind, None), "trigger/TrigDashboard");

        let empty = TriggerArgument::from("");
        assert_eq!(
            endpoint_path("trigger", &kind, Some(&empty)),
            "trigger/TrigDashboard"
        );
    }

    #[test]
    fn index_argument_is_rendered_as_number() {
        let arg = TriggerArgument::Index(0);
        assert_eq!(
            endpoint_path("trigger", &TriggerKind::CustomCronTimer, Some(&arg)),
            "trigger/TrigCustomCronTimer/0"
        );
    }
}
