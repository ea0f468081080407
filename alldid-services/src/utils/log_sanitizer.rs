//! Log sanitization
//!
//! Indexer responses can carry every record of an account (long dweb
//! manifests, avatars as data URIs, ...). Only a bounded prefix goes to logs.

/// Bytes of a response body kept in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Cuts `s` down to at most [`TRUNCATE_LIMIT`] bytes on a char boundary and
/// notes the original length.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let end = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_kept() {
        let body = r#"{"errno":0,"errmsg":"","data":{"account":"leonx.bit"}}"#;
        assert_eq!(truncate_for_log(body), body);
    }

    #[test]
    fn limit_is_inclusive() {
        let body = "x".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&body), body);
    }

    #[test]
    fn long_body_truncated() {
        let body = "x".repeat(TRUNCATE_LIMIT * 4);
        let out = truncate_for_log(&body);
        assert!(out.starts_with(&"x".repeat(TRUNCATE_LIMIT)));
        assert!(out.ends_with(&format!("[truncated, total {} bytes]", TRUNCATE_LIMIT * 4)));
    }

    #[test]
    fn multibyte_not_split() {
        // 3 bytes per char, 256 is not a boundary
        let body = "域".repeat(200);
        let out = truncate_for_log(&body);
        let kept = out.split("...").next().unwrap_or_default();
        assert_eq!(kept.len(), 255);
        assert!(kept.chars().all(|c| c == '域'));
    }
}
