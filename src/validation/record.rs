use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use url::{form_urlencoded, Url};

pub const DEFAULT_ID: &str = "N/A";
pub const DEFAULT_TITLE: &str = "No Title Provided";

/// Parse a page query string into key/value pairs.
///
/// Pairs are split on `&`, then on the first `=`. In values, `+` becomes a
/// space and percent escapes are decoded; malformed escapes are kept as-is.
/// Keys are taken verbatim. Pairs
/// without `=`, or with an empty key or value, are dropped. A later
/// duplicate key wins.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter_map(decode_pair).collect()
}

fn decode_pair(pair: &str) -> Option<(String, String)> {
    let (raw_key, raw_value) = pair.split_once('=')?;
    if raw_key.is_empty() || raw_value.is_empty() {
        return None;
    }

    // The pair holds no '&', so this yields exactly one entry split at the first '='
    let (_, value) = form_urlencoded::parse(pair.as_bytes()).next()?;
    Some((raw_key.to_string(), value.into_owned()))
}

/// The capture under review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub id: String,
    pub title: String,
    /// When the review page was opened, as shown to the reviewer
    pub reviewed_at: String,
}

impl ValidationRecord {
    pub fn from_params(params: &HashMap<String, String>, reviewed_at: String) -> Self {
        let field = |key: &str, default: &str| {
            params
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            id: field("id", DEFAULT_ID),
            title: field("title", DEFAULT_TITLE),
            reviewed_at,
        }
    }

    pub fn from_query(query: &str, reviewed_at: String) -> Self {
        Self::from_params(&parse_query(query), reviewed_at)
    }
}

/// Placeholder image for a capture, labelled with its title.
///
/// The title is percent-encoded with spaces as `%20`.
pub fn placeholder_url(base: &Url, title: &str) -> Url {
    // Form encoding escapes a literal '+' as %2B, so every '+' left is a space
    let text = form_urlencoded::byte_serialize(title.as_bytes())
        .collect::<String>()
        .replace('+', "%20");

    let mut url = base.clone();
    url.set_query(Some(&format!("text={}", text)));
    url
}

/// Terminal review decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Accepted,
    Rejected,
}

impl Decision {
    pub fn tone(self) -> MessageTone {
        match self {
            Decision::Accepted => MessageTone::Success,
            Decision::Rejected => MessageTone::Danger,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Accepted => f.write_str("Accepted"),
            Decision::Rejected => f.write_str("Rejected"),
        }
    }
}

/// Styling of the confirmation message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Danger,
}

impl MessageTone {
    pub fn css_classes(self) -> [&'static str; 2] {
        match self {
            MessageTone::Success => ["bg-success/20", "text-success"],
            MessageTone::Danger => ["bg-danger/20", "text-danger"],
        }
    }
}

/// What a reviewer sends back for a capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSubmission {
    pub id: String,
    pub decision: Decision,
    /// Trimmed reviewer comments, `None` when left blank
    pub comments: Option<String>,
}

impl ValidationSubmission {
    pub fn new(id: impl Into<String>, decision: Decision, comments: &str) -> Self {
        let comments = comments.trim();
        Self {
            id: id.into(),
            decision,
            comments: (!comments.is_empty()).then(|| comments.to_string()),
        }
    }

    /// Confirmation shown once the submission went through
    pub fn confirmation(&self) -> String {
        format!(
            "Image {} has been successfully {}. Redirecting...",
            self.id,
            self.decision.to_string().to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_decodes_plus_and_escapes() {
        let params = parse_query("?id=42&title=Sunset+View%21");
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert_eq!(params.get("title").map(String::as_str), Some("Sunset View!"));
    }

    #[test]
    fn test_parse_query_splits_on_first_equals() {
        let params = parse_query("title=a=b");
        assert_eq!(params.get("title").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_parse_query_drops_malformed_pairs() {
        let params = parse_query("?flag&=orphan&empty=&id=7");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id").map(String::as_str), Some("7"));
    }

    #[test]
    fn test_parse_query_decodes_values_only() {
        let params = parse_query("ti%74le=Sunset%20View&id=1");
        assert_eq!(params.get("ti%74le").map(String::as_str), Some("Sunset View"));
        assert!(!params.contains_key("title"));
    }

    #[test]
    fn test_placeholder_url_percent_encodes_title() {
        let base = Url::parse("https://placehold.co/800x600/1f2937/ffffff").unwrap();
        assert_eq!(
            placeholder_url(&base, "Sunset View").as_str(),
            "https://placehold.co/800x600/1f2937/ffffff?text=Sunset%20View"
        );
        assert_eq!(
            placeholder_url(&base, "A+B & C").as_str(),
            "https://placehold.co/800x600/1f2937/ffffff?text=A%2BB%20%26%20C"
        );
    }

    #[test]
    fn test_parse_query_keeps_bad_escapes() {
        let params = parse_query("title=100%zz");
        assert_eq!(params.get("title").map(String::as_str), Some("100%zz"));
    }

    #[test]
    fn test_submission_blank_comments() {
        let submission = ValidationSubmission::new("9", Decision::Rejected, "   ");
        assert_eq!(submission.comments, None);
        assert_eq!(
            submission.confirmation(),
            "Image 9 has been successfully rejected. Redirecting..."
        );
    }
}
