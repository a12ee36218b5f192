use url::{ParseError, Url};

pub fn to_url(host: &str) -> Result<Url, ParseError> {
    Url::parse(host)
}

/// First value of `key` in a raw, still-encoded query string.
pub fn query_param(raw_query: Option<&str>, key: &str) -> Option<String> {
    url::form_urlencoded::parse(raw_query?.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::{query_param, to_url};

    #[test]
    fn test_query_param() {
        assert_eq!(query_param(Some("token=abc123"), "token"), Some("abc123".to_string()));
        assert_eq!(query_param(Some("token="), "token"), Some(String::new()));
        assert_eq!(query_param(Some("token"), "token"), Some(String::new()));
        assert_eq!(query_param(Some("a=1&b=2"), "token"), None);
        assert_eq!(query_param(None, "token"), None);
        // percent and plus decoding
        assert_eq!(query_param(Some("token=a%2Bb+c"), "token"), Some("a+b c".to_string()));
        // first one wins
        assert_eq!(query_param(Some("token=one&token=two"), "token"), Some("one".to_string()));
    }

    #[test]
    fn test_to_url() {
        assert!(to_url("https://configurationalmodeling.com").is_ok());
        assert!(to_url("configurationalmodeling.com").is_err());
    }
}
