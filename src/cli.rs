// SPDX-License-Identifier: MIT
//! Command-line surface helpers.

/// Diagnostic printed when the invocation does not carry exactly one URL.
pub const USAGE_DIAGNOSTIC: &str = "Expected a target URL parameter.";

/// Extract the single target URL from the positional arguments.
///
/// The harness accepts exactly one URL; zero or several is a usage error
/// the caller answers with [`USAGE_DIAGNOSTIC`] and exit code 1, without
/// ever touching the browser.
pub fn single_url(urls: &[String]) -> Option<&str> {
    match urls {
        [url] => Some(url.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_url_is_accepted() {
        let args = vec!["http://example.test/suite".to_string()];
        assert_eq!(single_url(&args), Some("http://example.test/suite"));
    }

    #[test]
    fn zero_urls_are_rejected() {
        assert_eq!(single_url(&[]), None);
    }

    #[test]
    fn several_urls_are_rejected() {
        let args = vec!["http://a.test".to_string(), "http://b.test".to_string()];
        assert_eq!(single_url(&args), None);
    }
}
