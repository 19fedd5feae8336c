use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for bare URLs in already-sanitized text.
/// Matches the maximal run of non-whitespace, non-quote characters after
/// an http(s) scheme. `>` never appears raw in sanitized text, so a URL
/// can never swallow or produce a quote marker at line start.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"https?://[^\s"]+"#).unwrap());

/// Rewrites bare HTTP(S) URLs into anchors whose visible text and target
/// both equal the matched substring, opened in a new viewing context.
///
/// Must run *after* [`sanitize`](super::sanitize) so the anchor markup
/// inserted here is not itself escaped.
pub fn autolink(input: &str, target: &str) -> String {
    URL_REGEX
        .replace_all(input, |caps: &regex::Captures| {
            let url = &caps[0];
            format!("<a target=\"{}\" href=\"{}\">{}</a>", target, url, url)
        })
        .to_string()
}
