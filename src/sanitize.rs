//! Sanitization primitives
//!
//! Escaping for HTML text and attributes, markup stripping for plain-text
//! fields, and URL cleaning with a protocol allow-list. Every function is
//! total: untrusted input is normalized to a safe value, never rejected with
//! an error.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

/// Schemes accepted by [`clean_url`].
pub const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
    "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

static SCRIPT_OR_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>")
        .expect("script/style pattern is valid")
});

// A `<` followed by whitespace is literal text; an unterminated tag swallows
// the remainder of the input.
static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(?:>|[^\s>][^>]*(?:>|$)|$)").expect("tag pattern is valid"));

static SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.-]*):(.*)$").expect("scheme pattern is valid")
});

static PORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:[/?#]|$)").expect("port pattern is valid"));

/// Escape text for inclusion in HTML element content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for a double-quoted HTML attribute.
pub fn escape_attr(input: &str) -> String {
    escape_html(input)
}

/// Remove markup tags, including the bodies of `script` and `style` elements.
pub fn strip_tags(input: &str) -> String {
    let without_blocks = SCRIPT_OR_STYLE.replace_all(input, "");
    TAG.replace_all(&without_blocks, "").trim().to_string()
}

/// Clean an untrusted URL for storage or output.
///
/// Returns an empty string when the value cannot be made safe: it fails to
/// parse, or its scheme is not in [`ALLOWED_PROTOCOLS`]. Values without a
/// scheme are treated as `http://` hosts; site-relative values starting with
/// `/`, `#` or `?` are kept as written (minus unsafe characters).
///
/// Accepted absolute URLs come back in normalized form: scheme and host are
/// lowercased and an empty path becomes `/`, so `https://Twitter.com` is
/// returned as `https://twitter.com/`.
pub fn clean_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let candidate: String = trimmed
        .replace(' ', "%20")
        .chars()
        .filter(|c| is_url_char(*c))
        .collect();
    if candidate.is_empty() {
        return String::new();
    }

    if candidate.starts_with(['/', '#', '?']) {
        return candidate;
    }

    let candidate = if has_scheme(&candidate) {
        candidate
    } else {
        format!("http://{}", candidate)
    };

    match Url::parse(&candidate) {
        Ok(url) if ALLOWED_PROTOCOLS.contains(&url.scheme()) => url.into(),
        Ok(url) => {
            debug!(scheme = url.scheme(), "Dropping URL with disallowed scheme");
            String::new()
        }
        Err(e) => {
            debug!(error = %e, "Dropping malformed URL");
            String::new()
        }
    }
}

/// Whether the value opens with `scheme:`. A `host.name:` or `host:port`
/// prefix is not a scheme.
fn has_scheme(candidate: &str) -> bool {
    let Some(caps) = SCHEME.captures(candidate) else {
        return false;
    };
    let scheme = &caps[1];
    if scheme.contains('.') {
        return false;
    }
    let is_known = ALLOWED_PROTOCOLS
        .iter()
        .any(|p| p.eq_ignore_ascii_case(scheme));
    is_known || !PORT.is_match(&caps[2])
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii() || "-~+_.?#=!&;,/:%@$|*'()[]".contains(c)
}
