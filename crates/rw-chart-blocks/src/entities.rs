//! HTML character reference decoding.
//!
//! Chart code blocks arrive HTML-escaped (`&quot;kind&quot;`), so their text has
//! to be decoded before it can be parsed as JSON.

/// Decode HTML character references to the text they stand for.
///
/// Covers numeric references (`&#34;`, `&#x22;`) and the full HTML5 set of
/// named references (`&quot;`, `&eacute;`, `&lambda;`, ...). Unknown names are
/// left as-is.
///
/// Decoding is a single pass: `&amp;lt;` becomes `&lt;`, not `<`.
pub fn decode_html_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
