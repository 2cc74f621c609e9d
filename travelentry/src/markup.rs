//! Minimal HTML escaping for interpolated values.
//!
//! The renderer in `entry` treats every field as an opaque string, so
//! anything reaching the fragment goes through `escape` first. Only the
//! five characters with meaning in HTML text and attribute positions are
//! rewritten; everything else passes through verbatim.
//!
/// Escape a string for safe interpolation into an HTML fragment.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
