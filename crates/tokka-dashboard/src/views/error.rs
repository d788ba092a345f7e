//! Page error surface
//!
//! Shown above the sections when the configuration could not be loaded.
//! The message comes from the network layer or the JSON parser and may
//! quote the response body, so every part of it is escaped.

use crate::sanitize::{escape_attr, escape_text};

pub const HEADLINE: &str = "Failed to load config:";

/// Markup for the `#page-error` region
pub fn markup(message: &str) -> String {
    format!(
        r#"<div class="glass-card error" title="{}">{} {}</div>"#,
        escape_attr(message),
        HEADLINE,
        escape_text(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_shown() {
        assert_eq!(
            markup("Config load failed: 500"),
            r#"<div class="glass-card error" title="Config load failed: 500">Failed to load config: Config load failed: 500</div>"#
        );
    }

    #[test]
    fn test_hostile_message_is_escaped_once() {
        let html = markup("<script>alert('x')</script>\n\"");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("&amp;lt;"));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(html.contains(r#"title="&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt; &quot;""#));
    }
}
