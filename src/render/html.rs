//! HTML escaping and small markup helpers shared by the components.

use std::borrow::Cow;

/// Escape text for element content and quoted attribute values.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// `target`/`rel` attributes for links that open a new browsing context.
pub const fn target_attrs(new_tab: bool) -> &'static str {
    if new_tab {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    }
}

/// `<a>` element with escaped href and label.
pub fn link(href: &str, label: &str, class: &str, new_tab: bool) -> String {
    format!(
        r#"<a class="{class}" href="{}"{}>{}</a>"#,
        escape(href),
        target_attrs(new_tab),
        escape(label)
    )
}

/// Mono-spaced section label, used across views.
pub fn label(text: &str) -> String {
    format!(r#"<span class="label">{}</span>"#, escape(text))
}
