//! Preloader overlay with the greeting.
//!
//! Whether the visitor has been here before is decided by the caller and
//! passed in; the static page embeds both greetings so the runtime script
//! can swap them using the `visited_before` flag.

use super::html::escape;

pub const GREETING_NEW: &str = "WELCOME";
pub const GREETING_RETURNING: &str = "WELCOME BACK";

/// Greeting text for a first or returning visit.
pub const fn greeting(returning_visitor: bool) -> &'static str {
    if returning_visitor {
        GREETING_RETURNING
    } else {
        GREETING_NEW
    }
}

/// Render the overlay. `loading` keeps it on screen indefinitely.
pub fn render(returning_visitor: bool, loading: bool) -> String {
    let letters: String = greeting(returning_visitor)
        .chars()
        .map(|c| match c {
            ' ' => "<span>&nbsp;</span>".to_owned(),
            c => format!("<span>{}</span>", escape(&c.to_string())),
        })
        .collect();

    format!(
        r#"<div id="preloader" class="preloader" data-state="{state}" data-greeting-new="{GREETING_NEW}" data-greeting-returning="{GREETING_RETURNING}"><div class="greeting">{letters}</div></div>"#,
        state = if loading { "loading" } else { "ready" },
    )
}
