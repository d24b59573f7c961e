//! Work view: every project, in document order.

use super::{card, html::label};
use crate::content::SiteContent;

pub fn render(content: &SiteContent) -> String {
    let cards: String = content.projects.iter().map(card::render).collect();
    format!(
        r#"<section class="work"><header>{}<h1>WORK.</h1></header><div class="grid">{cards}</div></section>"#,
        label(&format!("PORTFOLIO INDEX [ {} PROJECTS ]", content.projects.len())),
    )
}
