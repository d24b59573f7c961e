//! Project card used by the home and work views.

use super::{
    html::{escape, target_attrs},
    project_href,
};
use crate::content::Project;

pub fn render(project: &Project) -> String {
    let (href, new_tab) = project_href(project);
    format!(
        concat!(
            r#"<article class="card" data-project-id="{id}">"#,
            r#"<a href="{href}"{target}>"#,
            r#"<img src="{image}" alt="{title}" loading="lazy">"#,
            r#"<div class="card-meta"><span class="label">{category}</span><span class="label">{year}</span></div>"#,
            r#"<h3>{title}</h3><p>{description}</p>"#,
            "</a></article>"
        ),
        id = escape(&project.id),
        href = escape(&href),
        target = target_attrs(new_tab),
        image = escape(&project.image),
        title = escape(&project.title),
        category = escape(&project.category),
        year = escape(&project.year),
        description = escape(&project.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::project;

    #[test]
    fn test_internal_card_links_to_detail() {
        let html = render(&project("orbit"));
        assert!(html.contains(r#"data-project-id="orbit""#));
        assert!(html.contains(r#"<a href="/work/orbit/">"#));
    }

    #[test]
    fn test_external_card_opens_new_tab() {
        let mut p = project("orbit");
        p.external_link = Some("https://orbit.example".into());
        p.open_in_new_tab = true;
        let html = render(&p);

        assert!(html.contains(r#"href="https://orbit.example" target="_blank" rel="noopener noreferrer""#));
    }

    #[test]
    fn test_empty_external_link_is_ignored() {
        let mut p = project("orbit");
        p.external_link = Some(String::new());
        assert!(render(&p).contains(r#"href="/work/orbit/""#));
    }
}
