//! About view.
//!
//! The tenure metric is computed from the experience periods at render time,
//! so it is correct for the year the site was built in.

use super::{
    RenderOptions,
    html::{escape, label, link},
};
use crate::{content::SiteContent, tenure};

/// Skills shown as headline specialisations.
const SPECIALISATIONS: usize = 4;

pub fn render(content: &SiteContent, options: &RenderOptions) -> String {
    let about = &content.about;
    let years = tenure::total_years(
        content.experience.iter().map(|e| e.period.as_str()),
        options.current_year,
    );

    let mut out = String::from(r#"<section class="about">"#);
    out.push_str(&format!(
        r#"<header>{}<h1>ABOUT.</h1><p class="intro">{}</p></header>"#,
        label(&about.label),
        escape(&about.intro),
    ));
    out.push_str(&format!(
        r#"<div class="metric"><span class="value">{years}+</span><span class="label">Years of Mastery</span></div>"#
    ));
    if !content.site_info.resume_url.is_empty() {
        out.push_str(&link(&content.site_info.resume_url, "VIEW PDF", "resume", true));
    }

    out.push_str(&list(
        "SPECIALISATIONS",
        about.skills.iter().take(SPECIALISATIONS).map(|s| escape(s).into_owned()),
    ));
    out.push_str(&format!(
        r#"<p class="statement">{}</p><p class="sub-copy">{}</p>"#,
        about.main_copy,
        escape(&about.sub_copy),
    ));

    out.push_str(&list(
        "PROFESSIONAL PATH",
        content.experience.iter().map(|e| {
            format!(
                r#"<span class="period">{}</span><h3>{}</h3><span class="company">{}</span><p>{}</p>"#,
                escape(&e.period),
                escape(&e.role),
                escape(&e.company),
                escape(&e.description),
            )
        }),
    ));
    out.push_str(&list(
        "CAPABILITIES",
        about.skills.iter().map(|s| escape(s).into_owned()),
    ));
    out.push_str(&list(
        "EDUCATION",
        about.education.iter().map(|e| {
            format!(
                r#"<h3>{}</h3><span>{}</span><span class="year">{}</span>"#,
                escape(&e.degree),
                escape(&e.institution),
                escape(&e.year),
            )
        }),
    ));
    out.push_str(&list(
        "CERTIFICATES",
        about.certificates.iter().map(|c| {
            format!(
                r#"{}<span>{}</span><span class="year">{}</span>"#,
                link(&c.url, &c.title, "certificate", true),
                escape(&c.issuer),
                escape(&c.year),
            )
        }),
    ));

    out.push_str("</section>");
    out
}

/// Labelled list; omitted when there are no items.
fn list(title: &str, items: impl Iterator<Item = String>) -> String {
    let items: String = items.map(|item| format!("<li>{item}</li>")).collect();
    if items.is_empty() {
        return String::new();
    }
    format!(r#"<div class="list">{}<ul>{items}</ul></div>"#, label(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::sample;

    fn options(year: i32) -> RenderOptions {
        RenderOptions {
            current_year: year,
            ..Default::default()
        }
    }

    #[test]
    fn test_tenure_metric() {
        // 2023-2025, 2020-2023, 2018-2020
        let html = render(&sample(), &options(2025));
        assert!(html.contains(r#"<span class="value">7+</span>"#));
    }

    #[test]
    fn test_tenure_zero_without_experience() {
        let mut content = sample();
        content.experience.clear();
        let html = render(&content, &options(2025));

        assert!(html.contains(r#"<span class="value">0+</span>"#));
        assert!(!html.contains("PROFESSIONAL PATH"));
    }

    #[test]
    fn test_specialisations_take_first_four() {
        let html = render(&sample(), &options(2025));
        let start = html.find("SPECIALISATIONS").unwrap();
        let end = start + html[start..].find("</ul>").unwrap();
        let section = &html[start..end];

        assert_eq!(section.matches("<li>").count(), 4);
        assert!(section.contains("Interaction Design"));
        assert!(!section.contains("Rust"));
    }

    #[test]
    fn test_resume_link_opens_new_tab() {
        let html = render(&sample(), &options(2025));
        assert!(html.contains(r#"href="/assets/resume.pdf" target="_blank""#));
    }
}
