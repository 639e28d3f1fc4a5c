use super::{FooterContent, FooterContentProps, copyright_line};
use crate::clock::ClockHandle;
use crate::links::{GOLEM_LINKS, LinkGroup, NAV_GROUPS, SOCIAL_LINKS, SUPPORT_LINKS};
use crate::render::render_footer;
use chrono::NaiveDate;
use futures::executor::block_on;
use yew::LocalServerRenderer;

fn clock_on(year: i32, month: u32, day: u32) -> ClockHandle {
    ClockHandle::fixed(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
}

fn positions(html: &str, needles: &[String]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| {
            html.find(n.as_str())
                .unwrap_or_else(|| panic!("missing {n} in {html}"))
        })
        .collect()
}

#[test]
fn copyright_line_format() {
    assert_eq!(copyright_line(2024), "© 2024 Ziverge Inc.");
}

#[test]
fn footer_shows_year_of_injected_clock() {
    let html = block_on(render_footer(clock_on(2024, 1, 1), false));
    assert!(html.contains("© 2024 Ziverge Inc."), "{html}");

    let html = block_on(render_footer(clock_on(2031, 12, 31), false));
    assert!(html.contains("© 2031 Ziverge Inc."), "{html}");
    assert!(!html.contains("© 2024"), "{html}");
}

#[test]
fn footer_without_provider_uses_system_year() {
    use chrono::Datelike;
    let before = chrono::Local::now().year();
    let html = block_on(LocalServerRenderer::<super::Footer>::new().render());
    let after = chrono::Local::now().year();
    assert!(
        html.contains(&copyright_line(before)) || html.contains(&copyright_line(after)),
        "{html}"
    );
}

#[test]
fn links_render_once_each_in_declared_order() {
    let html = block_on(render_footer(clock_on(2024, 1, 1), false));
    let hrefs: Vec<String> = SOCIAL_LINKS
        .iter()
        .map(|e| e.url)
        .chain(GOLEM_LINKS.iter().map(|e| e.url))
        .chain(SUPPORT_LINKS.iter().map(|e| e.url))
        .map(|url| format!("href=\"{url}\""))
        .collect();
    for href in &hrefs {
        assert_eq!(html.matches(href.as_str()).count(), 1, "{href} in {html}");
    }
    let found = positions(&html, &hrefs);
    assert!(found.windows(2).all(|w| w[0] < w[1]), "{found:?}");
    assert_eq!(html.matches("<a ").count(), hrefs.len());
}

#[test]
fn group_headings_precede_their_links() {
    let html = block_on(render_footer(clock_on(2024, 1, 1), false));
    for group in NAV_GROUPS {
        let heading = html
            .find(&format!(">{}</h3>", group.heading))
            .unwrap_or_else(|| panic!("missing heading {}", group.heading));
        for entry in group.entries {
            let label = html
                .find(&format!(">{}</a>", entry.label))
                .unwrap_or_else(|| panic!("missing label {}", entry.label));
            assert!(heading < label);
        }
    }
    assert_eq!(html.matches("<nav").count(), NAV_GROUPS.len());
}

#[test]
fn every_anchor_opens_without_opener() {
    let html = block_on(render_footer(clock_on(2024, 1, 1), false));
    let anchors: Vec<&str> = html.split("<a ").skip(1).collect();
    assert_eq!(anchors.len(), 8);
    for anchor in anchors {
        let tag = &anchor[..anchor.find('>').unwrap_or(anchor.len())];
        assert!(tag.contains(r#"target="_blank""#), "{tag}");
        assert!(tag.contains(r#"rel="noopener""#), "{tag}");
    }
}

#[test]
fn social_links_expose_name_and_hide_glyph() {
    let html = block_on(render_footer(clock_on(2024, 1, 1), false));
    for entry in SOCIAL_LINKS {
        let start = html
            .find(&format!("href=\"{}\"", entry.url))
            .expect("social anchor");
        let end = start + html[start..].find("</a>").expect("closed anchor");
        let anchor = &html[start..end];
        assert!(
            anchor.contains(&format!(r#"<span class="sr-only">{}</span>"#, entry.label)),
            "{anchor}"
        );
        assert!(anchor.contains(r#"aria-hidden="true""#), "{anchor}");
        assert!(
            anchor.contains(&format!(r#"data-icon="{}""#, entry.icon.name())),
            "{anchor}"
        );
    }
}

#[test]
fn repeated_renders_are_identical() {
    let clock = clock_on(2024, 3, 15);
    let first = block_on(render_footer(clock.clone(), true));
    let second = block_on(render_footer(clock, true));
    assert_eq!(first, second);
}

#[test]
fn empty_tables_still_render_structure() {
    static EMPTY_GROUPS: &[LinkGroup] = &[LinkGroup {
        heading: "Golem",
        entries: &[],
    }];
    let html = block_on(
        LocalServerRenderer::<FooterContent>::with_props(FooterContentProps {
            socials: &[],
            groups: EMPTY_GROUPS,
        })
        .hydratable(false)
        .render(),
    );
    assert!(html.contains("<footer"), "{html}");
    assert!(html.contains(">Golem</h3>"), "{html}");
    let ul = html.find("<ul").expect("list element");
    let open_end = ul + html[ul..].find('>').expect("closed tag");
    assert!(html[open_end + 1..].starts_with("</ul>"), "{html}");
    assert!(!html.contains("<a "), "{html}");
    assert!(html.contains("Ziverge Inc."), "{html}");
}
