//! Checks the server-rendered footer against its published link contract.

use golem_docs_web::components::footer::copyright_line;
use golem_docs_web::links::{SOCIAL_LINKS, validate_registry};
use regex::Regex;
use serde::Serialize;
use once_cell::sync::Lazy;

/// Links the footer must render, in render order: socials, then the Golem and
/// Support columns.
pub const EXPECTED_LINKS: &[(&str, &str, &str)] = &[
    ("Social", "Github", "https://github.com/golemcloud"),
    ("Social", "Twitter", "https://twitter.com/golemcloud"),
    ("Social", "Email", "mailto:contact@golem.cloud"),
    ("Social", "Discord", "https://discord.gg/UjXeH8uG4x"),
    ("Golem", "About", "https://www.golem.cloud"),
    ("Golem", "Console", "https://console.golem.cloud"),
    ("Support", "Blog", "https://www.golem.cloud/blog"),
    ("Support", "Help Center", "https://support.golem.cloud"),
];

static ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<a\s([^>]*)>(.*?)</a>").expect("anchor regex"));
static ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([A-Za-z][\w-]*)="([^"]*)""#).expect("attribute regex"));
static SR_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span class="sr-only">([^<]*)</span>"#).expect("sr-only regex")
});
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub failures: Vec<String>,
}

impl CheckResult {
    fn from_failures(name: &'static str, failures: Vec<String>) -> Self {
        if failures.is_empty() {
            log::debug!("check {name} passed");
        } else {
            log::warn!("check {name} failed: {}", failures.join("; "));
        }
        Self {
            name,
            passed: failures.is_empty(),
            failures,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub date: String,
    pub year: i32,
    pub checks: Vec<CheckResult>,
}

impl AuditReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub attrs: Vec<(String, String)>,
    pub body: String,
}

impl Anchor {
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Visible or screen-reader text, tags stripped.
    #[must_use]
    pub fn text(&self) -> String {
        TAG.replace_all(&self.body, "").trim().to_string()
    }
}

#[must_use]
pub fn anchors(html: &str) -> Vec<Anchor> {
    ANCHOR
        .captures_iter(html)
        .map(|cap| Anchor {
            attrs: ATTR
                .captures_iter(&cap[1])
                .map(|a| (a[1].to_string(), a[2].to_string()))
                .collect(),
            body: cap[2].to_string(),
        })
        .collect()
}

fn check_registry() -> CheckResult {
    let failures = validate_registry()
        .err()
        .map(|e| vec![e.to_string()])
        .unwrap_or_default();
    CheckResult::from_failures("registry", failures)
}

fn check_links(found: &[Anchor]) -> CheckResult {
    let mut failures = Vec::new();
    if found.len() != EXPECTED_LINKS.len() {
        failures.push(format!(
            "expected {} links, found {}",
            EXPECTED_LINKS.len(),
            found.len()
        ));
    }
    for (i, (group, label, url)) in EXPECTED_LINKS.iter().enumerate() {
        let Some(anchor) = found.get(i) else {
            failures.push(format!("{group}/{label}: missing"));
            continue;
        };
        if anchor.attr("href") != Some(*url) {
            failures.push(format!(
                "{group}/{label}: expected {url} at position {i}, found {:?}",
                anchor.attr("href")
            ));
        }
        if anchor.text() != *label {
            failures.push(format!(
                "{group}/{label}: link text is {:?}",
                anchor.text()
            ));
        }
    }
    CheckResult::from_failures("links", failures)
}

fn check_no_opener(found: &[Anchor]) -> CheckResult {
    let failures = found
        .iter()
        .filter_map(|anchor| {
            let href = anchor.attr("href").unwrap_or("<no href>");
            let new_context = anchor.attr("target") == Some("_blank");
            let no_opener = anchor
                .attr("rel")
                .is_some_and(|rel| rel.split_whitespace().any(|t| t == "noopener"));
            (!new_context || !no_opener).then(|| {
                format!(
                    "{href}: target={:?} rel={:?}",
                    anchor.attr("target"),
                    anchor.attr("rel")
                )
            })
        })
        .collect();
    CheckResult::from_failures("no-opener", failures)
}

fn check_social_labels(found: &[Anchor]) -> CheckResult {
    let mut failures = Vec::new();
    for entry in SOCIAL_LINKS {
        let Some(anchor) = found.iter().find(|a| a.attr("href") == Some(entry.url)) else {
            failures.push(format!("{}: no anchor", entry.label));
            continue;
        };
        let labels: Vec<&str> = SR_ONLY
            .captures_iter(&anchor.body)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        if labels != [entry.label] {
            failures.push(format!("{}: screen reader labels {labels:?}", entry.label));
        }
        let svg = anchor.body.find("<svg").map(|i| &anchor.body[i..]);
        let hidden = svg
            .and_then(|s| s.split('>').next())
            .is_some_and(|tag| tag.contains(r#"aria-hidden="true""#));
        if !hidden {
            failures.push(format!("{}: icon glyph is exposed to assistive tech", entry.label));
        }
    }
    CheckResult::from_failures("social-labels", failures)
}

fn check_copyright(html: &str, year: i32) -> CheckResult {
    let expected = copyright_line(year);
    let failures = if html.contains(&expected) {
        Vec::new()
    } else {
        vec![format!("missing {expected:?}")]
    };
    CheckResult::from_failures("copyright", failures)
}

fn check_stable(first: &str, second: &str) -> CheckResult {
    let failures = if first == second {
        Vec::new()
    } else {
        vec!["two renders with the same date produced different markup".to_string()]
    };
    CheckResult::from_failures("stable-render", failures)
}

/// Audits two consecutive renders made with the same pinned date.
#[must_use]
pub fn run(first: &str, second: &str, date: chrono::NaiveDate) -> AuditReport {
    use chrono::Datelike;
    let found = anchors(first);
    AuditReport {
        date: date.to_string(),
        year: date.year(),
        checks: vec![
            check_registry(),
            check_links(&found),
            check_no_opener(&found),
            check_social_labels(&found),
            check_copyright(first, date.year()),
            check_stable(first, second),
        ],
    }
}
