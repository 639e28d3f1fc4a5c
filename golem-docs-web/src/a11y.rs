// Accessibility helpers

/// Get CSS for visible focus indicators and screen reader utilities
///
/// The footer's social links carry their accessible name in an `sr-only` span,
/// so any page embedding the footer outside the docs framework needs this rule.
#[must_use]
pub const fn sr_only_css() -> &'static str {
    ":focus-visible{outline:2px solid currentColor;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;padding:0;margin:-1px;overflow:hidden;clip:rect(0,0,0,0);white-space:nowrap;border-width:0}"
}

/// Attributes that keep an opened tab from reaching back into this page.
pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const NO_OPENER_REL: &str = "noopener";
