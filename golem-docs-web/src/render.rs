//! Server-side rendering of the footer, for static pages and audits.

use crate::a11y::sr_only_css;
use crate::clock::{ClockHandle, ClockProvider};
use crate::components::Footer;
use yew::LocalServerRenderer;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterPageProps {
    #[prop_or_default]
    pub clock: ClockHandle,
}

/// The footer with its date source pinned to `clock`.
#[function_component(FooterPage)]
pub fn footer_page(props: &FooterPageProps) -> Html {
    html! {
        <ClockProvider clock={props.clock.clone()}>
            <Footer />
        </ClockProvider>
    }
}

/// Footer markup as a fragment. Pass `hydratable = true` when the client will
/// hydrate the output.
pub async fn render_footer(clock: ClockHandle, hydratable: bool) -> String {
    LocalServerRenderer::<FooterPage>::with_props(FooterPageProps { clock })
        .hydratable(hydratable)
        .render()
        .await
}

/// Standalone HTML document around the footer fragment.
pub async fn render_document(clock: ClockHandle) -> String {
    let footer = render_footer(clock, false).await;
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Golem</title>\n<style>{}</style>\n</head>\n<body>\n{footer}\n</body>\n</html>\n",
        sr_only_css()
    )
}
