use chrono::NaiveDate;
use futures::executor::block_on;
use golem_docs_web::app::{App, AppProps};
use golem_docs_web::clock::ClockHandle;
use golem_docs_web::components::{Footer, GolemLogo};
use golem_docs_web::links::validate_registry;
use golem_docs_web::render::{render_document, render_footer};
use yew::html::ChildrenRenderer;
use yew::{LocalServerRenderer, html};

fn pinned(year: i32, month: u32, day: u32) -> ClockHandle {
    ClockHandle::fixed(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
}

#[test]
fn footer_renders_contentinfo_landmark() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains(r#"role="contentinfo""#));
}

#[test]
fn logo_renders_standalone() {
    let html = block_on(LocalServerRenderer::<GolemLogo>::new().render());
    assert!(html.contains("<svg"));
    assert!(html.contains("<polygon"));
}

#[test]
fn app_shell_places_footer_after_main() {
    let props = AppProps {
        clock: pinned(2024, 1, 1),
        children: ChildrenRenderer::new(vec![html! { <h1>{ "Docs" }</h1> }]),
    };
    let html = block_on(
        LocalServerRenderer::<App>::with_props(props)
            .hydratable(false)
            .render(),
    );
    let main = html.find(r#"id="main""#).expect("main landmark");
    let content = html.find("<h1>Docs</h1>").expect("page content");
    let footer = html.find("<footer").expect("footer");
    assert!(main < content && content < footer, "{html}");
    assert!(html.contains("© 2024 Ziverge Inc."), "{html}");
    assert!(html.contains(".sr-only{"), "{html}");
}

#[test]
fn year_follows_clock_across_new_year() {
    let eve = block_on(render_footer(pinned(2030, 12, 31), false));
    let day = block_on(render_footer(pinned(2031, 1, 1), false));
    assert!(eve.contains("© 2030 Ziverge Inc."));
    assert!(day.contains("© 2031 Ziverge Inc."));
    assert_eq!(
        eve.replace("2030", "YEAR"),
        day.replace("2031", "YEAR"),
        "only the year may differ between renders"
    );
}

#[test]
fn document_render_is_self_contained() {
    assert!(validate_registry().is_ok());
    let doc = block_on(render_document(pinned(2024, 1, 1)));
    assert!(doc.contains(r#"<html lang="en">"#));
    assert!(doc.trim_end().ends_with("</html>"));
}
