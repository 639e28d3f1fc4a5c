use crate::a11y::sr_only_css;
use crate::clock::{ClockHandle, ClockProvider};
use crate::components::Footer;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub clock: ClockHandle,
    #[prop_or_default]
    pub children: Children,
}

/// Page shell: skip link, main content, footer pinned to the bottom.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ClockProvider clock={props.clock.clone()}>
            <style>{ sr_only_css() }</style>
            <div class="flex min-h-screen flex-col">
                <a href="#main" class="sr-only">{ "Skip to content" }</a>
                <main id="main" class="flex-1">
                    { for props.children.iter() }
                </main>
                <Footer />
            </div>
        </ClockProvider>
    }
}
