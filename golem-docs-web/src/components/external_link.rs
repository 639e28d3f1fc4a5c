use crate::a11y::{NEW_CONTEXT_TARGET, NO_OPENER_REL};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that opens in a new tab without handing the page to the target.
#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target={NEW_CONTEXT_TARGET}
            rel={NO_OPENER_REL}
            class={props.class.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}
