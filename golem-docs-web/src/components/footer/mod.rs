//! Site-wide footer: brand block with socials and copyright, then one
//! navigation column per link group.

use crate::clock::use_current_year;
use crate::components::{ExternalLink, GolemLogo, SocialIconGlyph};
use crate::links::{LinkGroup, NAV_GROUPS, SOCIAL_LINKS, SocialEntry};
use yew::prelude::*;

#[cfg(test)]
mod tests;

pub const COPYRIGHT_HOLDER: &str = "Ziverge Inc.";

const FOOTER_CLASS: &str = "mt-auto nx-bg-gray-100 nx-pb-[env(safe-area-inset-bottom)] dark:nx-bg-neutral-900 print:nx-bg-transparent";
const FRAME_CLASS: &str = "overflow-hidden py-10 nx-border-t dark:nx-border-neutral-800 contrast-more:nx-border-neutral-400 dark:contrast-more:nx-border-neutral-400";
const SOCIAL_LINK_CLASS: &str = "nx-h-7 nx-rounded-md nx-transition-colors nx-text-gray-600 dark:nx-text-gray-400 nx-px-2 hover:nx-bg-gray-100 hover:nx-text-gray-900 dark:hover:nx-bg-primary-100/5 dark:hover:nx-text-gray-50 border grid place-items-center dark:nx-border-neutral-700 contrast-more:nx-border-neutral-400 dark:contrast-more:nx-border-neutral-400";
const NAV_LINK_CLASS: &str = "text-sm leading-6 nx-inline-block nx-text-gray-500 hover:nx-text-gray-900 dark:nx-text-gray-400 dark:hover:nx-text-gray-300 contrast-more:nx-text-gray-900 contrast-more:nx-underline contrast-more:dark:nx-text-gray-50 nx-w-full nx-break-words";

/// `© 2024 Ziverge Inc.`
#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {COPYRIGHT_HOLDER}")
}

#[derive(Properties, PartialEq, Clone)]
pub struct SocialRowProps {
    pub entries: &'static [SocialEntry],
}

#[function_component(SocialRow)]
pub fn social_row(props: &SocialRowProps) -> Html {
    html! {
        <div class="flex justify-center gap-5">
            { for props.entries.iter().map(|entry| html! {
                <ExternalLink key={entry.url} href={entry.url} class={classes!(SOCIAL_LINK_CLASS)}>
                    <span class="sr-only">{ entry.label }</span>
                    <SocialIconGlyph icon={entry.icon} />
                </ExternalLink>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FooterColumnProps {
    pub group: LinkGroup,
}

#[function_component(FooterColumn)]
pub fn footer_column(props: &FooterColumnProps) -> Html {
    let group = props.group;
    html! {
        <nav aria-label={group.heading}>
            <h3 class="text-sm font-semibold leading-6">{ group.heading }</h3>
            <ul role="list" class="mt-6 space-y-4">
                { for group.entries.iter().map(|entry| html! {
                    <li key={entry.label}>
                        <ExternalLink href={entry.url} class={classes!(NAV_LINK_CLASS)}>
                            { entry.label }
                        </ExternalLink>
                    </li>
                }) }
            </ul>
        </nav>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FooterContentProps {
    pub socials: &'static [SocialEntry],
    pub groups: &'static [LinkGroup],
}

/// Footer layout over arbitrary link tables; [`Footer`] binds the built-in ones.
#[function_component(FooterContent)]
pub fn footer_content(props: &FooterContentProps) -> Html {
    let year = use_current_year();
    log::debug!("rendering footer for {year}");
    html! {
        <footer class={FOOTER_CLASS} role="contentinfo">
            <div class={FRAME_CLASS}>
                <div class="mx-auto max-w-7xl px-6 pb-8 pt-12 lg:px-8">
                    <div class="lg:grid lg:grid-cols-3 lg:gap-8">
                        <div class="flex flex-col items-start justify-center gap-5">
                            <GolemLogo />
                            <SocialRow entries={props.socials} />
                            <div class="text-center text-sm leading-5">
                                <div class="copyright">{ copyright_line(year) }</div>
                            </div>
                        </div>
                        <div class="mt-16 grid grid-cols-2 gap-8 lg:col-span-2 lg:mt-0">
                            { for props.groups.iter().map(|group| html! {
                                <FooterColumn key={group.heading} group={*group} />
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! { <FooterContent socials={SOCIAL_LINKS} groups={NAV_GROUPS} /> }
}
