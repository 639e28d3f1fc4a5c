//! Calendar source for the footer's copyright year.
//!
//! Rendering code never reads the wall clock directly; it asks the [`Clock`]
//! found in the component context, so server renders and tests can pin a date.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::rc::Rc;
use yew::prelude::*;

pub trait Clock {
    /// The calendar date at the moment of the call.
    fn today(&self) -> NaiveDate;

    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Local wall clock, read on every call so a long-lived page picks up a new year.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Clock pinned to the given day, or `None` when the date does not exist.
    #[must_use]
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Shared clock handle stored in the Yew context.
///
/// Two handles are equal only when they point at the same clock instance.
#[derive(Clone)]
pub struct ClockHandle(Rc<dyn Clock>);

impl ClockHandle {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Rc::new(clock))
    }

    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock)
    }

    #[must_use]
    pub fn fixed(date: NaiveDate) -> Self {
        Self::new(FixedClock::new(date))
    }

    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.0.current_year()
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.0.today()
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

impl PartialEq for ClockHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl fmt::Debug for ClockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClockHandle").field(&self.today()).finish()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ClockProviderProps {
    #[prop_or_default]
    pub clock: ClockHandle,
    #[prop_or_default]
    pub children: Children,
}

/// Makes `clock` the date source for every descendant component.
#[function_component(ClockProvider)]
pub fn clock_provider(props: &ClockProviderProps) -> Html {
    html! {
        <ContextProvider<ClockHandle> context={props.clock.clone()}>
            { for props.children.iter() }
        </ContextProvider<ClockHandle>>
    }
}

/// Year for the copyright line; falls back to the system clock outside a provider.
#[hook]
pub fn use_current_year() -> i32 {
    use_context::<ClockHandle>()
        .unwrap_or_default()
        .current_year()
}
