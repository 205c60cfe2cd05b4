//! Price range text inputs committed to the URL once typing settles.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::debounce::{Debouncer, TimerDriver};
use crate::filter_codec::encode_filter;
use crate::filter_descriptor::{FilterDescriptor, parse_price_bound};
use crate::query_params::{Location, url_for};
use crate::storefront_const::{PARAM_MAX_PRICE, PARAM_MIN_PRICE, PRICE_RANGE_DEBOUNCE_MS};

/// Raw text of the two range fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceRangeBuffer {
    pub min_price: String,
    pub max_price: String,
}

impl PriceRangeBuffer {
    /// Values currently reflected in the URL, empty when absent.
    pub fn from_location(location: &Location) -> Self {
        Self {
            min_price: location.params.get(PARAM_MIN_PRICE).unwrap_or_default().to_string(),
            max_price: location.params.get(PARAM_MAX_PRICE).unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePhase {
    Idle,
    Editing,
}

/// URL to navigate to for `buffer`, or `None` when committing would change nothing.
pub fn price_range_commit_url(location: &Location, buffer: &PriceRangeBuffer) -> Option<String> {
    if *buffer == PriceRangeBuffer::from_location(location) {
        return None;
    }
    let bound = |raw: &str| (!raw.is_empty()).then(|| parse_price_bound(raw));
    let min = bound(&buffer.min_price);
    let max = bound(&buffer.max_price);
    if min.is_none() && max.is_none() {
        return None;
    }
    let params = encode_filter(&location.params, &FilterDescriptor::PriceRange { min, max });
    let url = url_for(&location.path, &params);
    // e.g. "10.0" typed over "10", or one bound cleared while the URL keeps it
    if url == location.to_url() {
        return None;
    }
    Some(url)
}

struct RangeEditState {
    phase: RangePhase,
    buffer: PriceRangeBuffer,
    location: Location,
}

/// Buffers min/max edits and fires a single navigation after a quiet period.
///
/// Every keystroke re-arms the timer; at most one commit is pending at a time.
/// Unmounting (or dropping) cancels the pending commit.
pub struct RangeInputDebouncer<D: TimerDriver> {
    debouncer: Debouncer<D>,
    state: Rc<RefCell<RangeEditState>>,
    navigate: Rc<dyn Fn(String)>,
    delay_ms: u32,
}

impl<D: TimerDriver> RangeInputDebouncer<D> {
    pub fn new(driver: D, location: Location, navigate: Rc<dyn Fn(String)>) -> Self {
        Self::with_delay(driver, location, navigate, PRICE_RANGE_DEBOUNCE_MS)
    }

    pub fn with_delay(driver: D, location: Location, navigate: Rc<dyn Fn(String)>, delay_ms: u32) -> Self {
        let state = RangeEditState {
            phase: RangePhase::Idle,
            buffer: PriceRangeBuffer::from_location(&location),
            location,
        };
        Self {
            debouncer: Debouncer::new(driver),
            state: Rc::new(RefCell::new(state)),
            navigate,
            delay_ms,
        }
    }

    pub fn phase(&self) -> RangePhase {
        self.state.borrow().phase
    }

    pub fn buffer(&self) -> PriceRangeBuffer {
        self.state.borrow().buffer.clone()
    }

    pub fn set_min(&mut self, text: impl Into<String>) {
        self.state.borrow_mut().buffer.min_price = text.into();
        self.restart();
    }

    pub fn set_max(&mut self, text: impl Into<String>) {
        self.state.borrow_mut().buffer.max_price = text.into();
        self.restart();
    }

    /// Called after every navigation with the new location. While idle the
    /// fields are reset to what the URL now says; an edit in flight is kept.
    pub fn sync_location(&mut self, location: Location) {
        let mut state = self.state.borrow_mut();
        if state.phase == RangePhase::Idle {
            state.buffer = PriceRangeBuffer::from_location(&location);
        }
        state.location = location;
    }

    pub fn unmount(&mut self) {
        self.debouncer.cancel_all();
        self.state.borrow_mut().phase = RangePhase::Idle;
    }

    fn restart(&mut self) {
        self.state.borrow_mut().phase = RangePhase::Editing;
        let state = Rc::clone(&self.state);
        let navigate = Rc::clone(&self.navigate);
        self.debouncer.schedule(self.delay_ms, move || {
            let url = {
                let mut state = state.borrow_mut();
                state.phase = RangePhase::Idle;
                price_range_commit_url(&state.location, &state.buffer)
            };
            match url {
                Some(url) => navigate(url),
                None => debug!("price range unchanged, not navigating"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::ManualTimers;
    use crate::query_params::QueryParams;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, Rc<dyn Fn(String)>) {
        let urls = Rc::new(RefCell::new(Vec::new()));
        let navigate = {
            let urls = Rc::clone(&urls);
            Rc::new(move |url: String| urls.borrow_mut().push(url)) as Rc<dyn Fn(String)>
        };
        (urls, navigate)
    }

    #[test]
    fn commit_url_encodes_non_empty_bounds() {
        let location = Location::parse("/collections/all?available=true");
        let buffer = PriceRangeBuffer { min_price: "10".into(), max_price: String::new() };
        assert_eq!(
            price_range_commit_url(&location, &buffer).as_deref(),
            Some("/collections/all?available=true&minPrice=10")
        );
    }

    #[test]
    fn commit_url_guard() {
        let location = Location::parse("/collections/all?minPrice=10&maxPrice=50");
        let same = PriceRangeBuffer { min_price: "10".into(), max_price: "50".into() };
        assert_eq!(price_range_commit_url(&location, &same), None);

        let empty = Location::parse("/collections/all");
        assert_eq!(price_range_commit_url(&empty, &PriceRangeBuffer::default()), None);
    }

    #[test]
    fn commit_url_skips_edits_that_land_on_the_current_url() {
        let location = Location::parse("/collections/all?minPrice=10&maxPrice=50");
        let reformatted = PriceRangeBuffer { min_price: "10.0".into(), max_price: "50".into() };
        assert_eq!(price_range_commit_url(&location, &reformatted), None);
        let max_cleared = PriceRangeBuffer { min_price: "10".into(), max_price: String::new() };
        assert_eq!(price_range_commit_url(&location, &max_cleared), None);
    }

    #[test]
    fn clearing_a_bound_kept_by_the_url_does_not_navigate() {
        let timers = ManualTimers::new();
        let (urls, navigate) = recorder();
        let location = Location::parse("/c?minPrice=10&maxPrice=50");
        let mut input = RangeInputDebouncer::new(timers.clone(), location, navigate);
        input.set_max("");
        timers.advance(500);
        assert!(urls.borrow().is_empty());
        assert_eq!(input.phase(), RangePhase::Idle);

        input.set_max("80");
        timers.advance(500);
        assert_eq!(*urls.borrow(), vec!["/c?minPrice=10&maxPrice=80".to_string()]);
    }

    #[test]
    fn buffer_starts_from_url() {
        let timers = ManualTimers::new();
        let (_urls, navigate) = recorder();
        let location = Location::new("/search", QueryParams::from_pairs([("maxPrice", "99")]));
        let input = RangeInputDebouncer::new(timers, location, navigate);
        assert_eq!(input.buffer(), PriceRangeBuffer { min_price: String::new(), max_price: "99".into() });
        assert_eq!(input.phase(), RangePhase::Idle);
    }

    #[test]
    fn phases_follow_keystrokes() {
        let timers = ManualTimers::new();
        let (urls, navigate) = recorder();
        let mut input = RangeInputDebouncer::new(timers.clone(), Location::parse("/collections/all"), navigate);
        input.set_min("5");
        assert_eq!(input.phase(), RangePhase::Editing);
        timers.advance(500);
        assert_eq!(input.phase(), RangePhase::Idle);
        assert_eq!(*urls.borrow(), vec!["/collections/all?minPrice=5".to_string()]);
    }

    #[test]
    fn sync_location_keeps_edit_in_flight() {
        let timers = ManualTimers::new();
        let (_urls, navigate) = recorder();
        let mut input = RangeInputDebouncer::new(timers.clone(), Location::parse("/collections/all"), navigate);
        input.set_max("40");
        input.sync_location(Location::parse("/collections/all?available=true"));
        assert_eq!(input.buffer().max_price, "40");

        input.unmount();
        input.sync_location(Location::parse("/collections/all?maxPrice=70"));
        assert_eq!(input.buffer().max_price, "70");
    }
}
