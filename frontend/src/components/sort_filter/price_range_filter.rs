//! Min/max price inputs committed to the URL after typing pauses.

use std::{cell::RefCell, rc::Rc};

use common::range_input::{PriceRangeBuffer, RangeInputDebouncer};
use dioxus::{logger::tracing, prelude::*};
use futures_channel::mpsc::unbounded;
use futures_util::StreamExt;

use crate::components::sort_filter::SortFilterContext;
use crate::routes::navigate_to_url;
use crate::timers::BrowserTimers;

type SharedDebouncer = Rc<RefCell<RangeInputDebouncer<BrowserTimers>>>;

#[component]
pub fn PriceRangeFilter(replace: bool) -> Element {
    let SortFilterContext { location, .. } = use_context::<SortFilterContext>();

    // timer callbacks run outside the component; they hand URLs to this task
    let debouncer: SharedDebouncer = use_hook(move || {
        let (tx, mut rx) = unbounded::<String>();
        spawn(async move {
            while let Some(url) = rx.next().await {
                navigate_to_url(&url, replace);
            }
        });
        let navigate: Rc<dyn Fn(String)> = Rc::new(move |url: String| {
            if tx.unbounded_send(url).is_err() {
                tracing::warn!("price range committed after unmount");
            }
        });
        Rc::new(RefCell::new(RangeInputDebouncer::new(BrowserTimers, location.peek().clone(), navigate)))
    });

    let mut buffer = use_signal(|| debouncer.borrow().buffer());

    let on_location = debouncer.clone();
    use_effect(move || {
        let location = location.read().clone();
        let mut debouncer = on_location.borrow_mut();
        debouncer.sync_location(location);
        buffer.set(debouncer.buffer());
    });

    let on_drop = debouncer.clone();
    use_drop(move || on_drop.borrow_mut().unmount());

    let on_min = debouncer.clone();
    let on_max = debouncer.clone();
    let PriceRangeBuffer { min_price, max_price } = buffer();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 4px;
            ",
            label {
                style: "display: flex; flex-direction: column; gap: 4px; font-size: 14px;",
                "From"
                input {
                    r#type: "number",
                    name: "minPrice",
                    placeholder: "$",
                    value: "{min_price}",
                    oninput: move |e| {
                        let mut debouncer = on_min.borrow_mut();
                        debouncer.set_min(e.value());
                        buffer.set(debouncer.buffer());
                    },
                    style: "padding: 6px; border: 1px solid rgba(0,0,0,0.3); border-radius: 4px;",
                }
            }
            label {
                style: "display: flex; flex-direction: column; gap: 4px; font-size: 14px;",
                "To"
                input {
                    r#type: "number",
                    name: "maxPrice",
                    placeholder: "$",
                    value: "{max_price}",
                    oninput: move |e| {
                        let mut debouncer = on_max.borrow_mut();
                        debouncer.set_max(e.value());
                        buffer.set(debouncer.buffer());
                    },
                    style: "padding: 6px; border: 1px solid rgba(0,0,0,0.3); border-radius: 4px;",
                }
            }
        }
    }
}
