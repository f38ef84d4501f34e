use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

const FRAME_MS: u32 = 16;
const CONTAINER_INSET: f64 = 32.0;

/// Width a chart may use inside a container of `container` pixels.
pub fn fit_width(container: f64, preferred: f64) -> f64 {
    (container - CONTAINER_INSET).min(preferred).max(0.0)
}

/// Linear progress in `[0, 1]` of a transition that starts `delay` ms
/// into the enter animation and lasts `duration` ms.
pub fn stagger_progress(elapsed: u32, delay: u32, duration: u32) -> f64 {
    if elapsed <= delay {
        return 0.0;
    }
    if duration == 0 {
        return 1.0;
    }
    (f64::from(elapsed - delay) / f64::from(duration)).min(1.0)
}

/// Tracks the width available to the element behind `node`, re-measuring
/// its parent on window resize.
#[hook]
pub fn use_fitted_width(node: NodeRef, preferred: f64) -> f64 {
    let width = use_state_eq(|| preferred);
    {
        let width = width.clone();
        use_effect_with_deps(
            move |(node, preferred)| {
                let preferred = *preferred;
                let node = node.clone();
                let measure = move || {
                    let parent = node
                        .cast::<web_sys::Element>()
                        .and_then(|el| el.parent_element());
                    if let Some(parent) = parent {
                        let rect = parent.get_bounding_client_rect();
                        width.set(fit_width(rect.width(), preferred));
                    }
                };
                measure();
                let listener = web_sys::window()
                    .map(|window| EventListener::new(&window, "resize", move |_| measure()));
                move || drop(listener)
            },
            (node, preferred),
        );
    }
    *width
}

/// Milliseconds since the chart's enter animation (re)started. Restarts
/// whenever `deps` change and stops ticking after `total_ms`.
#[hook]
pub fn use_enter_clock<D>(deps: D, total_ms: u32) -> u32
where
    D: PartialEq + 'static,
{
    let elapsed = use_state_eq(|| 0u32);
    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |_| {
                elapsed.set(0);
                let mut ticks = 0u32;
                let ticker = {
                    let elapsed = elapsed.clone();
                    Interval::new(FRAME_MS, move || {
                        ticks = ticks.saturating_add(FRAME_MS);
                        elapsed.set(ticks.min(total_ms));
                    })
                };
                let ticker = Rc::new(RefCell::new(Some(ticker)));
                let stopper = {
                    let ticker = ticker.clone();
                    Timeout::new(total_ms + FRAME_MS, move || {
                        ticker.borrow_mut().take();
                        elapsed.set(total_ms);
                    })
                };
                move || {
                    drop(stopper);
                    ticker.borrow_mut().take();
                }
            },
            deps,
        );
    }
    *elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width(1000.0, 480.0), 480.0);
        assert_eq!(fit_width(300.0, 480.0), 268.0);
        assert_eq!(fit_width(10.0, 480.0), 0.0);
    }

    #[test]
    fn test_stagger_progress() {
        assert_eq!(stagger_progress(0, 0, 800), 0.0);
        assert_eq!(stagger_progress(400, 0, 800), 0.5);
        assert_eq!(stagger_progress(1000, 0, 800), 1.0);
        // third bar starts 200ms late
        assert_eq!(stagger_progress(200, 200, 800), 0.0);
        assert_eq!(stagger_progress(600, 200, 800), 0.5);
        assert_eq!(stagger_progress(5, 0, 0), 1.0);
    }
}
