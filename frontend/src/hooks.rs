use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Date};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config::MOTION;
use crate::motion::count_up::CountUp;
use crate::motion::registry::ScrollRegistry;
use crate::motion::reveal::{RevealTransition, ViewportRevealTrigger};
use crate::motion::scroll::{ElementLayout, ScrollRange};
use crate::motion::typewriter::{Typewriter, TypewriterConfig};

/// Handed down from the App so sections share one scroll listener.
#[derive(Clone, PartialEq)]
pub struct MotionContext {
    pub registry: ScrollRegistry,
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Offset geometry, not `getBoundingClientRect`, so transforms applied from
/// the resulting progress never feed back into it.
fn layout_of(node: &NodeRef) -> ElementLayout {
    let Some(element) = node.cast::<HtmlElement>().filter(|element| element.is_connected()) else {
        return ElementLayout::detached();
    };
    let height = f64::from(element.offset_height());
    let mut document_top = 0.0;
    let mut current = Some(element);
    while let Some(ancestor) = current {
        document_top += f64::from(ancestor.offset_top());
        current = ancestor
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    ElementLayout::in_document(document_top, height, scroll_y())
}

const DISPATCH_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Wires window scroll/resize to `registry` for the lifetime of the caller.
#[hook]
pub fn use_scroll_dispatch(registry: ScrollRegistry) {
    use_effect_with_deps(
        move |registry: &ScrollRegistry| {
            let window = web_sys::window();
            let callback = Closure::<dyn Fn()>::new({
                let registry = registry.clone();
                move || {
                    registry.dispatch(viewport_height());
                }
            });

            if let Some(window) = &window {
                for event in DISPATCH_EVENTS {
                    if let Err(err) = window
                        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                    {
                        error!("Failed to listen for {}: {:?}", event, err);
                    }
                }
            }

            move || {
                if let Some(window) = window {
                    for event in DISPATCH_EVENTS {
                        let _ = window.remove_event_listener_with_callback(
                            event,
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        },
        registry,
    );
}

/// Progress of `node` through `range`, updated on every scroll and resize.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state(|| 0.0_f64);
    let context = use_context::<MotionContext>();

    {
        let setter = progress.setter();
        use_effect_with_deps(
            move |(node, range, context)| {
                let subscription = match context {
                    Some(context) => {
                        let probe = node.clone();
                        let subscription = context.registry.subscribe(
                            *range,
                            move || layout_of(&probe),
                            move |value| setter.set(value),
                        );
                        debug!("{} scroll subscriptions live", context.registry.len());
                        // Initial value before the first scroll.
                        context.registry.dispatch(viewport_height());
                        Some(subscription)
                    }
                    None => {
                        debug!("No motion context, scroll transforms stay static");
                        None
                    }
                };
                move || {
                    if let Some(subscription) = subscription {
                        subscription.cancel();
                    }
                }
            },
            (node, range, context),
        );
    }

    *progress
}

struct RevealObserver {
    observer: IntersectionObserver,
    trigger: Rc<RefCell<ViewportRevealTrigger>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn release(self) {
        self.observer.disconnect();
        self.trigger.borrow_mut().detach();
    }
}

fn observe_reveal(
    node: &NodeRef,
    threshold: f64,
    trigger_once: bool,
    visible: UseStateSetter<bool>,
) -> Option<RevealObserver> {
    let mut trigger = match ViewportRevealTrigger::new(threshold, trigger_once) {
        Ok(trigger) => trigger,
        Err(err) => {
            error!("Reveal disabled: {}", err);
            visible.set(true);
            return None;
        }
    };
    let Some(element) = node.cast::<Element>() else {
        visible.set(true);
        return None;
    };
    trigger.attach();
    let trigger = Rc::new(RefCell::new(trigger));

    let on_change = visible.clone();
    let shared = trigger.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let mut trigger = shared.borrow_mut();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                match trigger.update(entry.intersection_ratio()) {
                    RevealTransition::Entered => on_change.set(true),
                    RevealTransition::Exited => on_change.set(false),
                    RevealTransition::Unchanged => {}
                }
            }
            if !trigger.needs_observation() {
                let observation = trigger.observation();
                debug!(
                    "Reveal latched (visible: {}, fired: {}), releasing observer",
                    observation.is_visible, observation.has_fired_once
                );
                observer.disconnect();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&Array::of2(
        &JsValue::from_f64(0.0),
        &JsValue::from_f64(threshold),
    ));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some(RevealObserver {
                observer,
                trigger,
                _callback: callback,
            })
        }
        Err(err) => {
            error!("IntersectionObserver unavailable: {:?}", err);
            visible.set(true);
            None
        }
    }
}

/// True once at least `threshold` of `node` is on screen. With
/// `trigger_once` it stays true and the observer is released.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64, trigger_once: bool) -> bool {
    let visible = use_state(|| false);

    {
        let setter = visible.setter();
        use_effect_with_deps(
            move |(node, threshold, trigger_once)| {
                let observer = observe_reveal(node, *threshold, *trigger_once, setter);
                move || {
                    if let Some(observer) = observer {
                        observer.release();
                    }
                }
            },
            (node, threshold, trigger_once),
        );
    }

    *visible
}

/// Flips to true shortly after mount, for on-load entrance animations.
#[hook]
pub fn use_entered() -> bool {
    let entered = use_state(|| false);

    {
        let setter = entered.setter();
        use_effect_with_deps(
            move |_| {
                // Long enough for the hidden pose to paint first.
                let timeout = Timeout::new(20, move || setter.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    *entered
}

/// Rendered count-up text, `None` until `gate` opens.
#[hook]
pub fn use_count_up(count_up: CountUp, gate: bool) -> Option<String> {
    let elapsed = use_state(|| 0.0_f64);
    let started_at = use_mut_ref(|| None::<f64>);
    let running = gate && !count_up.is_finished(*elapsed);

    {
        let elapsed = elapsed.setter();
        let started_at = started_at.clone();
        use_interval(
            move || {
                let now = Date::now();
                let start = *started_at.borrow_mut().get_or_insert(now);
                elapsed.set(now - start);
            },
            if running { MOTION.count_up_frame_ms } else { 0 },
        );
    }

    gate.then(|| count_up.display_at(*elapsed))
}

#[hook]
pub fn use_typewriter(words: &'static [&'static str], config: TypewriterConfig) -> String {
    let writer = use_mut_ref(|| Typewriter::new(words, config));
    let step = use_state(|| 0_u64);

    {
        let writer = writer.clone();
        let step_setter = step.setter();
        use_effect_with_deps(
            move |step| {
                let step = *step;
                let done = writer.borrow().is_done();
                let delay = writer.borrow().delay();
                let timeout = (!done).then(move || {
                    Timeout::new(delay, move || {
                        writer.borrow_mut().tick();
                        step_setter.set(step + 1);
                    })
                });
                move || drop(timeout)
            },
            *step,
        );
    }

    let text = writer.borrow().text();
    text
}
