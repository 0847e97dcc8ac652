use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use crate::motion::scroll::{ElementLayout, ScrollProgressTracker, ScrollRange};

type LayoutProbe = Box<dyn Fn() -> ElementLayout>;
type ProgressCallback = Rc<dyn Fn(f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Entry {
    id: SubscriptionId,
    tracker: ScrollProgressTracker,
    probe: LayoutProbe,
    callback: ProgressCallback,
    last: Option<f64>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Inner {
    fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

/// Shared scroll state fan-out.
///
/// One host listener calls [`ScrollRegistry::dispatch`]; every subscriber
/// owns its own tracker and is only called back when its progress changes.
/// Handles are cheap clones of the same registry.
#[derive(Clone, Default)]
pub struct ScrollRegistry {
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for ScrollRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<P, F>(&self, range: ScrollRange, probe: P, callback: F) -> Subscription
    where
        P: Fn() -> ElementLayout + 'static,
        F: Fn(f64) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            tracker: ScrollProgressTracker::new(range),
            probe: Box::new(probe),
            callback: Rc::new(callback),
            last: None,
        });
        debug!("scroll subscription {:?} added ({} live)", id, inner.entries.len());
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recomputes every live subscription and notifies those whose progress
    /// moved. Returns the number of callbacks fired.
    pub fn dispatch(&self, viewport_height: f64) -> usize {
        let pending: Vec<(SubscriptionId, ProgressCallback, f64)> = {
            let mut inner = self.inner.borrow_mut();
            inner
                .entries
                .iter_mut()
                .filter_map(|entry| {
                    let layout = (entry.probe)();
                    let progress = entry.tracker.update(layout, viewport_height);
                    if entry.last == Some(progress) {
                        return None;
                    }
                    entry.last = Some(progress);
                    Some((entry.id, entry.callback.clone(), progress))
                })
                .collect()
        };

        // Callbacks may re-render and drop other subscriptions, so the borrow
        // is released first and liveness rechecked per call.
        let mut fired = 0;
        for (id, callback, progress) in pending {
            if self.inner.borrow().contains(id) {
                callback(progress);
                fired += 1;
            }
        }
        fired
    }

    fn remove(inner: &RefCell<Inner>, id: SubscriptionId) {
        let removed = {
            let mut inner = inner.borrow_mut();
            inner
                .entries
                .iter()
                .position(|entry| entry.id == id)
                .map(|index| (inner.entries.remove(index), inner.entries.len()))
        };
        // The entry's closures are dropped outside the borrow; they may own
        // other subscriptions.
        if let Some((mut entry, live)) = removed {
            entry.tracker.detach();
            debug!("scroll subscription {:?} removed ({} live)", id, live);
        }
    }
}

/// Live registration; dropping it detaches synchronously.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<Inner>>,
}

impl Subscription {
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            ScrollRegistry::remove(&inner, self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const VIEWPORT: f64 = 1000.0;

    fn counting(registry: &ScrollRegistry, top: Rc<Cell<f64>>) -> (Subscription, Rc<Cell<usize>>, Rc<Cell<f64>>) {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(-1.0));
        let subscription = registry.subscribe(
            ScrollRange::leaving(),
            move || ElementLayout::attached(top.get(), 1000.0),
            {
                let calls = calls.clone();
                let seen = seen.clone();
                move |progress| {
                    calls.set(calls.get() + 1);
                    seen.set(progress);
                }
            },
        );
        (subscription, calls, seen)
    }

    #[test]
    fn notifies_only_when_progress_changes() {
        let registry = ScrollRegistry::new();
        let top = Rc::new(Cell::new(0.0));
        let (_subscription, calls, seen) = counting(&registry, top.clone());

        registry.dispatch(VIEWPORT);
        assert_eq!((calls.get(), seen.get()), (1, 0.0));

        registry.dispatch(VIEWPORT);
        assert_eq!(calls.get(), 1);

        top.set(-400.0);
        registry.dispatch(VIEWPORT);
        assert_eq!((calls.get(), seen.get()), (2, 0.4));
    }

    #[test]
    fn no_callbacks_after_teardown() {
        let registry = ScrollRegistry::new();
        let top = Rc::new(Cell::new(0.0));
        let (subscription, calls, _) = counting(&registry, top.clone());

        registry.dispatch(VIEWPORT);
        assert_eq!(calls.get(), 1);

        subscription.cancel();
        assert!(registry.is_empty());

        for step in 1..=5 {
            top.set(step as f64 * -100.0);
            assert_eq!(registry.dispatch(VIEWPORT), 0);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscribers_keep_independent_state() {
        let registry = ScrollRegistry::new();
        let first_top = Rc::new(Cell::new(-100.0));
        let second_top = Rc::new(Cell::new(-900.0));
        let (_first, first_calls, first_seen) = counting(&registry, first_top);
        let (second, second_calls, second_seen) = counting(&registry, second_top);
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.dispatch(VIEWPORT), 2);
        assert_eq!(first_seen.get(), 0.1);
        assert_eq!(second_seen.get(), 0.9);

        drop(second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.dispatch(VIEWPORT), 0);
        assert_eq!((first_calls.get(), second_calls.get()), (1, 1));
    }

    #[test]
    fn callback_can_drop_a_later_subscriber_mid_dispatch() {
        let registry = ScrollRegistry::new();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let victim_calls = Rc::new(Cell::new(0));

        let _killer = registry.subscribe(
            ScrollRange::leaving(),
            || ElementLayout::attached(-10.0, 100.0),
            {
                let victim = victim.clone();
                move |_| {
                    victim.borrow_mut().take();
                }
            },
        );
        let subscription = registry.subscribe(
            ScrollRange::leaving(),
            || ElementLayout::attached(-20.0, 100.0),
            {
                let victim_calls = victim_calls.clone();
                move |_| victim_calls.set(victim_calls.get() + 1)
            },
        );
        *victim.borrow_mut() = Some(subscription);

        assert_eq!(registry.dispatch(VIEWPORT), 1);
        assert_eq!(victim_calls.get(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn subscription_outliving_registry_drops_cleanly() {
        let registry = ScrollRegistry::new();
        let (subscription, _, _) = counting(&registry, Rc::new(Cell::new(0.0)));
        drop(registry);
        drop(subscription);
    }
}
