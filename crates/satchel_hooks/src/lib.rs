//! # Satchel Hooks
//!
//! A priority-ordered callback registry with re-entrant dispatch.
//!
//! Filters transform a value; actions observe one. Callbacks run in
//! ascending priority order (registration order within a priority).
//! Dispatch is **snapshot-based**: the sorted callback list is copied when
//! iteration starts and mutations apply only to the live registry. A
//! liveness check before each call makes removals take effect for
//! not-yet-visited callbacks; callbacks added during iteration are seen by
//! subsequent dispatches only.
//!
//! Dispatch is re-entrant: a callback may apply further filters on the same
//! registry, with one snapshot cursor per nesting level on the call stack.
//!
//! ## Example
//!
//! ```
//! use satchel_hooks::HookRegistry;
//!
//! let hooks: HookRegistry<String> = HookRegistry::new();
//! hooks.add_filter("title", 10, |t: String| t.to_uppercase());
//! hooks.add_filter("title", 5, |t: String| format!("{t}!"));
//!
//! // Priority 5 runs before priority 10.
//! assert_eq!(hooks.apply_filters("title", "hello".into()), "HELLO!");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Default hook priority.
pub const DEFAULT_PRIORITY: i64 = 10;

/// Identifies one registered callback for targeted removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

type FilterFn<V> = Arc<dyn Fn(V) -> V + Send + Sync>;
type ActionFn<V> = Arc<dyn Fn(&V) + Send + Sync>;

struct FilterEntry<V> {
    id: u64,
    callback: FilterFn<V>,
}

struct ActionEntry<V> {
    id: u64,
    callback: ActionFn<V>,
}

type HookMap<E> = HashMap<String, BTreeMap<i64, Vec<E>>>;

/// A registry of filters and actions, generic over the filtered value type.
pub struct HookRegistry<V> {
    filters: RwLock<HookMap<FilterEntry<V>>>,
    actions: RwLock<HookMap<ActionEntry<V>>>,
    /// Stack of hook names currently being dispatched, one per nesting level.
    dispatch_stack: Mutex<Vec<String>>,
    next_id: AtomicU64,
}

impl<V> Default for HookRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HookRegistry<V> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: RwLock::new(HashMap::new()),
            actions: RwLock::new(HashMap::new()),
            dispatch_stack: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Registers a filter on `name` at `priority`.
    ///
    /// Lower priorities run first; equal priorities run in registration
    /// order. Returns an id usable with [`remove_filter`](Self::remove_filter).
    pub fn add_filter<F>(&self, name: &str, priority: i64, callback: F) -> HookId
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        let id = self.allocate_id();
        self.filters
            .write()
            .entry(name.to_string())
            .or_default()
            .entry(priority)
            .or_default()
            .push(FilterEntry {
                id,
                callback: Arc::new(callback),
            });
        HookId(id)
    }

    /// Removes one filter by its registration id. Returns whether it existed.
    ///
    /// Removing a callback that a running dispatch has not yet reached
    /// prevents it from running in that dispatch.
    pub fn remove_filter(&self, name: &str, id: HookId) -> bool {
        Self::remove_entry(&mut self.filters.write(), name, id.0, |e: &FilterEntry<V>| e.id)
    }

    /// Removes every filter on `name`. Returns how many were removed.
    pub fn remove_all_filters(&self, name: &str) -> usize {
        self.filters
            .write()
            .remove(name)
            .map(|levels| levels.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Whether any filter is registered on `name`.
    #[must_use]
    pub fn has_filter(&self, name: &str) -> bool {
        self.filters
            .read()
            .get(name)
            .is_some_and(|levels| levels.values().any(|v| !v.is_empty()))
    }

    /// Applies every live filter on `name` to `value`, ascending by priority.
    ///
    /// Returns the value unchanged when nothing is registered.
    pub fn apply_filters(&self, name: &str, value: V) -> V {
        // Snapshot (priority, id, callback) before invoking anything; the
        // registry lock is never held across a callback.
        let snapshot: Vec<(i64, u64, FilterFn<V>)> = {
            let filters = self.filters.read();
            match filters.get(name) {
                Some(levels) => levels
                    .iter()
                    .flat_map(|(&priority, entries)| {
                        entries
                            .iter()
                            .map(move |e| (priority, e.id, Arc::clone(&e.callback)))
                    })
                    .collect(),
                None => return value,
            }
        };

        self.dispatch_stack.lock().push(name.to_string());
        let mut value = value;
        for (priority, id, callback) in snapshot {
            if self.filter_is_live(name, priority, id) {
                value = callback(value);
            }
        }
        self.dispatch_stack.lock().pop();
        value
    }

    /// Registers an action on `name` at `priority`.
    pub fn add_action<F>(&self, name: &str, priority: i64, callback: F) -> HookId
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        let id = self.allocate_id();
        self.actions
            .write()
            .entry(name.to_string())
            .or_default()
            .entry(priority)
            .or_default()
            .push(ActionEntry {
                id,
                callback: Arc::new(callback),
            });
        HookId(id)
    }

    /// Removes one action by its registration id. Returns whether it existed.
    pub fn remove_action(&self, name: &str, id: HookId) -> bool {
        Self::remove_entry(&mut self.actions.write(), name, id.0, |e: &ActionEntry<V>| e.id)
    }

    /// Whether any action is registered on `name`.
    #[must_use]
    pub fn has_action(&self, name: &str) -> bool {
        self.actions
            .read()
            .get(name)
            .is_some_and(|levels| levels.values().any(|v| !v.is_empty()))
    }

    /// Runs every live action on `name` with `arg`, ascending by priority.
    pub fn do_action(&self, name: &str, arg: &V) {
        let snapshot: Vec<(i64, u64, ActionFn<V>)> = {
            let actions = self.actions.read();
            match actions.get(name) {
                Some(levels) => levels
                    .iter()
                    .flat_map(|(&priority, entries)| {
                        entries
                            .iter()
                            .map(move |e| (priority, e.id, Arc::clone(&e.callback)))
                    })
                    .collect(),
                None => return,
            }
        };

        self.dispatch_stack.lock().push(name.to_string());
        for (priority, id, callback) in snapshot {
            if self.action_is_live(name, priority, id) {
                callback(arg);
            }
        }
        self.dispatch_stack.lock().pop();
    }

    /// Name of the hook currently being dispatched, innermost first.
    #[must_use]
    pub fn current_hook(&self) -> Option<String> {
        self.dispatch_stack.lock().last().cloned()
    }

    /// Whether any dispatch is in progress, or a specific hook when named.
    #[must_use]
    pub fn doing_hook(&self, name: Option<&str>) -> bool {
        let stack = self.dispatch_stack.lock();
        match name {
            Some(name) => stack.iter().any(|n| n == name),
            None => !stack.is_empty(),
        }
    }

    fn filter_is_live(&self, name: &str, priority: i64, id: u64) -> bool {
        self.filters
            .read()
            .get(name)
            .and_then(|levels| levels.get(&priority))
            .is_some_and(|entries| entries.iter().any(|e| e.id == id))
    }

    fn action_is_live(&self, name: &str, priority: i64, id: u64) -> bool {
        self.actions
            .read()
            .get(name)
            .and_then(|levels| levels.get(&priority))
            .is_some_and(|entries| entries.iter().any(|e| e.id == id))
    }

    fn remove_entry<E>(
        map: &mut HookMap<E>,
        name: &str,
        id: u64,
        entry_id: impl Fn(&E) -> u64,
    ) -> bool {
        let Some(levels) = map.get_mut(name) else {
            return false;
        };
        let mut removed = false;
        levels.retain(|_, entries| {
            let before = entries.len();
            entries.retain(|e| entry_id(e) != id);
            removed |= entries.len() != before;
            !entries.is_empty()
        });
        if levels.is_empty() {
            map.remove(name);
        }
        removed
    }
}

impl<V> std::fmt::Debug for HookRegistry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("filter_hooks", &self.filters.read().len())
            .field("action_hooks", &self.actions.read().len())
            .finish_non_exhaustive()
    }
}
