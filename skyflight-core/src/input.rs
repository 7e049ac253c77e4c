use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Held/released state per lower-cased key name. Unseen keys read as released.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLatch {
    keys: HashMap<String, bool>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key_down(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase(), true);
    }

    pub fn on_key_up(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase(), false);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys
            .get(&key.to_lowercase())
            .copied()
            .unwrap_or(false)
    }

    pub fn apply(&mut self, event: &KeyEvent) {
        match event {
            KeyEvent::Down(key) => self.on_key_down(key),
            KeyEvent::Up(key) => self.on_key_up(key),
        }
    }

    /// Releases every held key missing from `down`, the keys the platform
    /// still reports as pressed. Catches releases that never arrived as
    /// events, e.g. while the window was unfocused.
    pub fn release_unlisted(&mut self, down: &[&str]) {
        let stale: Vec<String> = self
            .held_keys()
            .filter(|key| !down.iter().any(|name| name.eq_ignore_ascii_case(key)))
            .map(str::to_owned)
            .collect();
        for key in stale {
            log::trace!("releasing stale key {:?}", key);
            self.on_key_up(&key);
        }
    }

    pub fn held_keys(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter(|(_, held)| **held)
            .map(|(key, _)| key.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Down(String),
    Up(String),
}

pub type SharedLatch = Arc<Mutex<InputLatch>>;

/// The latch only stores booleans, so a writer panicking mid-update cannot
/// leave it in a state worth refusing to read.
fn lock_latch(latch: &Mutex<InputLatch>) -> MutexGuard<'_, InputLatch> {
    latch.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
struct HubRegistry {
    next_id: u64,
    subscribers: HashMap<u64, SharedLatch>,
}

type SharedRegistry = Arc<Mutex<HubRegistry>>;

fn lock_registry(registry: &Mutex<HubRegistry>) -> MutexGuard<'_, HubRegistry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keyboard event source. Sessions subscribe to receive a latch that the hub
/// keeps current; dropping the subscription deregisters it.
#[derive(Clone, Default)]
pub struct KeyHub {
    registry: SharedRegistry,
}

impl KeyHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> KeySubscription {
        let latch: SharedLatch = Arc::new(Mutex::new(InputLatch::new()));
        let mut registry = lock_registry(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.insert(id, Arc::clone(&latch));
        log::debug!(
            "key subscription {} registered ({} active)",
            id,
            registry.subscribers.len()
        );

        KeySubscription {
            id,
            latch,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn dispatch(&self, event: &KeyEvent) {
        let registry = lock_registry(&self.registry);
        for latch in registry.subscribers.values() {
            lock_latch(latch).apply(event);
        }
    }

    pub fn key_down(&self, key: &str) {
        self.dispatch(&KeyEvent::Down(key.to_string()));
    }

    pub fn key_up(&self, key: &str) {
        self.dispatch(&KeyEvent::Up(key.to_string()));
    }

    pub fn sync_held(&self, down: &[&str]) {
        let registry = lock_registry(&self.registry);
        for latch in registry.subscribers.values() {
            lock_latch(latch).release_unlisted(down);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock_registry(&self.registry).subscribers.len()
    }
}

/// Registration handle returned by [`KeyHub::subscribe`].
pub struct KeySubscription {
    id: u64,
    latch: SharedLatch,
    registry: Weak<Mutex<HubRegistry>>,
}

impl KeySubscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn latch(&self) -> SharedLatch {
        Arc::clone(&self.latch)
    }

    pub fn is_held(&self, key: &str) -> bool {
        lock_latch(&self.latch).is_held(key)
    }

    /// Runs `f` against a consistent view of the latch.
    pub fn with_latch<R>(&self, f: impl FnOnce(&InputLatch) -> R) -> R {
        let latch = lock_latch(&self.latch);
        f(&*latch)
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = lock_registry(&registry);
        registry.subscribers.remove(&self.id);
        log::debug!(
            "key subscription {} removed ({} active)",
            self.id,
            registry.subscribers.len()
        );
    }
}
