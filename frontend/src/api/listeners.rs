use super::types::{AuthEvent, Session};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub type AuthListener = Rc<dyn Fn(AuthEvent, Option<Session>)>;

struct Registry {
    next_id: u64,
    entries: Vec<(u64, AuthListener)>,
}

/// Fan-out of auth-state changes to subscribed listeners.
#[derive(Clone)]
pub struct AuthListeners {
    inner: Rc<RefCell<Registry>>,
}

impl Default for AuthListeners {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 1,
                entries: Vec::new(),
            })),
        }
    }
}

impl AuthListeners {
    pub fn subscribe(&self, listener: AuthListener) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, listener));
        Subscription {
            id,
            registry: Some(Rc::downgrade(&self.inner)),
        }
    }

    pub fn notify(&self, event: AuthEvent, session: Option<Session>) {
        // Snapshot first so listeners may (un)subscribe while being notified.
        let listeners: Vec<AuthListener> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        log::debug!("auth event {:?} -> {} listener(s)", event, listeners.len());
        for listener in listeners {
            listener(event, session.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unsubscribes when dropped.
pub struct Subscription {
    id: u64,
    registry: Option<Weak<RefCell<Registry>>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(registry) = self.registry.take().and_then(|weak| weak.upgrade()) {
            registry
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
