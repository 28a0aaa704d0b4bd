use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

type Handler<T> = Rc<dyn Fn(&T)>;

struct Handlers<T> {
    next_id: Cell<u64>,
    list: RefCell<Vec<(u64, Handler<T>)>>,
}

/// Single-threaded event source. Handlers stay registered for as long as the
/// [`Subscription`] returned by [`Emitter::subscribe`] is alive.
pub struct Emitter<T> {
    handlers: Rc<Handlers<T>>,
}

impl<T: 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Emitter<T> {
    pub fn new() -> Self {
        Self {
            handlers: Rc::new(Handlers {
                next_id: Cell::new(0),
                list: RefCell::new(vec![]),
            }),
        }
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = self.handlers.next_id.get();
        self.handlers.next_id.set(id + 1);
        self.handlers
            .list
            .borrow_mut()
            .push((id, Rc::new(handler)));

        let handlers: Weak<Handlers<T>> = Rc::downgrade(&self.handlers);
        Subscription::new(move || {
            if let Some(handlers) = handlers.upgrade() {
                handlers.list.borrow_mut().retain(|(h, _)| *h != id);
            }
        })
    }

    pub fn emit(&self, event: &T) {
        // Snapshot so handlers may subscribe or dispose while being notified
        let handlers: Vec<Handler<T>> = self
            .handlers
            .list
            .borrow()
            .iter()
            .map(|(_, h)| h.clone())
            .collect();

        for handler in handlers {
            handler(event);
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.handlers.list.borrow().len()
    }
}

/// Disposable handle for an event registration.
///
/// Dropping the handle disposes it. Use [`Subscription::forget`] to keep the
/// registration for the rest of the page's life.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    pub fn dispose(mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }

    pub fn forget(mut self) {
        self.dispose = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}
