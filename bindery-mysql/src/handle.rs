use std::{
    cell::RefCell,
    fmt::{self, Debug},
    ops::{Deref, DerefMut},
    rc::Rc,
};

/// Owns a native resource and runs its release action once, on drop.
pub(crate) struct HandleBox<T> {
    value: T,
    release: fn(&mut T),
}

impl<T> HandleBox<T> {
    pub(crate) fn new(value: T, release: fn(&mut T)) -> Self {
        Self { value, release }
    }
}

impl<T> Drop for HandleBox<T> {
    fn drop(&mut self) {
        log::trace!("Releasing the native handle");
        (self.release)(&mut self.value);
    }
}

impl<T> Deref for HandleBox<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> DerefMut for HandleBox<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

impl<T: Debug> Debug for HandleBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandleBox").field(&self.value).finish()
    }
}

/// Statement handle shared by the clones of an adapter and by its result set.
pub(crate) type SharedHandle<T> = Rc<RefCell<HandleBox<T>>>;

pub(crate) fn shared_handle<T>(value: T, release: fn(&mut T)) -> SharedHandle<T> {
    Rc::new(RefCell::new(HandleBox::new(value, release)))
}
