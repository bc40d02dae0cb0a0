use std::fmt;
use std::ops::{Deref, DerefMut};

/// Assign-once handle for services that live as long as the program.
///
/// Starts empty, accepts exactly one value, and never gives it up: there is
/// deliberately no `take`, `swap`, or `reset`. The composition root creates
/// one, fills it during startup, and everything downstream reads through it.
/// Assigning twice is a wiring bug and panics immediately.
pub struct StaticHandle<T: ?Sized> {
    object: Option<Box<T>>,
}

impl<T> StaticHandle<T> {
    /// A handle pre-filled with `value`.
    pub fn new(value: T) -> Self {
        Self {
            object: Some(Box::new(value)),
        }
    }

    /// Installs the one value this handle will ever hold.
    ///
    /// # Panics
    /// Panics if a value was already installed.
    pub fn set(&mut self, value: T) {
        self.set_box(Box::new(value));
    }
}

impl<T: ?Sized> StaticHandle<T> {
    /// A handle waiting for its value.
    pub const fn empty() -> Self {
        Self { object: None }
    }

    /// Installs an already boxed value.
    ///
    /// # Panics
    /// Panics if a value was already installed.
    pub fn set_box(&mut self, object: Box<T>) {
        if self.object.is_some() {
            panic!("StaticHandle assigned twice");
        }
        self.object = Some(object);
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.object.is_none()
    }

    /// Borrows the installed value, or `None` before assignment.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.object.as_deref()
    }

    /// Mutably borrows the installed value, or `None` before assignment.
    ///
    /// Assign-once fixes which object lives here, not its interior; the sole
    /// owner may still mutate it.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.object.as_deref_mut()
    }
}

impl<T: ?Sized> Deref for StaticHandle<T> {
    type Target = T;

    /// # Panics
    /// Panics when nothing has been installed yet.
    fn deref(&self) -> &T {
        match self.get() {
            Some(object) => object,
            None => panic!("empty StaticHandle dereferenced"),
        }
    }
}

impl<T: ?Sized> DerefMut for StaticHandle<T> {
    /// # Panics
    /// Panics when nothing has been installed yet.
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(object) => object,
            None => panic!("empty StaticHandle dereferenced"),
        }
    }
}

impl<T: ?Sized> Default for StaticHandle<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> fmt::Debug for StaticHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object {
            Some(object) => f
                .debug_struct("StaticHandle")
                .field("object", &(&raw const **object))
                .finish(),
            None => f.write_str("StaticHandle(empty)"),
        }
    }
}
