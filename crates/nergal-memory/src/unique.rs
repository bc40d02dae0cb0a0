use std::fmt;
use std::ops::{Deref, DerefMut};

/// Single-owner handle, move-only by construction.
///
/// The family's counterpart to plain `Box`, with the same nullable surface as
/// [`SharedHandle`](crate::SharedHandle): a `UniqueHandle` can be empty, and
/// dereferencing an empty one panics. Destruction is deterministic — the
/// object dies exactly when the owning handle does.
pub struct UniqueHandle<T: ?Sized> {
    object: Option<Box<T>>,
}

impl<T> UniqueHandle<T> {
    /// Allocates `value` under this handle's sole ownership.
    pub fn new(value: T) -> Self {
        Self::from_box(Box::new(value))
    }

    /// Destroys the current object, then adopts a freshly allocated `value`.
    pub fn reset_with(&mut self, value: T) {
        self.reset();
        self.object = Some(Box::new(value));
    }
}

impl<T: ?Sized> UniqueHandle<T> {
    /// A handle that owns nothing.
    pub const fn null() -> Self {
        Self { object: None }
    }

    /// Adopts an already boxed object.
    pub fn from_box(object: Box<T>) -> Self {
        Self {
            object: Some(object),
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.object.is_none()
    }

    /// Borrows the owned object, or `None` for a null handle.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.object.as_deref()
    }

    /// Mutably borrows the owned object, or `None` for a null handle.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.object.as_deref_mut()
    }

    /// Moves ownership out, leaving this handle null.
    pub fn take(&mut self) -> Self {
        Self {
            object: self.object.take(),
        }
    }

    /// Exchanges the owned objects of two handles.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.object, &mut other.object);
    }

    /// Destroys the owned object, leaving the handle null.
    pub fn reset(&mut self) {
        self.object = None;
    }

    /// Surrenders the object to the caller, leaving the handle null.
    pub fn release(&mut self) -> Option<Box<T>> {
        self.object.take()
    }
}

impl<T: ?Sized> Deref for UniqueHandle<T> {
    type Target = T;

    /// # Panics
    /// Panics when the handle is null.
    fn deref(&self) -> &T {
        match self.get() {
            Some(object) => object,
            None => panic!("null UniqueHandle dereferenced"),
        }
    }
}

impl<T: ?Sized> DerefMut for UniqueHandle<T> {
    /// # Panics
    /// Panics when the handle is null.
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(object) => object,
            None => panic!("null UniqueHandle dereferenced"),
        }
    }
}

impl<T: ?Sized> Default for UniqueHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> From<Box<T>> for UniqueHandle<T> {
    fn from(object: Box<T>) -> Self {
        Self::from_box(object)
    }
}

impl<T: ?Sized> fmt::Debug for UniqueHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object {
            Some(object) => f
                .debug_struct("UniqueHandle")
                .field("object", &(&raw const **object))
                .finish(),
            None => f.write_str("UniqueHandle(null)"),
        }
    }
}
