use std::any::Any;

use crate::shared::SharedHandle;

/// Bridge that recovers the concrete type behind a trait-object handle.
///
/// Trait objects cannot be handed to [`Any`] downcasts directly, because
/// `type_id` on the object type names the trait object itself, not the value
/// inside. `as_any` re-enters through the value's own vtable, so the returned
/// `&dyn Any` carries the concrete `TypeId`.
///
/// Blanket-implemented for every `'static` type; handle-friendly traits just
/// name it as a supertrait:
///
/// ```rust
/// use nergal_memory::{AsAny, SharedHandle};
///
/// trait Relic: AsAny {
///     fn age(&self) -> u32;
/// }
///
/// struct Tablet;
/// impl Relic for Tablet {
///     fn age(&self) -> u32 { 4000 }
/// }
///
/// let relic: SharedHandle<dyn Relic> = SharedHandle::from_box(Box::new(Tablet));
/// assert_eq!(relic.age(), 4000);
/// assert!(!relic.cast::<Tablet>().is_null());
/// assert!(relic.cast::<String>().is_null());
/// ```
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: ?Sized + AsAny> SharedHandle<T> {
    /// Typed view of the managed object, if its concrete type is `U`.
    ///
    /// On a match the returned handle shares this handle's count (strong goes
    /// up by one) and addresses the same allocation. On a type mismatch, or
    /// when `self` is null, the result is a null handle and nothing else
    /// changes — failure is an answer here, not an error.
    pub fn cast<U: Any>(&self) -> SharedHandle<U> {
        let Some(parts) = self.parts() else {
            return SharedHandle::null();
        };
        // SAFETY: a stored Parts implies strong >= 1, so the object is alive.
        let object = unsafe { parts.object.as_ref() };
        if object.as_any().is::<U>() {
            // SAFETY: the concrete type is U, so re-typing the whole-object
            // pointer changes neither address nor allocation.
            unsafe { self.alias(parts.object.cast::<U>()) }
        } else {
            SharedHandle::null()
        }
    }
}
