use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr::NonNull;

use crate::cell::{CountCell, Parts};
use crate::weak::WeakHandle;

/// Counted shared-ownership handle.
///
/// Cloning shares the managed object and bumps the count; the object is
/// destroyed when the last sharing handle goes away. A handle can also be
/// null, which every operation tolerates except dereferencing.
///
/// `SharedHandle` hands out `&T` only. Shared mutable state belongs inside
/// the managed type (`Cell`, `RefCell`); [`get_mut`](Self::get_mut) grants
/// `&mut T` solely when nothing else can observe the object.
pub struct SharedHandle<T: ?Sized> {
    parts: Option<Parts<T>>,
    /// Tells dropck this handle owns a share of a `T`.
    marker: PhantomData<T>,
}

impl<T> SharedHandle<T> {
    /// Allocates `value` and returns the first handle to it.
    pub fn new(value: T) -> Self {
        Self::from_box(Box::new(value))
    }

    /// Releases the current object, then adopts a freshly allocated `value`
    /// with a count of one.
    pub fn reset_with(&mut self, value: T) {
        self.reset();
        *self = Self::new(value);
    }
}

impl<T: ?Sized> SharedHandle<T> {
    /// A handle that manages nothing.
    pub const fn null() -> Self {
        Self {
            parts: None,
            marker: PhantomData,
        }
    }

    /// Adopts an already boxed object. This is the only way an allocation
    /// enters the counted regime, so no second owner of the same memory can
    /// exist.
    pub fn from_box(object: Box<T>) -> Self {
        let object = NonNull::from(Box::leak(object));
        let cell = NonNull::from(Box::leak(Box::new(CountCell::new())));
        Self {
            parts: Some(Parts { object, cell }),
            marker: PhantomData,
        }
    }

    pub(crate) fn from_parts(parts: Parts<T>) -> Self {
        Self {
            parts: Some(parts),
            marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn parts(&self) -> Option<Parts<T>> {
        self.parts
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Borrows the managed object, or `None` for a null handle.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.parts.as_ref().map(|parts| {
            // SAFETY: a stored Parts implies strong >= 1, so the object is alive.
            unsafe { parts.object.as_ref() }
        })
    }

    /// Mutable access for a sole owner.
    ///
    /// Returns `None` unless this is the only strong handle and no weak
    /// handle observes the object; under aliasing, `&mut T` would be unsound.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let parts = self.parts.as_mut()?;
        // SAFETY: the cell is alive while any handle references it.
        let cell = unsafe { parts.cell.as_ref() };
        if cell.strong() == 1 && cell.weak() == 0 {
            // SAFETY: sole strong handle, no observers; this borrow is the
            // only path to the object until it ends.
            Some(unsafe { parts.object.as_mut() })
        } else {
            None
        }
    }

    /// Pointer to the managed object, or `None` for a null handle.
    #[inline]
    pub fn as_non_null(&self) -> Option<NonNull<T>> {
        self.parts.map(|parts| parts.object)
    }

    /// Number of strong handles sharing the object (0 for a null handle).
    pub fn strong_count(&self) -> usize {
        match self.parts {
            // SAFETY: the cell is alive while any handle references it.
            Some(parts) => unsafe { parts.cell.as_ref() }.strong(),
            None => 0,
        }
    }

    /// Number of weak observers of the object (0 for a null handle).
    pub fn weak_count(&self) -> usize {
        match self.parts {
            // SAFETY: the cell is alive while any handle references it.
            Some(parts) => unsafe { parts.cell.as_ref() }.weak(),
            None => 0,
        }
    }

    /// Whether both handles manage the same allocation, regardless of the
    /// statically known type. Two null handles compare equal.
    pub fn ptr_eq<U: ?Sized>(&self, other: &SharedHandle<U>) -> bool {
        let cell = self.parts.map(|parts| parts.cell);
        let other_cell = other.parts.map(|parts| parts.cell);
        cell == other_cell
    }

    /// Moves the reference out, leaving this handle null. Counts are
    /// untouched; ownership transfers to the returned handle.
    pub fn take(&mut self) -> Self {
        Self {
            parts: self.parts.take(),
            marker: PhantomData,
        }
    }

    /// Exchanges the managed objects of two handles without touching counts.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.parts, &mut other.parts);
    }

    /// Gives up this handle's reference, leaving it null. The object is
    /// destroyed if this was the last strong handle.
    pub fn reset(&mut self) {
        if let Some(parts) = self.parts.take() {
            // SAFETY: parts was taken out of this handle, transferring its
            // reference to release.
            unsafe { release(parts) };
        }
    }

    /// Registers a weak observer of the managed object.
    ///
    /// A null handle downgrades to a null weak handle.
    pub fn downgrade(&self) -> WeakHandle<T> {
        match self.parts {
            Some(parts) => {
                // SAFETY: the cell is alive while any handle references it.
                unsafe { parts.cell.as_ref() }.inc_weak();
                WeakHandle::from_parts(parts)
            }
            None => WeakHandle::null(),
        }
    }

    /// Creates a handle that shares this handle's count but views the managed
    /// allocation as `U`.
    ///
    /// This is the raw aliasing primitive behind [`cast`](Self::cast) and the
    /// scene layer's upcast into trait-object component handles; application
    /// code should reach for those instead. Aliasing a null handle yields a
    /// null handle.
    ///
    /// # Safety
    ///
    /// `object` must be a re-typed pointer to the **whole** object this
    /// handle manages: same address, same allocation, only the static type
    /// changes (an unsized trait-object view, or the concrete type after a
    /// checked downcast). Releasing through the alias must free exactly what
    /// releasing through `self` would. Pointers to fields or to unrelated
    /// allocations are not permitted.
    pub unsafe fn alias<U: ?Sized>(&self, object: NonNull<U>) -> SharedHandle<U> {
        match self.parts {
            Some(parts) => {
                // SAFETY: the cell is alive while any handle references it.
                unsafe { parts.cell.as_ref() }.inc_strong();
                SharedHandle::from_parts(Parts {
                    object,
                    cell: parts.cell,
                })
            }
            None => SharedHandle::null(),
        }
    }
}

/// Gives up one strong reference, destroying the object (and the count block,
/// once no weak observer needs it) when it was the last.
///
/// # Safety
///
/// `parts` must carry a strong reference that no handle will release again.
unsafe fn release<T: ?Sized>(parts: Parts<T>) {
    // SAFETY: the cell is alive while any reference to it is outstanding.
    let cell = unsafe { parts.cell.as_ref() };
    if cell.dec_strong() > 0 {
        return;
    }

    // Hold a guard weak while the object's destructor runs, so a WeakHandle
    // dropped from inside it cannot free the cell under our feet.
    cell.inc_weak();
    // SAFETY: strong hit zero, and `object` is the pointer leaked at
    // construction, so this reclaims the object exactly once.
    unsafe { drop(Box::from_raw(parts.object.as_ptr())) };
    if cell.dec_weak() == 0 {
        // SAFETY: no strong or weak handle references the cell anymore.
        unsafe { drop(Box::from_raw(parts.cell.as_ptr())) };
    }
}

impl<T: ?Sized> Clone for SharedHandle<T> {
    fn clone(&self) -> Self {
        if let Some(parts) = self.parts {
            // SAFETY: the cell is alive while any handle references it.
            unsafe { parts.cell.as_ref() }.inc_strong();
        }
        Self {
            parts: self.parts,
            marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Drop for SharedHandle<T> {
    fn drop(&mut self) {
        if let Some(parts) = self.parts.take() {
            // SAFETY: parts was taken out of this handle, transferring its
            // reference to release.
            unsafe { release(parts) };
        }
    }
}

impl<T: ?Sized> Deref for SharedHandle<T> {
    type Target = T;

    /// # Panics
    /// Panics when the handle is null. Check [`is_null`](Self::is_null) or
    /// use [`get`](Self::get) first if emptiness is expected.
    fn deref(&self) -> &T {
        match self.get() {
            Some(object) => object,
            None => panic!("null SharedHandle dereferenced"),
        }
    }
}

impl<T: ?Sized> Default for SharedHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> fmt::Debug for SharedHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts {
            Some(parts) => f
                .debug_struct("SharedHandle")
                .field("object", &parts.object)
                .field("strong", &self.strong_count())
                .field("weak", &self.weak_count())
                .finish(),
            None => f.write_str("SharedHandle(null)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Increments its counter when dropped.
    struct Probe {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn probe() -> (Rc<Cell<usize>>, Probe) {
        let drops = Rc::new(Cell::new(0));
        let probe = Probe {
            drops: Rc::clone(&drops),
        };
        (drops, probe)
    }

    // ── null state ────────────────────────────────────────────────────────

    #[test]
    fn null_handle_reports_null() {
        let handle = SharedHandle::<u32>::null();
        assert!(handle.is_null());
        assert!(handle.get().is_none());
        assert_eq!(handle.strong_count(), 0);
        assert_eq!(handle.weak_count(), 0);
    }

    #[test]
    fn default_is_null() {
        assert!(SharedHandle::<String>::default().is_null());
    }

    #[test]
    #[should_panic(expected = "null SharedHandle dereferenced")]
    fn deref_null_panics() {
        let handle = SharedHandle::<u32>::null();
        let _ = *handle;
    }

    // ── counting ──────────────────────────────────────────────────────────

    #[test]
    fn new_handle_counts_one() {
        let handle = SharedHandle::new(7u32);
        assert_eq!(handle.strong_count(), 1);
        assert_eq!(*handle, 7);
    }

    #[test]
    fn clone_shares_the_object() {
        let first = SharedHandle::new(String::from("gate"));
        let second = first.clone();
        assert_eq!(first.strong_count(), 2);
        assert_eq!(second.strong_count(), 2);
        assert!(first.ptr_eq(&second));
        drop(second);
        assert_eq!(first.strong_count(), 1);
    }

    #[test]
    fn object_dropped_exactly_once_at_zero() {
        let (drops, value) = probe();
        let first = SharedHandle::new(value);
        let second = first.clone();
        drop(first);
        assert_eq!(drops.get(), 0);
        drop(second);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn scrambled_drop_order_releases_once() {
        let (drops, value) = probe();
        let a = SharedHandle::new(value);
        let b = a.clone();
        let c = b.clone();
        drop(b);
        drop(a);
        assert_eq!(drops.get(), 0);
        assert_eq!(c.strong_count(), 1);
        drop(c);
        assert_eq!(drops.get(), 1);
    }

    // ── assignment ────────────────────────────────────────────────────────

    #[test]
    fn overwrite_releases_previous_object() {
        let (old_drops, old_value) = probe();
        let (new_drops, new_value) = probe();
        let mut handle = SharedHandle::new(old_value);
        let other = SharedHandle::new(new_value);

        handle = other.clone();

        assert_eq!(old_drops.get(), 1);
        assert_eq!(new_drops.get(), 0);
        assert_eq!(handle.strong_count(), 2);
        assert!(handle.ptr_eq(&other));
    }

    #[test]
    fn self_clone_assignment_keeps_object_alive() {
        let (drops, value) = probe();
        let mut handle = SharedHandle::new(value);

        handle = handle.clone();

        assert_eq!(drops.get(), 0);
        assert_eq!(handle.strong_count(), 1);
    }

    #[test]
    fn aliased_assignment_keeps_object_alive() {
        let (drops, value) = probe();
        let mut handle = SharedHandle::new(value);
        let alias = handle.clone();

        // Overwriting with a handle to the same object must not release it.
        handle = alias.clone();

        assert_eq!(drops.get(), 0);
        assert_eq!(handle.strong_count(), 2);
        assert!(handle.ptr_eq(&alias));
    }

    // ── move, swap, reset ─────────────────────────────────────────────────

    #[test]
    fn take_transfers_without_count_change() {
        let mut source = SharedHandle::new(11u32);
        let moved = source.take();
        assert!(source.is_null());
        assert_eq!(moved.strong_count(), 1);
        assert_eq!(*moved, 11);
    }

    #[test]
    fn swap_exchanges_payloads_without_count_change() {
        let mut a = SharedHandle::new(1u32);
        let mut b = SharedHandle::new(2u32);
        let b_alias = b.clone();

        a.swap(&mut b);

        assert_eq!(*a, 2);
        assert_eq!(*b, 1);
        assert_eq!(a.strong_count(), 2);
        assert_eq!(b.strong_count(), 1);
        assert!(a.ptr_eq(&b_alias));
    }

    #[test]
    fn reset_drops_ownership() {
        let (drops, value) = probe();
        let mut handle = SharedHandle::new(value);
        handle.reset();
        assert!(handle.is_null());
        assert_eq!(drops.get(), 1);
        // Resetting a null handle is a no-op.
        handle.reset();
        assert!(handle.is_null());
    }

    #[test]
    fn reset_does_not_kill_shared_object() {
        let (drops, value) = probe();
        let mut handle = SharedHandle::new(value);
        let keeper = handle.clone();
        handle.reset();
        assert_eq!(drops.get(), 0);
        assert_eq!(keeper.strong_count(), 1);
    }

    #[test]
    fn reset_with_installs_fresh_object() {
        let (drops, value) = probe();
        let mut handle = SharedHandle::new(value);
        handle.reset_with(Probe {
            drops: Rc::new(Cell::new(0)),
        });
        assert_eq!(drops.get(), 1);
        assert_eq!(handle.strong_count(), 1);
    }

    // ── sole-owner mutation ───────────────────────────────────────────────

    #[test]
    fn get_mut_requires_sole_owner() {
        let mut handle = SharedHandle::new(5u32);
        *handle.get_mut().unwrap() = 6;
        assert_eq!(*handle, 6);

        let alias = handle.clone();
        assert!(handle.get_mut().is_none());
        drop(alias);
        assert!(handle.get_mut().is_some());
    }

    #[test]
    fn get_mut_blocked_by_weak_observer() {
        let mut handle = SharedHandle::new(5u32);
        let weak = handle.downgrade();
        assert!(handle.get_mut().is_none());
        drop(weak);
        assert!(handle.get_mut().is_some());
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn ptr_eq_tracks_allocation() {
        let a = SharedHandle::new(3u32);
        let b = SharedHandle::new(3u32);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
        assert!(SharedHandle::<u32>::null().ptr_eq(&SharedHandle::<u32>::null()));
        assert!(!a.ptr_eq(&SharedHandle::<u32>::null()));
    }

    // ── unsized payloads ──────────────────────────────────────────────────

    #[test]
    fn from_box_adopts_unsized_object() {
        let boxed: Box<str> = String::from("ziggurat").into_boxed_str();
        let handle = SharedHandle::from_box(boxed);
        assert_eq!(handle.len(), 8);
        assert_eq!(&*handle, "ziggurat");
        assert_eq!(handle.clone().strong_count(), 2);
    }
}
