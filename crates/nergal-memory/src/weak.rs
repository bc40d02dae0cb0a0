use std::fmt;

use crate::cell::Parts;
use crate::shared::SharedHandle;

/// Non-owning observer of a [`SharedHandle`]'s object.
///
/// A weak handle never keeps the object alive and never grants direct access
/// to it; [`upgrade`](Self::upgrade) is the only door, and it closes once the
/// last strong handle is gone. What a weak handle does keep alive is the
/// count block, so expiry stays detectable after the object dies.
///
/// The escape hatch for strong ownership cycles, which this family never
/// collects on its own.
pub struct WeakHandle<T: ?Sized> {
    parts: Option<Parts<T>>,
}

impl<T: ?Sized> WeakHandle<T> {
    /// A weak handle observing nothing.
    pub const fn null() -> Self {
        Self { parts: None }
    }

    pub(crate) fn from_parts(parts: Parts<T>) -> Self {
        Self { parts: Some(parts) }
    }

    /// Whether this handle was never attached to an object.
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.parts.is_none()
    }

    /// Whether the observed object is gone (or was never there).
    pub fn expired(&self) -> bool {
        match self.parts {
            // SAFETY: a live weak handle keeps the cell allocated.
            Some(parts) => unsafe { parts.cell.as_ref() }.strong() == 0,
            None => true,
        }
    }

    /// Number of strong handles currently sharing the observed object.
    pub fn strong_count(&self) -> usize {
        match self.parts {
            // SAFETY: a live weak handle keeps the cell allocated.
            Some(parts) => unsafe { parts.cell.as_ref() }.strong(),
            None => 0,
        }
    }

    /// Reclaims shared ownership while the object is still alive.
    ///
    /// Returns a null handle once the last strong handle has released the
    /// object; the stale pointer is never touched.
    pub fn upgrade(&self) -> SharedHandle<T> {
        match self.parts {
            Some(parts) => {
                // SAFETY: a live weak handle keeps the cell allocated.
                let cell = unsafe { parts.cell.as_ref() };
                if cell.strong() == 0 {
                    return SharedHandle::null();
                }
                cell.inc_strong();
                SharedHandle::from_parts(parts)
            }
            None => SharedHandle::null(),
        }
    }
}

impl<T: ?Sized> Clone for WeakHandle<T> {
    fn clone(&self) -> Self {
        if let Some(parts) = self.parts {
            // SAFETY: a live weak handle keeps the cell allocated.
            unsafe { parts.cell.as_ref() }.inc_weak();
        }
        Self { parts: self.parts }
    }
}

impl<T: ?Sized> Drop for WeakHandle<T> {
    fn drop(&mut self) {
        if let Some(parts) = self.parts.take() {
            // SAFETY: a live weak handle keeps the cell allocated.
            let cell = unsafe { parts.cell.as_ref() };
            if cell.dec_weak() == 0 && cell.strong() == 0 {
                // SAFETY: no strong or weak handle references the cell anymore.
                unsafe { drop(Box::from_raw(parts.cell.as_ptr())) };
            }
        }
    }
}

impl<T: ?Sized> Default for WeakHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> fmt::Debug for WeakHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts {
            Some(_) if !self.expired() => f
                .debug_struct("WeakHandle")
                .field("strong", &self.strong_count())
                .finish(),
            Some(_) => f.write_str("WeakHandle(expired)"),
            None => f.write_str("WeakHandle(null)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

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

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn downgrade_does_not_keep_object_alive() {
        let (drops, value) = probe();
        let strong = SharedHandle::new(value);
        let weak = strong.downgrade();

        assert!(!weak.expired());
        drop(strong);

        assert_eq!(drops.get(), 1);
        assert!(weak.expired());
    }

    #[test]
    fn upgrade_while_alive_shares_ownership() {
        let strong = SharedHandle::new(42u32);
        let weak = strong.downgrade();

        let upgraded = weak.upgrade();
        assert!(!upgraded.is_null());
        assert_eq!(*upgraded, 42);
        assert_eq!(strong.strong_count(), 2);
        assert!(strong.ptr_eq(&upgraded));
    }

    #[test]
    fn upgrade_after_death_returns_null() {
        let strong = SharedHandle::new(String::from("gone"));
        let weak = strong.downgrade();
        drop(strong);

        assert!(weak.upgrade().is_null());
        assert_eq!(weak.strong_count(), 0);
    }

    #[test]
    fn null_weak_is_expired_and_upgrades_to_null() {
        let weak = WeakHandle::<u32>::null();
        assert!(weak.is_null());
        assert!(weak.expired());
        assert!(weak.upgrade().is_null());
    }

    // ── counting ──────────────────────────────────────────────────────────

    #[test]
    fn weak_clones_are_counted() {
        let strong = SharedHandle::new(1u32);
        let first = strong.downgrade();
        let second = first.clone();

        assert_eq!(strong.weak_count(), 2);
        drop(first);
        assert_eq!(strong.weak_count(), 1);
        drop(second);
        assert_eq!(strong.weak_count(), 0);
    }

    #[test]
    fn weak_survivors_outlive_the_owner() {
        let (drops, value) = probe();
        let strong = SharedHandle::new(value);
        let observer = strong.downgrade();
        let late_observer = observer.clone();

        drop(strong);
        assert_eq!(drops.get(), 1);

        // Both observers remain usable against the dead object.
        assert!(observer.expired());
        assert!(late_observer.upgrade().is_null());

        drop(observer);
        assert!(late_observer.expired());
    }

    #[test]
    fn resurrect_via_upgrade_then_release_again() {
        let (drops, value) = probe();
        let strong = SharedHandle::new(value);
        let weak = strong.downgrade();

        let second_owner = weak.upgrade();
        drop(strong);
        assert_eq!(drops.get(), 0, "upgraded handle must keep the object");

        drop(second_owner);
        assert_eq!(drops.get(), 1);
    }

    // ── destructor reentrancy ─────────────────────────────────────────────

    /// Holds a weak handle to itself; dropping the last strong handle runs
    /// this destructor while the count block is mid-release.
    struct SelfObserver {
        me: RefCell<WeakHandle<SelfObserver>>,
    }

    #[test]
    fn weak_dropped_inside_own_destructor_is_safe() {
        let strong = SharedHandle::new(SelfObserver {
            me: RefCell::new(WeakHandle::null()),
        });
        *strong.me.borrow_mut() = strong.downgrade();

        // Must not double-free the count block.
        drop(strong);
    }
}
