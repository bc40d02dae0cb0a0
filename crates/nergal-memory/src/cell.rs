use std::cell::Cell;
use std::ptr::NonNull;

/// Count block shared by every handle aliasing one managed object.
///
/// Heap-allocated separately from the object so weak handles can outlive it:
/// the object dies when `strong` reaches zero, the block itself is freed only
/// once `weak` is also zero.
#[derive(Debug)]
pub(crate) struct CountCell {
    strong: Cell<usize>,
    weak: Cell<usize>,
}

impl CountCell {
    /// A fresh block for a newly adopted object: one strong owner, no observers.
    pub(crate) const fn new() -> Self {
        Self {
            strong: Cell::new(1),
            weak: Cell::new(0),
        }
    }

    #[inline]
    pub(crate) fn strong(&self) -> usize {
        self.strong.get()
    }

    #[inline]
    pub(crate) fn weak(&self) -> usize {
        self.weak.get()
    }

    #[inline]
    pub(crate) fn inc_strong(&self) {
        self.strong.set(self.strong.get() + 1);
    }

    /// Decrements the strong count and returns the remaining count.
    #[inline]
    pub(crate) fn dec_strong(&self) -> usize {
        let remaining = self.strong.get() - 1;
        self.strong.set(remaining);
        remaining
    }

    #[inline]
    pub(crate) fn inc_weak(&self) {
        self.weak.set(self.weak.get() + 1);
    }

    /// Decrements the weak count and returns the remaining count.
    #[inline]
    pub(crate) fn dec_weak(&self) -> usize {
        let remaining = self.weak.get() - 1;
        self.weak.set(remaining);
        remaining
    }
}

/// Object pointer + count block, the payload of a non-null handle.
///
/// Stored as one unit so a handle can never hold a pointer without its count
/// (or the other way round).
pub(crate) struct Parts<T: ?Sized> {
    pub(crate) object: NonNull<T>,
    pub(crate) cell: NonNull<CountCell>,
}

// Manual impls: `derive` would demand `T: Copy`, and `T` here is only pointed
// to, never stored inline.
impl<T: ?Sized> Clone for Parts<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Parts<T> {}
