//! Shared-ownership handles with **non-atomic** reference counting.
//!
//! This crate is intentionally dependency-free so the scene layer, tooling,
//! and tests can embed it without pulling in any engine code.
//!
//! # The handle family
//!
//! | Type | Contents |
//! |------|----------|
//! | [`SharedHandle`] | counted shared ownership, nullable, downcastable |
//! | [`WeakHandle`] | non-owning observer; [`upgrade`](WeakHandle::upgrade) to access |
//! | [`UniqueHandle`] | single-owner, move-only |
//! | [`StaticHandle`] | assign-once, for program-lifetime services |
//! | [`AsAny`] | bridge that lets trait-object handles recover concrete types |
//!
//! Emptiness is a first-class state: every handle can be null, null checks are
//! cheap, and dereferencing a null handle panics rather than reading garbage.
//!
//! Counts live in `Cell`s, so no handle here is `Send` or `Sync`; the compiler
//! rejects moving one across threads. Strong cycles are never collected — hold
//! a [`WeakHandle`] for back-references.
//!
//! # Quick start
//!
//! ```rust
//! use nergal_memory::SharedHandle;
//!
//! let first = SharedHandle::new(String::from("lion of the underworld"));
//! let second = first.clone();
//!
//! assert_eq!(first.strong_count(), 2);
//! assert!(first.ptr_eq(&second));
//! assert_eq!(second.len(), 22);
//! ```

mod cast;
mod cell;
mod shared;
mod static_handle;
mod unique;
mod weak;

pub use cast::AsAny;
pub use shared::SharedHandle;
pub use static_handle::StaticHandle;
pub use unique::UniqueHandle;
pub use weak::WeakHandle;
