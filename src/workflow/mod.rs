//! Async orchestration of the booking state machines.
//!
//! Functions here talk to a [`SeatingApi`](crate::client::SeatingApi)
//! and write results into a [`Store`]. The app passes Dioxus signals,
//! tests pass a `RefCell`, so polling and request sequencing are tested
//! without rendering anything.

pub mod admin;
pub mod poll;
pub mod seat_selection;
pub mod session;

use std::cell::RefCell;

/// Shared mutable state that async tasks can update between awaits.
///
/// Borrows never outlive the closure, so holding one across an
/// `.await` is impossible.
pub trait Store<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T> Store<T> for RefCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}
