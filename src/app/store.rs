//! Dioxus signals as workflow stores.

use dioxus::prelude::*;

use crate::workflow::Store;

impl<T: 'static> Store<T> for Signal<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        let result = f(&mut signal.write());
        result
    }

    // Peek: background tasks must not subscribe to what they write.
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.peek())
    }
}
