//! Menu State Storage
//!
//! Where a [`MenuView`](super::MenuView) keeps its state. Closures never
//! hold the state across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use super::state::MenuState;

/// Shared handle to one view's state
pub trait MenuStore: Clone {
    /// Read without subscribing to changes
    fn read<R>(&self, f: impl FnOnce(&MenuState) -> R) -> R;

    /// Mutate and notify whoever renders the state
    fn write(&self, f: impl FnOnce(&mut MenuState));
}

/// Single-threaded store for non-reactive hosts
#[derive(Debug, Clone, Default)]
pub struct LocalMenuStore(Rc<RefCell<MenuState>>);

impl LocalMenuStore {
    pub fn new(state: MenuState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    pub fn snapshot(&self) -> MenuState {
        self.0.borrow().clone()
    }
}

impl MenuStore for LocalMenuStore {
    fn read<R>(&self, f: impl FnOnce(&MenuState) -> R) -> R {
        f(&self.0.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut MenuState)) {
        f(&mut self.0.borrow_mut());
    }
}
