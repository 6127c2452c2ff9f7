//! Menu View
//!
//! State of the menu screen and the operations that drive it. The UI owns
//! the storage (a signal in the browser, a `RefCell` in tests) through
//! [`MenuStore`].

mod state;
mod store;
mod view;


pub use state::MenuState;
pub use store::{LocalMenuStore, MenuStore};
pub use view::MenuView;
