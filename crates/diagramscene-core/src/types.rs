//! Type aliases for shared UI state.
//!
//! The canvas, its viewport and the owning editor all live on the UI thread
//! and are shared between toolkit callbacks, so they are held as
//! `Rc<RefCell<T>>`.

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// # Example
/// ```rust,ignore
/// let viewport: Shared<Viewport> = shared(Viewport::default());
/// viewport.borrow_mut().zoom_in();
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
