//! Active manipulator tracking.
//!
//! Assigning a manipulator runs one pick against the active view at the
//! current pointer position. Continuous hover and drag handling belongs to
//! the manipulator itself after that.

use crate::layout::ViewSlot;
use crate::model::{CursorHint, Point};
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

/// Interactive transform tool (translate, rotate, scale gizmos...).
pub trait Manipulator {
    /// Hit-test the manipulator at `point`, given in `view`-local
    /// coordinates. Returns `true` if the manipulator is under the point.
    fn pick(&mut self, view: &ViewSlot, point: Point) -> bool;
}

/// Host-supplied predicate restricting what picking may select.
pub trait PickFilter: fmt::Debug {
    /// Whether `hit` may be selected.
    fn accepts(&self, hit: &dyn Any) -> bool;
}

/// Holds a weak reference to the active manipulator.
#[derive(Default)]
pub struct ManipulatorBinding {
    current: Option<Weak<RefCell<dyn Manipulator>>>,
}

impl ManipulatorBinding {
    /// A binding with no manipulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active manipulator, if set and still alive.
    pub fn manipulator(&self) -> Option<Rc<RefCell<dyn Manipulator>>> {
        self.current.as_ref().and_then(Weak::upgrade)
    }

    /// Swap the manipulator and update `view`'s cursor hint.
    ///
    /// `screen` is the pointer in grid coordinates; it is translated into
    /// `view`-local space before picking. A manipulator that is already
    /// borrowed (assigned from inside its own callback) counts as a miss.
    pub fn set(
        &mut self,
        manipulator: Option<&Rc<RefCell<dyn Manipulator>>>,
        view: &mut ViewSlot,
        screen: Point,
    ) -> CursorHint {
        self.current = manipulator.map(Rc::downgrade);

        let cursor = match manipulator {
            Some(manipulator) => {
                let local = view.to_local(screen);
                let picked = match manipulator.try_borrow_mut() {
                    Ok(mut manipulator) => manipulator.pick(view, local),
                    Err(_) => {
                        warn!(slot = %view.id(), "Manipulator busy during assignment; skipped pick");
                        false
                    }
                };
                if picked {
                    CursorHint::Drag
                } else {
                    CursorHint::Default
                }
            }
            None => CursorHint::Default,
        };

        view.set_cursor(cursor);
        debug!(
            slot = %view.id(),
            attached = manipulator.is_some(),
            ?cursor,
            "Manipulator assigned"
        );
        cursor
    }
}

impl fmt::Debug for ManipulatorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManipulatorBinding")
            .field("attached", &self.manipulator().is_some())
            .finish()
    }
}
