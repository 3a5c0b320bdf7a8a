//! Edit context binding.
//!
//! The design view follows one externally owned [`EditContext`] at a time and
//! redraws its views whenever that context's validation transaction is
//! cancelled or ends.

pub mod binding;
pub mod signal;

pub use binding::{ContextBinding, ContextObserver, EditContext, ObserverId, ValidationSignals};
pub use signal::{Handler, Signal};
