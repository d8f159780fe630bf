//! The process-step model.
//!
//! [`StepList`] keeps an ordered list of heterogeneous steps consistent
//! (`order` always equals position) and [`StepEditor`] stages edits so that
//! half-written steps never show up in the list.

pub mod editor;
pub mod list;


pub use editor::{StepDraft, StepEditor};
pub use list::{default_step_title, MoveDirection, StepList};
