//! Authoring wizard for activities and templates.
//!
//! The wizard owns a typed [`ActivityDraft`], a [`StepEditor`](crate::steps::StepEditor)
//! for the step currently being edited, and the submit state. Phase
//! navigation never validates; only [`Wizard::submit`] checks the required
//! fields (title, description, at least one category).
//!
//! ```text
//! basic-settings ──▶ activity-process ──▶ participants   (activity flow)
//! basic-settings ──▶ activity-process ──▶ preview        (template flow)
//!
//! Idle ──submit──▶ Submitting ──store ok──▶ Succeeded ──1.5s──▶ listing
//!                       └──────store err──▶ Failed (form retained)
//! ```

pub mod controller;
pub mod draft;
pub mod phase;


pub use controller::{
    Author, SubmitOutcome, SubmitState, Wizard, WizardMode, ACTIVITIES_ROUTE, REDIRECT_DELAY,
    TEMPLATES_ROUTE,
};
pub use draft::{ActivityDraft, DraftAction};
pub use phase::{FlowKind, Phase, Section};
