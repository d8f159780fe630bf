//! Data models for activities, plans, templates and process steps.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that the data structures stay free of
//! presentation concerns. Every model serializes with camelCase field names,
//! which is the shape used for persisted template records.

pub mod activity;
pub mod filters;
pub mod plan;
pub mod step;
pub mod template;

#[cfg(test)]
mod tests;

pub use activity::{Activity, Role};
pub use filters::ActivityFilter;
pub use plan::{ActivityRef, CategoryPlan, Direction};
pub use step::{
    Attachment, CheckinStep, ContentStep, ProcessStep, Question, QuestionKind,
    QuestionnaireStep, StepKind, StepPatch, StepPayload, SubmissionKind, TaskStep, VideoStep,
};
pub use template::{Template, TemplateData};
