//! Staged editing of a single step.
//!
//! Edits never touch the owning [`StepList`] until they are committed. A step
//! created through [`StepEditor::begin_new`] only becomes part of the list on
//! its first successful commit.

use std::mem;

use log::debug;

use super::StepList;
use crate::{
    error::{Result, WuyuError},
    models::{ProcessStep, StepKind, StepPayload},
};

/// The in-progress copy of a step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDraft {
    step: ProcessStep,
    inserted: bool,
}

impl StepDraft {
    pub fn step(&self) -> &ProcessStep {
        &self.step
    }

    /// True when the step does not exist in the owning list yet.
    pub fn is_new(&self) -> bool {
        !self.inserted
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.step.title = title.into();
    }

    pub fn payload_mut(&mut self) -> &mut StepPayload {
        &mut self.step.payload
    }

    fn validate(&self) -> Result<()> {
        if self.step.title.trim().is_empty() {
            return Err(WuyuError::invalid_input("title").with_reason("step title is required"));
        }
        if let StepPayload::Questionnaire(questionnaire) = &self.step.payload {
            if let Some(question) = questionnaire
                .questions
                .iter()
                .find(|q| q.kind.needs_options() && q.options.is_empty())
            {
                return Err(WuyuError::invalid_input("questions").with_reason(format!(
                    "question '{}' needs at least one option",
                    question.title
                )));
            }
        }
        Ok(())
    }
}

/// Two-state machine: nothing being edited, or one step being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StepEditor {
    #[default]
    Idle,
    Editing(StepDraft),
}

impl StepEditor {
    pub fn is_editing(&self) -> bool {
        matches!(self, StepEditor::Editing(_))
    }

    pub fn draft(&self) -> Option<&StepDraft> {
        match self {
            StepEditor::Editing(draft) => Some(draft),
            StepEditor::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut StepDraft> {
        match self {
            StepEditor::Editing(draft) => Some(draft),
            StepEditor::Idle => None,
        }
    }

    /// Starts editing a brand-new step. Any previous draft is discarded.
    pub fn begin_new(
        &mut self,
        list: &StepList,
        kind: StepKind,
        activity_title: Option<&str>,
    ) {
        self.discard_previous();
        *self = StepEditor::Editing(StepDraft {
            step: list.new_step(kind, activity_title),
            inserted: false,
        });
    }

    /// Starts editing a copy of an existing step. Any previous draft is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::StepNotFound` if the list has no such step.
    pub fn begin_edit(&mut self, list: &StepList, id: &str) -> Result<()> {
        let step = list
            .get(id)
            .cloned()
            .ok_or_else(|| WuyuError::StepNotFound { id: id.to_string() })?;
        self.discard_previous();
        *self = StepEditor::Editing(StepDraft {
            step,
            inserted: true,
        });
        Ok(())
    }

    /// Writes the draft into `list` and returns to idle.
    ///
    /// New steps are appended, existing ones are replaced in place. On error
    /// the draft is kept so it can be corrected or cancelled.
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::InvalidInput` when nothing is being edited or the
    /// draft fails validation, and `WuyuError::StepNotFound` when the edited
    /// step was removed from the list in the meantime.
    pub fn commit(&mut self, list: &mut StepList) -> Result<String> {
        let draft = match mem::take(self) {
            StepEditor::Editing(draft) => draft,
            StepEditor::Idle => {
                return Err(
                    WuyuError::invalid_input("step").with_reason("no step is being edited")
                );
            }
        };

        if let Err(e) = draft.validate() {
            *self = StepEditor::Editing(draft);
            return Err(e);
        }

        let id = if draft.inserted {
            let id = draft.step.id.clone();
            if !list.replace(draft.step.clone()) {
                *self = StepEditor::Editing(draft);
                return Err(WuyuError::StepNotFound { id });
            }
            id
        } else {
            list.push(draft.step).id.clone()
        };
        debug!("Committed step {id}");
        Ok(id)
    }

    /// Drops the draft without touching any list. Returns whether there was
    /// anything to drop.
    pub fn cancel(&mut self) -> bool {
        matches!(mem::take(self), StepEditor::Editing(_))
    }

    fn discard_previous(&mut self) {
        if let StepEditor::Editing(previous) = self {
            debug!("Discarding uncommitted edit of step {}", previous.step.id);
        }
    }
}
