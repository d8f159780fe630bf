//! The wizard controller: phase navigation, step editing and submit.

use std::time::Duration;

use log::{debug, info, warn};

use super::{
    draft::{ActivityDraft, DraftAction},
    phase::{FlowKind, Phase, Section},
};
use crate::{
    error::{Result, WuyuError},
    models::{StepKind, Template},
    steps::{MoveDirection, StepDraft, StepEditor},
    store::Store,
};

/// Pause between a successful submit and the redirect to the listing.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Listing page shown after an activity submit.
pub const ACTIVITIES_ROUTE: &str = "/activities";

/// Listing page shown after a template submit.
pub const TEMPLATES_ROUTE: &str = "/templates";

/// The user driving the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Owner id stored on created entities
    pub id: String,
    /// Display name stored as the activity creator
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardMode {
    CreateActivity,
    CreateTemplate,
    EditActivity { id: String },
}

impl WizardMode {
    pub fn flow(&self) -> FlowKind {
        match self {
            WizardMode::CreateTemplate => FlowKind::Template,
            WizardMode::CreateActivity | WizardMode::EditActivity { .. } => FlowKind::Activity,
        }
    }
}

/// What a successful submit produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Id of the created or updated entity
    pub id: String,
    pub redirect_to: &'static str,
    pub redirect_after: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded(SubmitOutcome),
    /// Inline error; the form stays editable
    Failed(String),
}

/// Drives one authoring session from first phase to submit.
///
/// # Example
///
/// ```rust
/// use wuyu_core::{
///     catalog::Category,
///     wizard::{Author, DraftAction, Wizard},
///     StoreBuilder,
/// };
///
/// # fn example() -> wuyu_core::Result<()> {
/// let mut store = StoreBuilder::new().in_memory().with_seed_data(false).build()?;
/// let mut wizard = Wizard::new_activity(Author::new("teacher-1", "Ms. Li"));
///
/// wizard.dispatch(DraftAction::SetTitle("Spring Festival Run".into()));
/// wizard.dispatch(DraftAction::SetDescription("3km fun run".into()));
/// wizard.dispatch(DraftAction::ToggleCategory(Category::PhysicalHealth));
///
/// let outcome = wizard.submit(&mut store)?;
/// assert_eq!(outcome.redirect_to, "/activities");
/// assert!(store.get_activity_by_id(&outcome.id).is_some());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Wizard {
    mode: WizardMode,
    author: Author,
    phase: Phase,
    draft: ActivityDraft,
    editor: StepEditor,
    submit_state: SubmitState,
}

impl Wizard {
    fn with_mode(mode: WizardMode, author: Author, draft: ActivityDraft) -> Self {
        Self {
            mode,
            author,
            phase: Phase::BasicSettings,
            draft,
            editor: StepEditor::Idle,
            submit_state: SubmitState::Idle,
        }
    }

    /// Empty activity creation flow.
    pub fn new_activity(author: Author) -> Self {
        Self::with_mode(WizardMode::CreateActivity, author, ActivityDraft::default())
    }

    /// Empty template creation flow.
    pub fn new_template(author: Author) -> Self {
        Self::with_mode(WizardMode::CreateTemplate, author, ActivityDraft::default())
    }

    /// Edit flow seeded from the stored activity.
    ///
    /// An unknown id leaves the form on its empty defaults; the miss is
    /// logged and only surfaces at submit time.
    pub fn edit_activity(store: &Store, id: &str, author: Author) -> Self {
        let draft = match store.get_activity_by_id(id) {
            Some(activity) => ActivityDraft::from_activity(activity),
            None => {
                warn!("Activity {id} not found, editing with empty defaults");
                ActivityDraft::default()
            }
        };
        Self::with_mode(
            WizardMode::EditActivity { id: id.to_string() },
            author,
            draft,
        )
    }

    pub fn mode(&self) -> &WizardMode {
        &self.mode
    }

    pub fn draft(&self) -> &ActivityDraft {
        &self.draft
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit_state
    }

    pub fn dispatch(&mut self, action: DraftAction) {
        self.draft.apply(action);
    }

    /// Replaces the whole draft with the template's data. Any step being
    /// edited is discarded.
    pub fn apply_template(&mut self, template: &Template) {
        self.draft = ActivityDraft::from_template(template);
        self.editor = StepEditor::Idle;
        debug!(
            "Draft hydrated from template {} with {} steps",
            template.id,
            self.draft.process_steps.len()
        );
    }

    /// Looks up a template in `store` and applies it.
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::TemplateNotFound` if no template has this id.
    pub fn use_template(&mut self, store: &Store, template_id: &str) -> Result<()> {
        let template = store
            .get_template_by_id(template_id)
            .ok_or_else(|| WuyuError::TemplateNotFound {
                id: template_id.to_string(),
            })?;
        self.apply_template(&template);
        Ok(())
    }

    // Navigation

    pub fn phases(&self) -> &'static [Phase] {
        self.mode.flow().phases()
    }

    pub fn current_phase(&self) -> Phase {
        self.phase
    }

    pub fn sections(&self) -> &'static [Section] {
        self.phase.sections()
    }

    fn phase_index(&self) -> usize {
        self.phases()
            .iter()
            .position(|p| *p == self.phase)
            .unwrap_or(0)
    }

    /// Moves to the next phase. Returns `false` on the last phase.
    pub fn next(&mut self) -> bool {
        match self.phases().get(self.phase_index() + 1) {
            Some(phase) => {
                self.phase = *phase;
                debug!("Wizard moved to {}", phase.key());
                true
            }
            None => false,
        }
    }

    /// Moves to the previous phase. Returns `false` on the first phase.
    pub fn previous(&mut self) -> bool {
        match self.phase_index().checked_sub(1) {
            Some(index) => {
                self.phase = self.phases()[index];
                debug!("Wizard moved back to {}", self.phase.key());
                true
            }
            None => false,
        }
    }

    /// Jumps straight to `phase`. Returns `false` if the flow has no such
    /// phase.
    pub fn jump_to(&mut self, phase: Phase) -> bool {
        if self.phases().contains(&phase) {
            self.phase = phase;
            debug!("Wizard jumped to {}", phase.key());
            true
        } else {
            false
        }
    }

    // Process steps

    pub fn step_editor(&self) -> &StepEditor {
        &self.editor
    }

    /// Starts a draft for a new step; it joins the list on commit.
    pub fn add_step(&mut self, kind: StepKind) {
        let title = self.draft.title.trim();
        let title = (!title.is_empty()).then_some(title);
        self.editor
            .begin_new(&self.draft.process_steps, kind, title);
    }

    /// Starts editing a copy of an existing step.
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::StepNotFound` if the draft has no such step.
    pub fn edit_step(&mut self, id: &str) -> Result<()> {
        self.editor.begin_edit(&self.draft.process_steps, id)
    }

    pub fn step_draft_mut(&mut self) -> Option<&mut StepDraft> {
        self.editor.draft_mut()
    }

    /// Writes the step being edited into the draft's list.
    ///
    /// # Errors
    ///
    /// See [`StepEditor::commit`].
    pub fn commit_step(&mut self) -> Result<String> {
        self.editor.commit(&mut self.draft.process_steps)
    }

    pub fn cancel_step(&mut self) -> bool {
        self.editor.cancel()
    }

    pub fn move_step(&mut self, id: &str, direction: MoveDirection) -> bool {
        self.draft.process_steps.move_step(id, direction)
    }

    /// Removes a step. Editing of that step, if any, is abandoned.
    pub fn delete_step(&mut self, id: &str) -> bool {
        let editing_it = self
            .editor
            .draft()
            .is_some_and(|d| !d.is_new() && d.step().id == id);
        if editing_it {
            self.editor.cancel();
        }
        self.draft.process_steps.delete_step(id)
    }

    // Submit

    /// Checks the required fields without submitting.
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::InvalidInput` naming the first missing field.
    pub fn validate(&self) -> Result<()> {
        self.draft.validate()
    }

    /// Enters the submitting state after validation.
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::SubmitInProgress` while a submit is in flight or
    /// after one succeeded, and `WuyuError::InvalidInput` when validation
    /// fails (the form is retained and the state becomes `Failed`).
    pub fn begin_submit(&mut self) -> Result<()> {
        if matches!(
            self.submit_state,
            SubmitState::Submitting | SubmitState::Succeeded(_)
        ) {
            return Err(WuyuError::SubmitInProgress);
        }
        if let Err(e) = self.draft.validate() {
            self.submit_state = SubmitState::Failed(e.to_string());
            return Err(e);
        }
        if self.editor.is_editing() {
            warn!("Submitting with an uncommitted step edit; it is not included");
        }
        self.draft.process_steps.normalize_order();
        self.submit_state = SubmitState::Submitting;
        Ok(())
    }

    /// Writes the draft to the store. Must follow [`Wizard::begin_submit`].
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::InvalidInput` when no submit was started and
    /// `WuyuError::ActivityNotFound` when the edited activity no longer
    /// exists. On error the form is retained and the state becomes `Failed`.
    pub fn complete_submit(&mut self, store: &mut Store) -> Result<SubmitOutcome> {
        if self.submit_state != SubmitState::Submitting {
            return Err(WuyuError::invalid_input("submit").with_reason("no submit in progress"));
        }

        let written = match &self.mode {
            WizardMode::CreateActivity => store
                .add_new_activity(self.draft.to_new_activity(&self.author.name), &self.author.id)
                .map(|id| (id, ACTIVITIES_ROUTE))
                .ok_or_else(|| {
                    WuyuError::invalid_input("activity").with_reason("store rejected the activity")
                }),
            WizardMode::CreateTemplate => store
                .add_new_template(self.draft.to_new_template(&self.author.id))
                .map(|id| (id, TEMPLATES_ROUTE))
                .ok_or_else(|| {
                    WuyuError::invalid_input("template").with_reason("store rejected the template")
                }),
            WizardMode::EditActivity { id } => {
                if store.update_activity(id, self.draft.to_patch()) {
                    Ok((id.clone(), ACTIVITIES_ROUTE))
                } else {
                    Err(WuyuError::ActivityNotFound { id: id.clone() })
                }
            }
        };

        match written {
            Ok((id, redirect_to)) => {
                info!("Wizard submitted {id}, redirecting to {redirect_to}");
                let outcome = SubmitOutcome {
                    id,
                    redirect_to,
                    redirect_after: REDIRECT_DELAY,
                };
                self.submit_state = SubmitState::Succeeded(outcome.clone());
                Ok(outcome)
            }
            Err(e) => {
                self.submit_state = SubmitState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Validates and writes the draft in one go.
    ///
    /// # Errors
    ///
    /// See [`Wizard::begin_submit`] and [`Wizard::complete_submit`].
    pub fn submit(&mut self, store: &mut Store) -> Result<SubmitOutcome> {
        self.begin_submit()?;
        self.complete_submit(store)
    }
}
