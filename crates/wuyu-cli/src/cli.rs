//! Subcommand arguments and their handlers.
//!
//! Argument structs carry the clap attributes and convert into core types
//! (`ActivityFilter`, `NewPlan`, wizard `DraftAction`s), so the core crate
//! stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params / Wizard → Store
//! ```
//!
//! Activity and template creation run through the same authoring wizard as
//! any other front end, so validation and step defaults are identical.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jiff::civil::DateTime;
use log::debug;
use wuyu_core::{
    catalog::{ActivityStatus, Category},
    display::{
        Activities, CreateResult, DeleteResult, ObservationPoints, SemesterView, Templates,
        UpdateResult,
    },
    models::{ActivityFilter, Direction, StepKind},
    wizard::{ActivityDraft, Author, DraftAction, Wizard},
    NewPlan, Store, WuyuError,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Activity arguments
// ============================================================================

/// List activities, optionally filtered
#[derive(Args, Default)]
pub struct ListActivitiesArgs {
    #[arg(
        short,
        long,
        help = "Only activities tagged with this category (key or alias, e.g. physical)"
    )]
    pub category: Option<Category>,
    #[arg(
        short,
        long,
        help = "Only activities in this status (upcoming, ongoing, completed, cancelled)"
    )]
    pub status: Option<ActivityStatus>,
    #[arg(
        short,
        long,
        help = "Case-insensitive text matched against title, description and location"
    )]
    pub query: Option<String>,
    #[arg(long, help = "Only activities owned by the current --user")]
    pub mine: bool,
}

impl ListActivitiesArgs {
    fn into_filter(self, user: &str) -> ActivityFilter {
        ActivityFilter {
            query: self.query,
            category: self.category,
            status: self.status,
            created_by: self.mine.then(|| user.to_string()),
        }
    }
}

#[derive(Args)]
pub struct ShowActivityArgs {
    #[arg(help = "Identifier of the activity to show")]
    pub id: String,
}

/// Fields shared by activity and template authoring.
#[derive(Args)]
pub struct DraftArgs {
    #[arg(short, long, help = "Description shown to participants (required)")]
    pub description: Option<String>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Categories as comma-separated keys or aliases; the first is primary"
    )]
    pub category: Vec<Category>,
    #[arg(short, long, help = "Where the activity takes place")]
    pub location: Option<String>,
    #[arg(long, help = "Start as a civil date-time, e.g. 2025-04-18T08:30")]
    pub start: Option<DateTime>,
    #[arg(long, help = "End as a civil date-time, e.g. 2025-04-18T11:00")]
    pub end: Option<DateTime>,
    #[arg(short, long, help = "Maximum number of participants")]
    pub max_participants: Option<u32>,
    #[arg(long, help = "Plan direction the activity belongs to")]
    pub direction: Option<String>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Process steps to append, as comma-separated kinds (content, checkin, video, questionnaire, task)"
    )]
    pub step: Vec<StepKind>,
}

impl DraftArgs {
    /// Draft edits for the flags that were given. Anything left out keeps
    /// the value already in the draft.
    fn into_actions(self, title: Option<String>) -> (Vec<DraftAction>, Vec<StepKind>) {
        let mut actions: Vec<DraftAction> = title.map(DraftAction::SetTitle).into_iter().collect();
        if let Some(description) = self.description {
            actions.push(DraftAction::SetDescription(description));
        }
        if !self.category.is_empty() {
            actions.push(DraftAction::SetCategories(self.category));
        }
        if let Some(location) = self.location {
            actions.push(DraftAction::SetLocation(location));
        }
        if self.start.is_some() {
            actions.push(DraftAction::SetStartDate(self.start));
        }
        if self.end.is_some() {
            actions.push(DraftAction::SetEndDate(self.end));
        }
        if let Some(max) = self.max_participants {
            actions.push(DraftAction::SetMaxParticipants(max));
        }
        if let Some(direction) = self.direction {
            actions.push(DraftAction::SetDirection(direction));
        }
        (actions, self.step)
    }
}

/// Create an activity through the authoring wizard
#[derive(Args)]
pub struct CreateActivityArgs {
    #[arg(help = "Title of the activity")]
    pub title: String,
    #[arg(
        short,
        long,
        help = "Template id to start from; its fields and steps are copied first"
    )]
    pub template: Option<String>,
    #[command(flatten)]
    pub draft: DraftArgs,
}

/// Edit an activity through the authoring wizard
#[derive(Args)]
pub struct UpdateActivityArgs {
    #[arg(help = "Identifier of the activity to update")]
    pub id: String,
    #[arg(long, help = "New title")]
    pub title: Option<String>,
    #[command(flatten)]
    pub draft: DraftArgs,
}

#[derive(Args)]
pub struct DeleteActivityArgs {
    #[arg(help = "Identifier of the activity to delete")]
    pub id: String,
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// List activities
    #[command(alias = "l")]
    List(ListActivitiesArgs),
    /// Show one activity with its process steps
    #[command(alias = "s")]
    Show(ShowActivityArgs),
    /// Create an activity
    #[command(alias = "c")]
    Create(CreateActivityArgs),
    /// Update fields of an activity; given steps are appended
    #[command(alias = "u")]
    Update(UpdateActivityArgs),
    /// Delete an activity
    #[command(alias = "d")]
    Delete(DeleteActivityArgs),
}

// ============================================================================
// Plan arguments
// ============================================================================

#[derive(Args)]
pub struct CreatePlanArgs {
    #[arg(help = "Category of the plan (key or alias)")]
    pub category: Category,
    #[arg(help = "Title of the plan")]
    pub title: String,
    #[arg(
        short,
        long = "direction",
        help = "Direction as NAME or NAME:DESCRIPTION; repeat for several"
    )]
    pub directions: Vec<String>,
}

impl CreatePlanArgs {
    fn into_plan(self, semester: Option<String>) -> NewPlan {
        let directions = self
            .directions
            .iter()
            .map(|raw| match raw.split_once(':') {
                Some((name, description)) => Direction::new(name.trim(), description.trim()),
                None => Direction::new(raw.trim(), ""),
            })
            .collect();
        NewPlan {
            semester,
            category: self.category,
            title: self.title,
            directions,
        }
    }
}

#[derive(Args)]
pub struct DeletePlanArgs {
    #[arg(help = "Category whose plan is removed from the semester")]
    pub category: Category,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the semester's plans with the activities placed under them
    #[command(alias = "s")]
    Show,
    /// Create or replace a category plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Delete a category plan
    #[command(alias = "d")]
    Delete(DeletePlanArgs),
}

// ============================================================================
// Template arguments
// ============================================================================

#[derive(Args)]
pub struct ListTemplatesArgs {
    #[arg(short, long, help = "Only templates tagged with this category")]
    pub category: Option<Category>,
}

#[derive(Args)]
pub struct ShowTemplateArgs {
    #[arg(help = "Identifier of the template to show")]
    pub id: String,
}

/// Save a reusable template through the authoring wizard
#[derive(Args)]
pub struct CreateTemplateArgs {
    #[arg(help = "Name of the template, also used as the default activity title")]
    pub name: String,
    #[command(flatten)]
    pub draft: DraftArgs,
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List system and user templates, newest first
    #[command(alias = "l")]
    List(ListTemplatesArgs),
    /// Show one template with its process steps
    #[command(alias = "s")]
    Show(ShowTemplateArgs),
    /// Create a user template
    #[command(alias = "c")]
    Create(CreateTemplateArgs),
}

// ============================================================================
// Catalog arguments
// ============================================================================

#[derive(Args)]
pub struct ListPointsArgs {
    #[arg(short, long, help = "Only points of this category")]
    pub category: Option<Category>,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List the five education categories
    Categories,
    /// List observation points
    Points(ListPointsArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against one store and prints through the renderer.
pub struct Cli {
    store: Store,
    renderer: TerminalRenderer,
    user: String,
}

impl Cli {
    pub fn new(store: Store, renderer: TerminalRenderer, user: String) -> Self {
        Self {
            store,
            renderer,
            user,
        }
    }

    fn author(&self) -> Author {
        Author::new(self.user.clone(), self.user.clone())
    }

    pub fn handle_activity_command(&mut self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::List(args) => {
                let filter = args.into_filter(&self.user);
                let activities = Activities(
                    self.store
                        .filter_activities(&filter)
                        .into_iter()
                        .cloned()
                        .collect(),
                );
                self.renderer.render(&activities.to_string())
            }
            ActivityCommands::Show(args) => {
                let activity = self
                    .store
                    .get_activity_by_id(&args.id)
                    .ok_or(WuyuError::ActivityNotFound { id: args.id })?;
                self.renderer.render(&activity.to_string())
            }
            ActivityCommands::Create(args) => self.create_activity(args),
            ActivityCommands::Update(args) => self.update_activity(args),
            ActivityCommands::Delete(args) => {
                let activity = self
                    .store
                    .get_activity_by_id(&args.id)
                    .cloned()
                    .ok_or_else(|| WuyuError::ActivityNotFound {
                        id: args.id.clone(),
                    })?;
                if !self.store.delete_activity(&args.id) {
                    return Err(WuyuError::ActivityNotFound { id: args.id }.into());
                }
                self.renderer
                    .render(&DeleteResult::new(activity).to_string())
            }
        }
    }

    fn create_activity(&mut self, args: CreateActivityArgs) -> Result<()> {
        let mut wizard = Wizard::new_activity(self.author());
        if let Some(template_id) = &args.template {
            wizard
                .use_template(&self.store, template_id)
                .with_context(|| format!("Cannot start from template {template_id}"))?;
        }

        let (actions, steps) = args.draft.into_actions(Some(args.title));
        run_wizard(&mut wizard, actions, steps)?;

        let outcome = wizard
            .submit(&mut self.store)
            .context("Failed to create activity")?;
        let activity = self
            .store
            .get_activity_by_id(&outcome.id)
            .cloned()
            .ok_or(WuyuError::ActivityNotFound { id: outcome.id })?;
        self.renderer
            .render(&CreateResult::new(activity).to_string())
    }

    fn update_activity(&mut self, args: UpdateActivityArgs) -> Result<()> {
        if self.store.get_activity_by_id(&args.id).is_none() {
            return Err(WuyuError::ActivityNotFound { id: args.id }.into());
        }
        let mut wizard = Wizard::edit_activity(&self.store, &args.id, self.author());
        let before = wizard.draft().clone();

        let (actions, steps) = args.draft.into_actions(args.title);
        run_wizard(&mut wizard, actions, steps)?;
        let changes = changed_fields(&before, wizard.draft());

        let outcome = wizard
            .submit(&mut self.store)
            .context("Failed to update activity")?;
        let activity = self
            .store
            .get_activity_by_id(&outcome.id)
            .cloned()
            .ok_or(WuyuError::ActivityNotFound { id: outcome.id })?;
        self.renderer
            .render(&UpdateResult::with_changes(activity, changes).to_string())
    }

    pub fn handle_plan_command(&mut self, command: PlanCommands) -> Result<()> {
        let semester = self.store.current_semester().to_string();
        match command {
            PlanCommands::Show => {
                let view = SemesterView {
                    plans: self.store.get_plans_with_actual_activities(&semester),
                    semester,
                };
                self.renderer.render(&view.to_string())
            }
            PlanCommands::Create(args) => {
                let plan = args.into_plan(Some(semester.clone()));
                let category = plan.category;
                if !self.store.add_new_plan(plan) {
                    return Err(WuyuError::invalid_input("title")
                        .with_reason("plan title is required")
                        .into());
                }
                let saved = self
                    .store
                    .get_plans(&semester)
                    .into_iter()
                    .find(|p| p.category == category)
                    .cloned()
                    .context("Saved plan not found")?;
                self.renderer.render(&CreateResult::new(saved).to_string())
            }
            PlanCommands::Delete(args) => {
                let existing = self
                    .store
                    .get_plans(&semester)
                    .into_iter()
                    .find(|p| p.category == args.category)
                    .cloned()
                    .with_context(|| {
                        format!(
                            "No {} plan in semester {semester}",
                            args.category.key()
                        )
                    })?;
                self.store.delete_plan(&semester, args.category);
                self.renderer
                    .render(&DeleteResult::new(existing).to_string())
            }
        }
    }

    pub fn handle_template_command(&mut self, command: TemplateCommands) -> Result<()> {
        match command {
            TemplateCommands::List(args) => {
                let templates = match args.category {
                    Some(category) => self.store.get_templates_by_category(category),
                    None => self.store.get_all_templates(),
                };
                self.renderer.render(&Templates(templates).to_string())
            }
            TemplateCommands::Show(args) => {
                let template = self
                    .store
                    .get_template_by_id(&args.id)
                    .ok_or(WuyuError::TemplateNotFound { id: args.id })?;
                self.renderer.render(&template.to_string())
            }
            TemplateCommands::Create(args) => {
                let mut wizard = Wizard::new_template(self.author());
                let (actions, steps) = args.draft.into_actions(Some(args.name));
                run_wizard(&mut wizard, actions, steps)?;

                let outcome = wizard
                    .submit(&mut self.store)
                    .context("Failed to create template")?;
                let template = self
                    .store
                    .get_template_by_id(&outcome.id)
                    .ok_or(WuyuError::TemplateNotFound { id: outcome.id })?;
                self.renderer
                    .render(&CreateResult::new(template).to_string())
            }
        }
    }

    pub fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        match command {
            CatalogCommands::Categories => {
                let mut markdown = String::from("# Categories\n\n");
                for category in self.store.categories() {
                    markdown.push_str(&format!(
                        "- {} **{}** `{}` ({})\n",
                        category.glyph(),
                        category.display_name(),
                        category.key(),
                        category.color()
                    ));
                }
                self.renderer.render(&markdown)
            }
            CatalogCommands::Points(args) => {
                let points = match args.category {
                    Some(category) => self.store.observation_points_by_category(category),
                    None => self.store.observation_points().iter().collect(),
                };
                self.renderer
                    .render(&ObservationPoints(points).to_string())
            }
        }
    }
}

/// Human-readable list of what an edit changed.
fn changed_fields(before: &ActivityDraft, after: &ActivityDraft) -> Vec<String> {
    let mut changes = Vec::new();
    if before.title != after.title {
        changes.push(format!("Title: {} → {}", before.title, after.title));
    }
    if before.description != after.description {
        changes.push("Description updated".to_string());
    }
    if before.categories != after.categories {
        let keys: Vec<&str> = after.categories.iter().map(Category::key).collect();
        changes.push(format!("Categories: {}", keys.join(", ")));
    }
    if before.start_date != after.start_date || before.end_date != after.end_date {
        changes.push("Schedule updated".to_string());
    }
    if before.location != after.location {
        changes.push(format!("Location: {}", after.location));
    }
    if before.max_participants != after.max_participants {
        changes.push(format!(
            "Max participants: {} → {}",
            before.max_participants, after.max_participants
        ));
    }
    if before.activity_direction != after.activity_direction {
        changes.push(format!("Direction: {}", after.activity_direction));
    }
    let added = after
        .process_steps
        .len()
        .saturating_sub(before.process_steps.len());
    if added > 0 {
        changes.push(format!("Added {added} process step(s)"));
    }
    changes
}

/// Applies field edits, then appends one committed step per kind.
fn run_wizard(wizard: &mut Wizard, actions: Vec<DraftAction>, steps: Vec<StepKind>) -> Result<()> {
    for action in actions {
        wizard.dispatch(action);
    }
    for kind in steps {
        wizard.add_step(kind);
        let id = wizard
            .commit_step()
            .with_context(|| format!("Failed to add {} step", kind.as_str()))?;
        debug!("Added {} step {id}", kind.as_str());
    }
    Ok(())
}
