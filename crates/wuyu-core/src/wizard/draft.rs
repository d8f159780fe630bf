//! The typed form state behind the wizard.
//!
//! Every field edit goes through [`DraftAction`] and [`ActivityDraft::apply`],
//! so the set of editable fields is checked by the compiler.

use jiff::civil::DateTime;

use crate::{
    catalog::Category,
    error::{Result, WuyuError},
    models::{Activity, Template, TemplateData},
    params::{ActivityPatch, NewActivity, NewTemplate},
    steps::StepList,
};

/// Form state for an activity or a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub categories: Vec<Category>,
    pub start_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
    pub location: String,
    pub max_participants: u32,
    pub cover_image: Option<String>,
    pub activity_direction: String,
    pub activity_plan: String,
    pub grades: Vec<String>,
    pub classes: Vec<String>,
    pub responsible_teacher: String,
    pub require_registration: bool,
    pub observation_points: Vec<String>,
    pub selected_plans: Vec<String>,
    pub process_steps: StepList,
}

/// One field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    SetTitle(String),
    SetDescription(String),
    /// Adds the category if missing, removes it otherwise. The first
    /// category in the list is the primary one.
    ToggleCategory(Category),
    SetCategories(Vec<Category>),
    SetStartDate(Option<DateTime>),
    SetEndDate(Option<DateTime>),
    SetLocation(String),
    SetMaxParticipants(u32),
    SetCoverImage(Option<String>),
    SetDirection(String),
    SetPlan(String),
    ToggleGrade(String),
    ToggleClass(String),
    SetResponsibleTeacher(String),
    SetRequireRegistration(bool),
    ToggleObservationPoint(String),
    TogglePlanSelection(String),
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    match values.iter().position(|v| *v == value) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(value),
    }
}

impl ActivityDraft {
    /// Applies a single field edit.
    pub fn apply(&mut self, action: DraftAction) {
        match action {
            DraftAction::SetTitle(title) => self.title = title,
            DraftAction::SetDescription(description) => self.description = description,
            DraftAction::ToggleCategory(category) => toggle(&mut self.categories, category),
            DraftAction::SetCategories(categories) => self.categories = categories,
            DraftAction::SetStartDate(start) => self.start_date = start,
            DraftAction::SetEndDate(end) => self.end_date = end,
            DraftAction::SetLocation(location) => self.location = location,
            DraftAction::SetMaxParticipants(max) => self.max_participants = max,
            DraftAction::SetCoverImage(cover) => self.cover_image = cover,
            DraftAction::SetDirection(direction) => self.activity_direction = direction,
            DraftAction::SetPlan(plan) => self.activity_plan = plan,
            DraftAction::ToggleGrade(grade) => toggle(&mut self.grades, grade),
            DraftAction::ToggleClass(class) => toggle(&mut self.classes, class),
            DraftAction::SetResponsibleTeacher(teacher) => self.responsible_teacher = teacher,
            DraftAction::SetRequireRegistration(required) => {
                self.require_registration = required;
            }
            DraftAction::ToggleObservationPoint(id) => toggle(&mut self.observation_points, id),
            DraftAction::TogglePlanSelection(plan) => toggle(&mut self.selected_plans, plan),
        }
    }

    /// Seeds a draft from an existing activity.
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            title: activity.title.clone(),
            description: activity.description.clone(),
            categories: activity.categories.clone(),
            start_date: activity.start_date,
            end_date: activity.end_date,
            location: activity.location.clone(),
            max_participants: activity.max_participants,
            cover_image: activity.cover_image.clone(),
            activity_direction: activity.activity_direction.clone(),
            activity_plan: activity.activity_plan.clone(),
            grades: activity.grades.clone(),
            classes: activity.classes.clone(),
            responsible_teacher: activity.responsible_teacher.clone(),
            require_registration: activity.require_registration,
            observation_points: activity.observation_points.clone(),
            selected_plans: Vec::new(),
            process_steps: activity.process_steps.clone(),
        }
    }

    /// Hydrates a whole draft from a template. The step list is a deep copy,
    /// so editing the draft never reaches back into the template.
    pub fn from_template(template: &Template) -> Self {
        let data = &template.template_data;
        Self {
            title: data.title.clone(),
            description: data.description.clone(),
            categories: template.categories.clone(),
            start_date: data.start_date,
            end_date: data.end_date,
            location: data.location.clone(),
            max_participants: data.max_participants,
            cover_image: template.cover_image.clone(),
            activity_direction: data.activity_direction.clone(),
            activity_plan: String::new(),
            grades: data.grades.clone(),
            classes: data.classes.clone(),
            responsible_teacher: data.responsible_teacher.clone(),
            require_registration: data.require_registration,
            observation_points: data.observation_points.clone(),
            selected_plans: data.selected_plans.clone(),
            process_steps: data.process_steps.clone(),
        }
    }

    /// Checks the fields required at submit time.
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::InvalidInput` naming the first missing field.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(WuyuError::invalid_input("title").with_reason("title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(
                WuyuError::invalid_input("description").with_reason("description is required")
            );
        }
        if self.categories.is_empty() {
            return Err(WuyuError::invalid_input("categories")
                .with_reason("at least one category is required"));
        }
        Ok(())
    }

    pub fn to_new_activity(&self, creator: &str) -> NewActivity {
        let mut process_steps = self.process_steps.clone();
        process_steps.normalize_order();
        NewActivity {
            title: self.title.clone(),
            description: self.description.clone(),
            categories: self.categories.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location.clone(),
            max_participants: self.max_participants,
            creator: creator.to_string(),
            cover_image: self.cover_image.clone(),
            activity_direction: self.activity_direction.clone(),
            activity_plan: self.activity_plan.clone(),
            grades: self.grades.clone(),
            classes: self.classes.clone(),
            responsible_teacher: self.responsible_teacher.clone(),
            require_registration: self.require_registration,
            process_steps,
            observation_points: self.observation_points.clone(),
        }
    }

    /// Patch replacing every editable field, clearing dates the draft left
    /// empty. A missing cover image keeps the stored one.
    pub fn to_patch(&self) -> ActivityPatch {
        let mut process_steps = self.process_steps.clone();
        process_steps.normalize_order();
        ActivityPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            categories: Some(self.categories.clone()),
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            location: Some(self.location.clone()),
            max_participants: Some(self.max_participants),
            creator: None,
            cover_image: self.cover_image.clone(),
            activity_direction: Some(self.activity_direction.clone()),
            activity_plan: Some(self.activity_plan.clone()),
            grades: Some(self.grades.clone()),
            classes: Some(self.classes.clone()),
            responsible_teacher: Some(self.responsible_teacher.clone()),
            require_registration: Some(self.require_registration),
            process_steps: Some(process_steps),
            observation_points: Some(self.observation_points.clone()),
        }
    }

    pub fn to_template_data(&self) -> TemplateData {
        let mut process_steps = self.process_steps.clone();
        process_steps.normalize_order();
        TemplateData {
            title: self.title.clone(),
            description: self.description.clone(),
            grades: self.grades.clone(),
            classes: self.classes.clone(),
            location: self.location.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            max_participants: self.max_participants,
            responsible_teacher: self.responsible_teacher.clone(),
            require_registration: self.require_registration,
            activity_direction: self.activity_direction.clone(),
            observation_points: self.observation_points.clone(),
            process_steps,
            selected_plans: self.selected_plans.clone(),
        }
    }

    /// Template named after the draft title.
    pub fn to_new_template(&self, created_by: &str) -> NewTemplate {
        NewTemplate {
            name: self.title.clone(),
            description: self.description.clone(),
            categories: self.categories.clone(),
            cover_image: self.cover_image.clone(),
            created_by: created_by.to_string(),
            template_data: self.to_template_data(),
        }
    }
}
