//! Display implementations for domain models.
//!
//! All output is markdown so the terminal renderer can style it. Full views
//! (`# ...` headers) are used for single-entity commands; the `fmt_summary`
//! helpers are the compact form used inside collections.

use std::fmt;

use super::datetime::{LocalDateTime, Schedule};
use crate::{
    catalog::{ActivityStatus, Category, ObservationPoint, PlanItemStatus},
    models::{Activity, CategoryPlan, ProcessStep, StepKind, StepPayload, Template},
};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn category_list(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("{}{}", c.glyph(), c.display_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

impl ProcessStep {
    fn fmt_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            StepPayload::Content(content) => {
                if !content.body.is_empty() {
                    writeln!(f, "{}", content.body)?;
                    writeln!(f)?;
                }
                for image in &content.images {
                    writeln!(f, "- Image: [{}]({})", image.name, image.url)?;
                }
            }
            StepPayload::Checkin(checkin) => {
                if !checkin.description.is_empty() {
                    writeln!(f, "{}", checkin.description)?;
                }
            }
            StepPayload::Video(video) => {
                match &video.video {
                    Some(file) => writeln!(f, "- Video: [{}]({})", file.name, file.url)?,
                    None => writeln!(f, "- Video: not uploaded")?,
                }
                if !video.description.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "{}", video.description)?;
                }
            }
            StepPayload::Questionnaire(questionnaire) => {
                if !questionnaire.description.is_empty() {
                    writeln!(f, "{}", questionnaire.description)?;
                    writeln!(f)?;
                }
                for (index, question) in questionnaire.questions.iter().enumerate() {
                    writeln!(f, "{}. {}", index + 1, question.title)?;
                    for option in &question.options {
                        writeln!(f, "   - {option}")?;
                    }
                }
            }
            StepPayload::Task(task) => {
                writeln!(f, "- Submission: {:?}", task.submission_kind)?;
                if !task.requirements.is_empty() {
                    writeln!(f, "- Requirements: {}", task.requirements)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for ProcessStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} [{}] ({})",
            self.order + 1,
            self.title,
            self.kind(),
            self.id
        )?;
        writeln!(f)?;
        self.fmt_payload(f)?;
        writeln!(f)
    }
}

impl Activity {
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) {}",
            self.title,
            self.id,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Categories**: {}", category_list(&self.categories))?;
        writeln!(
            f,
            "- **When**: {}",
            Schedule {
                start: self.start_date.as_ref(),
                end: self.end_date.as_ref(),
            }
        )?;
        if !self.location.is_empty() {
            writeln!(f, "- **Where**: {}", self.location)?;
        }
        writeln!(
            f,
            "- **Participants**: {}/{}",
            self.participants, self.max_participants
        )?;
        writeln!(f)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Categories: {}", category_list(&self.categories))?;
        writeln!(
            f,
            "- Schedule: {}",
            Schedule {
                start: self.start_date.as_ref(),
                end: self.end_date.as_ref(),
            }
        )?;
        if !self.location.is_empty() {
            writeln!(f, "- Location: {}", self.location)?;
        }
        writeln!(
            f,
            "- Participants: {}/{}",
            self.participants, self.max_participants
        )?;
        if self.require_registration {
            writeln!(f, "- Registration required")?;
        }
        if !self.creator.is_empty() {
            writeln!(f, "- Creator: {}", self.creator)?;
        }
        if !self.responsible_teacher.is_empty() {
            writeln!(f, "- Responsible: {}", self.responsible_teacher)?;
        }
        if !self.activity_direction.is_empty() {
            writeln!(f, "- Direction: {}", self.activity_direction)?;
        }
        writeln!(f, "- Grades: {}", join_or_dash(&self.grades))?;
        writeln!(f, "- Classes: {}", join_or_dash(&self.classes))?;
        if !self.observation_points.is_empty() {
            writeln!(
                f,
                "- Observation points: {}",
                self.observation_points.join(", ")
            )?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.process_steps.is_empty() {
            writeln!(f, "\nNo process steps.")?;
        } else {
            writeln!(f, "\n## Process")?;
            writeln!(f)?;
            for step in &self.process_steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl Template {
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = if self.is_system { "system" } else { "user" };
        writeln!(f, "## {} (ID: {}, {origin})", self.name, self.id)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "- **Description**: {}", self.description)?;
        }
        writeln!(f, "- **Categories**: {}", category_list(&self.categories))?;
        writeln!(
            f,
            "- **Steps**: {}",
            self.template_data.process_steps.len()
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(
            f,
            "- Origin: {}",
            if self.is_system { "system" } else { "user" }
        )?;
        writeln!(f, "- Categories: {}", category_list(&self.categories))?;
        if !self.created_by.is_empty() {
            writeln!(f, "- Created by: {}", self.created_by)?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        let data = &self.template_data;
        writeln!(f, "\n## Defaults")?;
        writeln!(f)?;
        if !data.title.is_empty() {
            writeln!(f, "- Title: {}", data.title)?;
        }
        if !data.location.is_empty() {
            writeln!(f, "- Location: {}", data.location)?;
        }
        writeln!(f, "- Max participants: {}", data.max_participants)?;
        if !data.activity_direction.is_empty() {
            writeln!(f, "- Direction: {}", data.activity_direction)?;
        }

        if data.process_steps.is_empty() {
            writeln!(f, "\nNo process steps.")?;
        } else {
            writeln!(f, "\n## Process")?;
            writeln!(f)?;
            for step in &data.process_steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for CategoryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} {} ({})",
            self.category.glyph(),
            self.title,
            self.category.display_name()
        )?;
        writeln!(f)?;

        if self.directions.is_empty() {
            writeln!(f, "No directions planned.")?;
            return writeln!(f);
        }

        for direction in &self.directions {
            writeln!(f, "### {}", direction.name)?;
            writeln!(f)?;
            if !direction.description.is_empty() {
                writeln!(f, "{}", direction.description)?;
                writeln!(f)?;
            }
            if direction.activities.is_empty() {
                writeln!(f, "- (no activities)")?;
            }
            for activity in &direction.activities {
                writeln!(
                    f,
                    "- {} (ID: {}, {})",
                    activity.name, activity.id, activity.status
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for ObservationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} / {}: {}",
            self.id, self.subcategory, self.name, self.description
        )
    }
}
