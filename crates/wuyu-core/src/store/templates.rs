//! Template operations.
//!
//! Templates are the union of the fixed system list and the user list. User
//! templates live in memory for the session and are mirrored to persistence
//! under [`USER_TEMPLATES_KEY`]; every read merges the persisted list back
//! in, so templates written by an earlier session show up as well.

use jiff::Timestamp;
use log::{info, warn};

use super::Store;
use crate::{
    catalog::Category,
    error::Result,
    models::Template,
    params::NewTemplate,
    persistence::USER_TEMPLATES_KEY,
};

impl Store {
    /// Reads the persisted user template list.
    fn read_persisted_templates(&self) -> Result<Vec<Template>> {
        match self.persistence.load(USER_TEMPLATES_KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persisted user templates, or an empty list if they cannot be read.
    fn load_persisted_templates(&self) -> Vec<Template> {
        self.read_persisted_templates().unwrap_or_else(|e| {
            warn!("Failed to load persisted templates: {e}");
            Vec::new()
        })
    }

    /// Appends `template` to the persisted list.
    fn persist_template(&self, template: &Template) -> Result<()> {
        let mut persisted = self.read_persisted_templates()?;
        persisted.push(template.clone());
        let bytes = serde_json::to_vec(&persisted)?;
        self.persistence.save(USER_TEMPLATES_KEY, &bytes)
    }

    /// User templates: persisted ones first, then session-only ones that did
    /// not make it into persistence.
    fn user_templates(&self) -> Vec<Template> {
        let mut merged = self.load_persisted_templates();
        for template in &self.user_templates {
            if !merged.iter().any(|t| t.id == template.id) {
                merged.push(template.clone());
            }
        }
        merged
    }

    fn next_template_id(&self, now: Timestamp) -> String {
        let sequence = self.user_templates().len() + 1;
        format!("user-{}-{sequence}", now.as_millisecond())
    }

    /// Creates a user template and returns its id.
    ///
    /// The template is always kept in memory; a persistence failure is only
    /// logged.
    pub fn add_new_template(&mut self, data: NewTemplate) -> Option<String> {
        let now = Timestamp::now();
        let id = self.next_template_id(now);

        let mut template_data = data.template_data;
        template_data.process_steps.normalize_order();

        let template = Template {
            id: id.clone(),
            name: data.name,
            description: data.description,
            categories: data.categories,
            cover_image: data.cover_image,
            created_by: data.created_by,
            created_at: now,
            template_data,
            is_system: false,
        };

        if let Err(e) = self.persist_template(&template) {
            warn!("Template {id} kept in memory only, persisting failed: {e}");
        } else {
            info!("Template {id} '{}' saved", template.name);
        }
        self.user_templates.push(template);
        Some(id)
    }

    /// System and user templates, newest first.
    pub fn get_all_templates(&self) -> Vec<Template> {
        let mut templates = self.system_templates.clone();
        templates.extend(self.user_templates());
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        templates
    }

    pub fn get_template_by_id(&self, id: &str) -> Option<Template> {
        self.get_all_templates().into_iter().find(|t| t.id == id)
    }

    /// Templates tagged with `category`, newest first.
    pub fn get_templates_by_category(&self, category: Category) -> Vec<Template> {
        self.get_all_templates()
            .into_iter()
            .filter(|t| t.has_category(category))
            .collect()
    }
}
