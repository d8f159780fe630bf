//! Filter types for browsing activities and templates.

use crate::catalog::{ActivityStatus, Category};

use super::Activity;

/// Filter options for listing activities.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Case-insensitive substring match over title, description and location
    pub query: Option<String>,

    /// Activity must carry this category (primary or not)
    pub category: Option<Category>,

    pub status: Option<ActivityStatus>,

    /// Only activities owned by this user id
    pub created_by: Option<String>,
}

impl ActivityFilter {
    /// Filter matching a single category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wuyu_core::{catalog::Category, models::ActivityFilter};
    ///
    /// let filter = ActivityFilter::for_category(Category::PhysicalHealth);
    /// assert_eq!(filter.category, Some(Category::PhysicalHealth));
    /// assert!(filter.query.is_none());
    /// ```
    pub fn for_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Default::default()
        }
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        if let Some(category) = self.category {
            if !activity.categories.contains(&category) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if activity.status != status {
                return false;
            }
        }
        if let Some(owner) = &self.created_by {
            if &activity.created_by != owner {
                return false;
            }
        }
        match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                let needle = query.to_lowercase();
                [&activity.title, &activity.description, &activity.location]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }
}
