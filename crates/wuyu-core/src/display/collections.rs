//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items with the compact summary layout and prints
//! a short notice instead of nothing when the collection is empty.

use std::{fmt, ops::Index};

use crate::{
    catalog::ObservationPoint,
    models::{Activity, CategoryPlan, Template},
};

/// Newtype wrapper for displaying a list of activities.
///
/// # Examples
///
/// ```rust
/// use wuyu_core::{display::Activities, StoreBuilder};
///
/// let store = StoreBuilder::new().in_memory().build().unwrap();
/// let activities = Activities(store.activities().to_vec());
/// assert!(activities.to_string().contains("(ID: 1)"));
/// ```
pub struct Activities(pub Vec<Activity>);

impl Activities {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }
}

impl Index<usize> for Activities {
    type Output = Activity;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Activities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No activities found.");
        }
        for activity in &self.0 {
            activity.fmt_summary(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of templates.
pub struct Templates(pub Vec<Template>);

impl Templates {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Templates {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No templates found.");
        }
        for template in &self.0 {
            template.fmt_summary(f)?;
        }
        Ok(())
    }
}

/// The plans of one semester, headed by the semester key.
pub struct SemesterView {
    pub semester: String,
    pub plans: Vec<CategoryPlan>,
}

impl fmt::Display for SemesterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Semester {}", self.semester)?;
        writeln!(f)?;
        if self.plans.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in &self.plans {
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}

/// Observation points grouped under their category headings.
pub struct ObservationPoints(pub Vec<&'static ObservationPoint>);

impl fmt::Display for ObservationPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No observation points found.");
        }
        let mut current = None;
        for point in &self.0 {
            if current != Some(point.category) {
                if current.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "## {} {}", point.category.glyph(), point.category)?;
                writeln!(f)?;
                current = Some(point.category);
            }
            write!(f, "{point}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog, catalog::Category, models::Direction};

    #[test]
    fn test_empty_collections() {
        assert_eq!(Activities(vec![]).to_string(), "No activities found.\n");
        assert_eq!(Templates(vec![]).to_string(), "No templates found.\n");
        assert_eq!(
            ObservationPoints(vec![]).to_string(),
            "No observation points found.\n"
        );
    }

    #[test]
    fn test_semester_view_lists_directions() {
        let view = SemesterView {
            semester: "2024-2025-2".to_string(),
            plans: vec![CategoryPlan {
                category: Category::PhysicalHealth,
                title: "Spring PE".to_string(),
                directions: vec![Direction::new("Track", "Running events")],
            }],
        };
        let output = view.to_string();
        assert!(output.starts_with("# Semester 2024-2025-2"));
        assert!(output.contains("## 体 Spring PE (身心健康)"));
        assert!(output.contains("### Track"));
        assert!(output.contains("- (no activities)"));
    }

    #[test]
    fn test_observation_points_grouped_by_category() {
        let points = ObservationPoints(catalog::observation_points().iter().collect());
        let output = points.to_string();
        assert_eq!(output.matches("## ").count(), 5);
        assert!(output.contains("**M01**"));
    }
}
