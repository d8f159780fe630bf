//! Semester plan operations and the plan/activity projection.

use log::{debug, info, warn};

use super::{SemesterPlans, Store};
use crate::{
    catalog::{Category, PlanItemStatus},
    models::{ActivityRef, CategoryPlan},
    params::NewPlan,
};

impl Store {
    /// Known semester keys in ascending order.
    pub fn semesters(&self) -> Vec<&str> {
        self.plans.keys().map(String::as_str).collect()
    }

    /// Stored plan skeletons of a semester, in category order.
    ///
    /// Activity lists here are whatever was stored with the plan; use
    /// [`Store::get_plans_with_actual_activities`] for the live view.
    pub fn get_plans(&self, semester: &str) -> Vec<&CategoryPlan> {
        self.plans
            .get(semester)
            .map(|plans| plans.values().collect())
            .unwrap_or_default()
    }

    /// Inserts (or replaces) the plan of `plan_data.category` in the target
    /// semester. Every listed activity reference is reset to `Planned`.
    ///
    /// Returns `false` when the plan has no title.
    pub fn add_new_plan(&mut self, plan_data: NewPlan) -> bool {
        if plan_data.title.trim().is_empty() {
            warn!("Rejected plan for {} without title", plan_data.category.key());
            return false;
        }

        let semester = plan_data
            .semester
            .unwrap_or_else(|| self.current_semester.clone());

        let mut directions = plan_data.directions;
        for activity in directions.iter_mut().flat_map(|d| d.activities.iter_mut()) {
            activity.status = PlanItemStatus::Planned;
        }

        let plan = CategoryPlan {
            category: plan_data.category,
            title: plan_data.title,
            directions,
        };

        let semester_plans: &mut SemesterPlans = self.plans.entry(semester.clone()).or_default();
        if semester_plans.insert(plan.category, plan).is_some() {
            info!(
                "Replaced {} plan in semester {semester}",
                plan_data.category.key()
            );
        } else {
            info!("Added {} plan to semester {semester}", plan_data.category.key());
        }
        true
    }

    /// Removes the plan of `category` from `semester`.
    pub fn delete_plan(&mut self, semester: &str, category: Category) -> bool {
        let removed = self
            .plans
            .get_mut(semester)
            .and_then(|plans| plans.remove(&category))
            .is_some();
        if removed {
            info!("Deleted {} plan from semester {semester}", category.key());
        } else {
            warn!(
                "Cannot delete {} plan from semester {semester}: not found",
                category.key()
            );
        }
        removed
    }

    /// Plans of `semester` with each direction listing the activities that
    /// currently belong to it.
    ///
    /// An activity belongs to a direction when its primary category equals
    /// the plan category and its `activity_direction` equals the direction
    /// name. The view is rebuilt on every call and never cached. An unknown
    /// semester yields an empty list.
    pub fn get_plans_with_actual_activities(&self, semester: &str) -> Vec<CategoryPlan> {
        let Some(skeleton) = self.plans.get(semester) else {
            debug!("No plans for semester {semester}");
            return Vec::new();
        };

        let mut plans: Vec<CategoryPlan> = skeleton.values().cloned().collect();
        for direction in plans.iter_mut().flat_map(|p| p.directions.iter_mut()) {
            direction.activities.clear();
        }

        let mut placed = 0usize;
        for activity in &self.activities {
            let Some(category) = activity.primary_category() else {
                continue;
            };
            let direction = plans
                .iter_mut()
                .filter(|plan| plan.category == category)
                .flat_map(|plan| plan.directions.iter_mut())
                .find(|direction| direction.name == activity.activity_direction);

            if let Some(direction) = direction {
                direction.activities.push(ActivityRef {
                    id: activity.id.clone(),
                    name: activity.title.clone(),
                    status: activity.status.into(),
                });
                placed += 1;
            }
        }

        debug!(
            "Projected {placed} of {} activities onto semester {semester}",
            self.activities.len()
        );
        plans
    }
}
