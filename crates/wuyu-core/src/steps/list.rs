//! Ordered step list with order normalisation.

use std::ops::Deref;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WuyuError},
    models::{ProcessStep, StepKind, StepPatch, StepPayload},
};

const STEP_ID_PREFIX: &str = "step-";
const GENERIC_CHECKIN_TITLE: &str = "活动签到";

/// Direction for [`StepList::move_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// The ordered steps of an activity, template or draft.
///
/// Every mutation leaves `order == index` for every element. Lists read from
/// serialized data are normalised on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<ProcessStep>", into = "Vec<ProcessStep>")]
pub struct StepList(Vec<ProcessStep>);

impl From<Vec<ProcessStep>> for StepList {
    fn from(steps: Vec<ProcessStep>) -> Self {
        let mut list = Self(steps);
        list.normalize_order();
        list
    }
}

impl From<StepList> for Vec<ProcessStep> {
    fn from(list: StepList) -> Self {
        list.0
    }
}

impl Deref for StepList {
    type Target = [ProcessStep];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a StepList {
    type Item = &'a ProcessStep;
    type IntoIter = std::slice::Iter<'a, ProcessStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Default title for a freshly created step.
///
/// Check-in steps are named after the activity when its title is known.
///
/// # Examples
///
/// ```rust
/// use wuyu_core::{models::StepKind, steps::default_step_title};
///
/// assert_eq!(default_step_title(StepKind::Video, None), "新建视频");
/// assert_eq!(default_step_title(StepKind::Checkin, Some("运动会")), "运动会签到");
/// ```
pub fn default_step_title(kind: StepKind, activity_title: Option<&str>) -> String {
    match kind {
        StepKind::Checkin => match activity_title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => format!("{title}{}", StepKind::Checkin.display_name()),
            None => GENERIC_CHECKIN_TITLE.to_string(),
        },
        other => format!("新建{}", other.display_name()),
    }
}

impl StepList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&ProcessStep> {
        self.0.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|s| s.id == id)
    }

    /// Next free step id, one past the highest numeric `step-N` id in use.
    pub fn next_id(&self) -> String {
        let highest = self
            .0
            .iter()
            .filter_map(|s| s.id.strip_prefix(STEP_ID_PREFIX))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next = highest.max(self.0.len() as u64) + 1;
        format!("{STEP_ID_PREFIX}{next}")
    }

    /// Builds a step with the default payload for `kind` without inserting it.
    pub fn new_step(&self, kind: StepKind, activity_title: Option<&str>) -> ProcessStep {
        ProcessStep {
            id: self.next_id(),
            title: default_step_title(kind, activity_title),
            order: self.0.len() as u32,
            payload: StepPayload::empty(kind),
        }
    }

    /// Appends a default step of `kind` and returns it.
    pub fn add_step(&mut self, kind: StepKind, activity_title: Option<&str>) -> &ProcessStep {
        let step = self.new_step(kind, activity_title);
        self.push(step)
    }

    /// Appends an already built step at the end of the list. A step whose id
    /// is already taken gets a fresh one.
    pub fn push(&mut self, mut step: ProcessStep) -> &ProcessStep {
        if self.get(&step.id).is_some() {
            step.id = self.next_id();
        }
        self.0.push(step);
        self.normalize_order();
        let last = self.0.len() - 1;
        &self.0[last]
    }

    /// Swaps the step with its neighbour. Returns `false` when the step is
    /// unknown or already at the boundary.
    pub fn move_step(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.0.len() => index + 1,
            _ => {
                debug!("Step {id} already at boundary, not moved");
                return false;
            }
        };
        self.0.swap(index, target);
        self.normalize_order();
        true
    }

    pub fn delete_step(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.0.remove(index);
        self.normalize_order();
        true
    }

    /// Shallow-merges `patch` into the identified step.
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::StepNotFound` if no step has this id and
    /// `WuyuError::InvalidInput` if the patch would change the step kind.
    pub fn update_step(&mut self, id: &str, patch: StepPatch) -> Result<()> {
        let step = self
            .0
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| WuyuError::StepNotFound { id: id.to_string() })?;

        if let Some(payload) = &patch.payload {
            if payload.kind() != step.kind() {
                return Err(WuyuError::invalid_input("payload").with_reason(format!(
                    "cannot change step type from {} to {}",
                    step.kind().as_str(),
                    payload.kind().as_str()
                )));
            }
        }

        if let Some(title) = patch.title {
            step.title = title;
        }
        if let Some(payload) = patch.payload {
            step.payload = payload;
        }
        Ok(())
    }

    /// Replaces the step with the same id, keeping its position.
    pub fn replace(&mut self, step: ProcessStep) -> bool {
        match self.position(&step.id) {
            Some(index) => {
                self.0[index] = step;
                self.normalize_order();
                true
            }
            None => false,
        }
    }

    /// Rewrites every `order` to match the current index.
    pub fn normalize_order(&mut self) {
        for (index, step) in self.0.iter_mut().enumerate() {
            step.order = index as u32;
        }
    }

    /// True when `order` matches position for every step.
    pub fn is_normalized(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(index, step)| step.order as usize == index)
    }
}
