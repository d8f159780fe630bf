//! Wizard phases and their scroll-anchor sections.

use std::str::FromStr;

/// Which authoring flow the wizard runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Activity,
    Template,
}

impl FlowKind {
    /// Phases of the flow, in navigation order.
    pub fn phases(&self) -> &'static [Phase] {
        match self {
            FlowKind::Activity => &[
                Phase::BasicSettings,
                Phase::ActivityProcess,
                Phase::Participants,
            ],
            FlowKind::Template => &[Phase::BasicSettings, Phase::ActivityProcess, Phase::Preview],
        }
    }
}

/// A top-level wizard phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    BasicSettings,
    ActivityProcess,
    Participants,
    Preview,
}

/// A sub-section inside a phase. Used for scroll anchoring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub anchor: &'static str,
    pub title: &'static str,
}

const fn section(anchor: &'static str, title: &'static str) -> Section {
    Section { anchor, title }
}

static BASIC_SETTINGS_SECTIONS: [Section; 4] = [
    section("basic-info", "基本信息"),
    section("time-location", "时间地点"),
    section("categories", "活动分类"),
    section("observation-points", "观测点"),
];

static ACTIVITY_PROCESS_SECTIONS: [Section; 2] = [
    section("process-steps", "流程步骤"),
    section("step-editor", "步骤编辑"),
];

static PARTICIPANTS_SECTIONS: [Section; 3] = [
    section("participant-scope", "参与范围"),
    section("registration", "报名设置"),
    section("plan-binding", "关联计划"),
];

static PREVIEW_SECTIONS: [Section; 2] = [
    section("template-info", "模板信息"),
    section("template-preview", "模板预览"),
];

impl Phase {
    pub fn key(&self) -> &'static str {
        match self {
            Phase::BasicSettings => "basic-settings",
            Phase::ActivityProcess => "activity-process",
            Phase::Participants => "participants",
            Phase::Preview => "preview",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Phase::BasicSettings => "基本设置",
            Phase::ActivityProcess => "活动流程",
            Phase::Participants => "参与人员",
            Phase::Preview => "预览",
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        match self {
            Phase::BasicSettings => &BASIC_SETTINGS_SECTIONS,
            Phase::ActivityProcess => &ACTIVITY_PROCESS_SECTIONS,
            Phase::Participants => &PARTICIPANTS_SECTIONS,
            Phase::Preview => &PREVIEW_SECTIONS,
        }
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "basic-settings" | "basic" => Ok(Phase::BasicSettings),
            "activity-process" | "process" => Ok(Phase::ActivityProcess),
            "participants" => Ok(Phase::Participants),
            "preview" => Ok(Phase::Preview),
            _ => Err(format!("Invalid phase: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_flow_swaps_participants_for_preview() {
        let activity: Vec<&str> = FlowKind::Activity.phases().iter().map(Phase::key).collect();
        assert_eq!(
            activity,
            vec!["basic-settings", "activity-process", "participants"]
        );

        let template: Vec<&str> = FlowKind::Template.phases().iter().map(Phase::key).collect();
        assert_eq!(template, vec!["basic-settings", "activity-process", "preview"]);
    }

    #[test]
    fn test_section_anchors_are_unique() {
        let mut anchors: Vec<&str> = [
            Phase::BasicSettings,
            Phase::ActivityProcess,
            Phase::Participants,
            Phase::Preview,
        ]
        .iter()
        .flat_map(|p| p.sections().iter().map(|s| s.anchor))
        .collect();
        let total = anchors.len();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), total);
    }

    #[test]
    fn test_phase_parse() {
        assert_eq!("process".parse::<Phase>(), Ok(Phase::ActivityProcess));
        assert_eq!("BASIC_SETTINGS".parse::<Phase>(), Ok(Phase::BasicSettings));
        assert!("review".parse::<Phase>().is_err());
    }
}
