//! Process step model definition and per-kind payloads.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of step kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Content,
    Checkin,
    Video,
    Questionnaire,
    Task,
}

impl StepKind {
    pub const ALL: [StepKind; 5] = [
        StepKind::Content,
        StepKind::Checkin,
        StepKind::Video,
        StepKind::Questionnaire,
        StepKind::Task,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Content => "content",
            StepKind::Checkin => "checkin",
            StepKind::Video => "video",
            StepKind::Questionnaire => "questionnaire",
            StepKind::Task => "task",
        }
    }

    /// Human-readable label, also used to build default step titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            StepKind::Content => "内容",
            StepKind::Checkin => "签到",
            StepKind::Video => "视频",
            StepKind::Questionnaire => "问卷",
            StepKind::Task => "任务",
        }
    }
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "content" => Ok(StepKind::Content),
            "checkin" | "check-in" => Ok(StepKind::Checkin),
            "video" => Ok(StepKind::Video),
            "questionnaire" | "survey" => Ok(StepKind::Questionnaire),
            "task" => Ok(StepKind::Task),
            _ => Err(format!("Invalid step type: {s}")),
        }
    }
}

/// Reference to an uploaded file. Uploading itself happens elsewhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

impl Attachment {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentStep {
    /// Rich-text body (HTML or markdown, stored verbatim)
    pub body: String,
    pub images: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckinStep {
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VideoStep {
    pub video: Option<Attachment>,
    pub description: String,
}

/// Answer shape of a questionnaire question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Single,
    Multiple,
    Text,
}

impl QuestionKind {
    /// Choice questions need at least one option to be answerable.
    pub fn needs_options(&self) -> bool {
        matches!(self, QuestionKind::Single | QuestionKind::Multiple)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Question {
    pub id: String,
    pub kind: QuestionKind,
    pub title: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuestionnaireStep {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

/// What a participant hands in for a task step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Video,
    Audio,
    #[default]
    Text,
    Document,
}

impl FromStr for SubmissionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" => Ok(SubmissionKind::Video),
            "audio" => Ok(SubmissionKind::Audio),
            "text" => Ok(SubmissionKind::Text),
            "document" | "doc" => Ok(SubmissionKind::Document),
            _ => Err(format!("Invalid submission kind: {s}")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskStep {
    pub title: String,
    pub submission_kind: SubmissionKind,
    pub requirements: String,
    pub images: Vec<Attachment>,
}

/// Type-specific payload of a step, tagged by `type` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepPayload {
    Content(ContentStep),
    Checkin(CheckinStep),
    Video(VideoStep),
    Questionnaire(QuestionnaireStep),
    Task(TaskStep),
}

impl StepPayload {
    /// Empty payload of the requested kind.
    pub fn empty(kind: StepKind) -> Self {
        match kind {
            StepKind::Content => StepPayload::Content(ContentStep::default()),
            StepKind::Checkin => StepPayload::Checkin(CheckinStep::default()),
            StepKind::Video => StepPayload::Video(VideoStep::default()),
            StepKind::Questionnaire => StepPayload::Questionnaire(QuestionnaireStep::default()),
            StepKind::Task => StepPayload::Task(TaskStep::default()),
        }
    }

    pub fn kind(&self) -> StepKind {
        match self {
            StepPayload::Content(_) => StepKind::Content,
            StepPayload::Checkin(_) => StepKind::Checkin,
            StepPayload::Video(_) => StepKind::Video,
            StepPayload::Questionnaire(_) => StepKind::Questionnaire,
            StepPayload::Task(_) => StepKind::Task,
        }
    }
}

/// One ordered stage of an activity's or template's run-of-show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessStep {
    /// Unique within the owning list
    pub id: String,

    pub title: String,

    /// Zero-based position, kept equal to the index in the owning list
    #[serde(default)]
    pub order: u32,

    pub payload: StepPayload,
}

impl ProcessStep {
    pub fn kind(&self) -> StepKind {
        self.payload.kind()
    }
}

/// Partial update for a step. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct StepPatch {
    pub title: Option<String>,
    pub payload: Option<StepPayload>,
}

impl StepPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            payload: None,
        }
    }
}
