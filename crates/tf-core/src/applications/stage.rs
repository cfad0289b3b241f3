use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Review stage of one application. Display strings match what the
/// recruiter dashboard renders ("Resume Screening" with a space).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum Stage {
    /// Canonical initial stage for every newly submitted application.
    Submitted,
    #[serde(rename = "Resume Screening")]
    #[strum(serialize = "Resume Screening")]
    ResumeScreening,
    Interview,
    Hired,
    Rejected,
}

/// The full set of legal stage edges, checked centrally in
/// `advance_stage`. Forward progression plus rejection from any
/// non-terminal stage; nothing leaves `Hired` or `Rejected`.
pub const LEGAL_TRANSITIONS: &[(Stage, Stage)] = &[
    (Stage::Submitted, Stage::ResumeScreening),
    (Stage::ResumeScreening, Stage::Interview),
    (Stage::Interview, Stage::Hired),
    (Stage::Submitted, Stage::Rejected),
    (Stage::ResumeScreening, Stage::Rejected),
    (Stage::Interview, Stage::Rejected),
];

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Hired | Stage::Rejected)
    }

    pub fn can_advance_to(self, target: Stage) -> bool {
        LEGAL_TRANSITIONS.contains(&(self, target))
    }
}
