use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::applications::Application;
use crate::experience::{normalize_experience, ExperienceInput, ExperienceYears};

/// Categorical experience buckets the recruiter dashboard filters on.
/// `EnumString` also accepts the filter values the UI sends ("0-2",
/// "2plus") alongside the canonical names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExperienceBand {
    All,
    Freshers,
    #[strum(serialize = "junior", serialize = "0-2")]
    Junior,
    #[strum(serialize = "senior", serialize = "2plus")]
    Senior,
}

impl ExperienceBand {
    /// Band membership. `Unknown` experience matches only `All`: a
    /// candidate who declared nothing is not a fresher, and zero is a
    /// declared value, not a default.
    pub fn contains(self, experience: ExperienceYears) -> bool {
        match self {
            ExperienceBand::All => true,
            ExperienceBand::Freshers => experience == ExperienceYears::Known(0),
            ExperienceBand::Junior => matches!(experience, ExperienceYears::Known(y) if y > 0 && y <= 2),
            ExperienceBand::Senior => matches!(experience, ExperienceYears::Known(y) if y > 2),
        }
    }
}

/// Filters applications by the candidate's experience band.
///
/// `experience_of` resolves an application's candidate id to the RAW
/// experience representation; normalization happens here, at filter time,
/// so upstream profile edits are always reflected instead of serving a
/// cached derivation. Unresolvable candidates count as `Unknown`.
pub fn filter_by_experience_band<'a, F>(
    applications: &'a [Application],
    band: ExperienceBand,
    experience_of: F,
) -> Vec<&'a Application>
where
    F: Fn(&str) -> Option<ExperienceInput>,
{
    applications
        .iter()
        .filter(|app| {
            let raw = experience_of(&app.candidate_id).unwrap_or(ExperienceInput::Absent);
            band.contains(normalize_experience(&raw))
        })
        .collect()
}
