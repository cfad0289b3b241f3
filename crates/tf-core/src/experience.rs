use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Experience value as it arrives from the upstream profile feed.
///
/// The feed has historically stored this field in four different shapes
/// (bare integer, free text, a list of either, or nothing at all), so the
/// boundary models all four explicitly instead of inspecting JSON at call
/// sites. `Absent` deserializes from `null` and is the `default` for a
/// missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceInput {
    Years(i64),
    Text(String),
    Many(Vec<ExperienceEntry>),
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceEntry {
    Years(i64),
    Text(String),
}

impl Default for ExperienceInput {
    fn default() -> Self {
        ExperienceInput::Absent
    }
}

/// Canonical experience value. `Unknown` is distinct from `Known(0)`:
/// a fresher has declared zero years, an `Unknown` candidate has declared
/// nothing usable, and only display contexts may collapse the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceYears {
    Known(u32),
    Unknown,
}

impl ExperienceYears {
    pub fn as_years(self) -> Option<u32> {
        match self {
            ExperienceYears::Known(years) => Some(years),
            ExperienceYears::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, ExperienceYears::Unknown)
    }

    /// Display-only fallback: the dashboard renders unknown experience as
    /// `0 years`. Never use this for band filtering.
    pub fn display_years(self) -> u32 {
        self.as_years().unwrap_or(0)
    }
}

/// Normalizes any accepted experience shape into [`ExperienceYears`].
///
/// Total over its input: malformed text ("senior", "N/A"), an empty list,
/// a negative integer, or an absent value all degrade to `Unknown` rather
/// than erroring, because profile data quality is assumed poor and must
/// not abort a ranking pass.
///
/// List inputs consult the FIRST element only, matching the upstream
/// dashboard's "first entry wins" policy. That policy discards later
/// entries on purpose; do not "fix" it here without product sign-off.
///
/// Strings with several digit runs ("2018-2021") take the first run.
/// Known-ambiguous, kept as documented behavior.
pub fn normalize_experience(input: &ExperienceInput) -> ExperienceYears {
    match input {
        ExperienceInput::Absent => ExperienceYears::Unknown,
        ExperienceInput::Years(years) => years_from_int(*years),
        ExperienceInput::Text(text) => years_from_text(text),
        ExperienceInput::Many(entries) => match entries.first() {
            Some(ExperienceEntry::Years(years)) => years_from_int(*years),
            Some(ExperienceEntry::Text(text)) => years_from_text(text),
            None => ExperienceYears::Unknown,
        },
    }
}

fn years_from_int(years: i64) -> ExperienceYears {
    u32::try_from(years)
        .map(ExperienceYears::Known)
        .unwrap_or(ExperienceYears::Unknown)
}

fn years_from_text(text: &str) -> ExperienceYears {
    RE_DIGIT_RUN
        .find(text)
        // A digit run too long for u32 is garbage, not a year count.
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(ExperienceYears::Known)
        .unwrap_or(ExperienceYears::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ExperienceInput {
        ExperienceInput::Text(s.to_string())
    }

    #[test]
    fn parses_embedded_digit_runs() {
        assert_eq!(normalize_experience(&text("2 years")), ExperienceYears::Known(2));
        assert_eq!(normalize_experience(&text("5+ yrs")), ExperienceYears::Known(5));
        assert_eq!(normalize_experience(&text("  3  ")), ExperienceYears::Known(3));
    }

    #[test]
    fn first_digit_run_wins_within_a_string() {
        assert_eq!(
            normalize_experience(&text("2018-2021")),
            ExperienceYears::Known(2018)
        );
    }

    #[test]
    fn malformed_text_degrades_to_unknown() {
        assert_eq!(normalize_experience(&text("senior")), ExperienceYears::Unknown);
        assert_eq!(normalize_experience(&text("N/A")), ExperienceYears::Unknown);
        assert_eq!(normalize_experience(&text("")), ExperienceYears::Unknown);
    }

    #[test]
    fn first_list_entry_wins() {
        let input = ExperienceInput::Many(vec![
            ExperienceEntry::Text("2 years".into()),
            ExperienceEntry::Text("5 years".into()),
        ]);
        assert_eq!(normalize_experience(&input), ExperienceYears::Known(2));

        let input = ExperienceInput::Many(vec![
            ExperienceEntry::Years(4),
            ExperienceEntry::Text("10 years".into()),
        ]);
        assert_eq!(normalize_experience(&input), ExperienceYears::Known(4));
    }

    #[test]
    fn empty_list_and_absent_are_unknown() {
        assert_eq!(
            normalize_experience(&ExperienceInput::Many(vec![])),
            ExperienceYears::Unknown
        );
        assert_eq!(
            normalize_experience(&ExperienceInput::Absent),
            ExperienceYears::Unknown
        );
    }

    #[test]
    fn negative_and_overflowing_values_are_unknown() {
        assert_eq!(
            normalize_experience(&ExperienceInput::Years(-1)),
            ExperienceYears::Unknown
        );
        assert_eq!(
            normalize_experience(&text("99999999999999999999 years")),
            ExperienceYears::Unknown
        );
    }

    #[test]
    fn idempotent_on_already_canonical_integers() {
        for years in [0_i64, 1, 2, 30] {
            let first = normalize_experience(&ExperienceInput::Years(years));
            let roundtrip = normalize_experience(&ExperienceInput::Years(
                first.as_years().unwrap() as i64,
            ));
            assert_eq!(first, roundtrip);
        }
    }

    #[test]
    fn unknown_is_not_zero_but_displays_as_zero() {
        let unknown = normalize_experience(&ExperienceInput::Absent);
        assert_ne!(unknown, ExperienceYears::Known(0));
        assert_eq!(unknown.display_years(), 0);
    }

    #[test]
    fn deserializes_all_four_feed_shapes() {
        let from_int: ExperienceInput = serde_json::from_str("3").unwrap();
        assert_eq!(from_int, ExperienceInput::Years(3));

        let from_str: ExperienceInput = serde_json::from_str(r#""2 years""#).unwrap();
        assert_eq!(from_str, text("2 years"));

        let from_list: ExperienceInput = serde_json::from_str(r#"["2 years", 5]"#).unwrap();
        assert_eq!(
            from_list,
            ExperienceInput::Many(vec![
                ExperienceEntry::Text("2 years".into()),
                ExperienceEntry::Years(5),
            ])
        );

        let from_null: ExperienceInput = serde_json::from_str("null").unwrap();
        assert_eq!(from_null, ExperienceInput::Absent);
    }
}
