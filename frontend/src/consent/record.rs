use serde::{Deserialize, Serialize};
use std::fmt;

/// The persisted cookie decision. Always written as a whole.
///
/// Missing boolean fields in a stored payload read as `false`, the same way
/// an absent flag counts as "not granted".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsentRecord {
    #[serde(default)]
    pub all: bool,
    #[serde(default)]
    pub stat: bool,
    #[serde(default)]
    pub mkt: bool,
    #[serde(default)]
    pub ts: i64,
}

impl ConsentRecord {
    pub fn accept_all(ts: i64) -> Self {
        Self { all: true, stat: true, mkt: true, ts }
    }

    pub fn deny_all(ts: i64) -> Self {
        Self { all: false, stat: false, mkt: false, ts }
    }

    /// A hand-picked selection from the preferences modal. Never sets `all`,
    /// even when both categories are checked.
    pub fn custom(stat: bool, mkt: bool, ts: i64) -> Self {
        Self { all: false, stat, mkt, ts }
    }

    pub fn allows(&self, category: Category) -> bool {
        match category {
            Category::Statistics => self.stat,
            Category::Marketing => self.mkt,
        }
    }
}

/// Optional data-processing purposes. "Necessary" is always on and has no
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Statistics,
    Marketing,
}

impl Category {
    /// Display order in labels and in the preferences table.
    pub const ALL: [Category; 2] = [Category::Statistics, Category::Marketing];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Statistics => "Statistik",
            Category::Marketing => "Marketing",
        }
    }
}

/// Human-readable consent status shown in the cookies section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsentLabel {
    NoDecision,
    AllAccepted,
    Custom(Vec<Category>),
    NecessaryOnly,
}

impl ConsentLabel {
    /// `all` is checked before the individual categories: it records that the
    /// accept-all shortcut was used, so a manual selection of both categories
    /// still reads as custom.
    pub fn from_record(record: Option<&ConsentRecord>) -> Self {
        let Some(record) = record else {
            return ConsentLabel::NoDecision;
        };
        if record.all {
            return ConsentLabel::AllAccepted;
        }
        let enabled: Vec<Category> = Category::ALL
            .iter()
            .copied()
            .filter(|c| record.allows(*c))
            .collect();
        if enabled.is_empty() {
            ConsentLabel::NecessaryOnly
        } else {
            ConsentLabel::Custom(enabled)
        }
    }
}

impl fmt::Display for ConsentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsentLabel::NoDecision => write!(f, "keine Entscheidung"),
            ConsentLabel::AllAccepted => write!(f, "Alle akzeptiert"),
            ConsentLabel::Custom(categories) => {
                let names: Vec<&str> = categories.iter().map(|c| c.display_name()).collect();
                write!(f, "Benutzerdefiniert ({})", names.join(", "))
            }
            ConsentLabel::NecessaryOnly => write!(f, "Nur notwendig"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(record: ConsentRecord) -> String {
        ConsentLabel::from_record(Some(&record)).to_string()
    }

    #[test]
    fn accept_all_reads_all_accepted() {
        assert_eq!(label(ConsentRecord::accept_all(1_700_000_000_000)), "Alle akzeptiert");
    }

    #[test]
    fn single_categories_are_named_alone() {
        assert_eq!(label(ConsentRecord::custom(true, false, 1)), "Benutzerdefiniert (Statistik)");
        assert_eq!(label(ConsentRecord::custom(false, true, 1)), "Benutzerdefiniert (Marketing)");
    }

    #[test]
    fn both_categories_without_all_flag_stay_custom() {
        assert_eq!(
            label(ConsentRecord::custom(true, true, 1)),
            "Benutzerdefiniert (Statistik, Marketing)"
        );
    }

    #[test]
    fn nothing_enabled_is_necessary_only() {
        assert_eq!(label(ConsentRecord::deny_all(1)), "Nur notwendig");
    }

    #[test]
    fn missing_record_is_no_decision() {
        assert_eq!(ConsentLabel::from_record(None).to_string(), "keine Entscheidung");
    }

    #[test]
    fn serializes_with_the_four_stored_fields() {
        let json = serde_json::to_value(ConsentRecord::custom(true, false, 42)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"all": false, "stat": true, "mkt": false, "ts": 42})
        );
    }

    #[test]
    fn absent_flags_deserialize_as_false() {
        let record: ConsentRecord = serde_json::from_str(r#"{"stat": true}"#).unwrap();
        assert_eq!(record, ConsentRecord::custom(true, false, 0));
    }
}
