use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Option id -> number of votes received
pub type TallyMap = HashMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    pub description: String,
}

// A single recorded choice. Stored in the log as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vote(pub String);

impl Vote {
    pub fn new(option_id: impl Into<String>) -> Self {
        Self(option_id.into())
    }

    pub fn option_id(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vote {
    fn from(option_id: &str) -> Self {
        Self::new(option_id)
    }
}

/// An option merged with its vote count, in the order exports print it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsEntry {
    pub id: String,
    pub description: String,
    pub count: u64,
}

impl StatisticsEntry {
    pub fn new(option: &PollOption, count: u64) -> Self {
        Self {
            id: option.id.clone(),
            description: option.description.clone(),
            count,
        }
    }

    // Field name/value pairs in declaration order, used by the text renderers
    pub fn fields(&self) -> [(&'static str, String); 3] {
        [
            ("id", self.id.clone()),
            ("description", self.description.clone()),
            ("count", self.count.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_serializes_as_bare_string() {
        let votes = vec![Vote::from("cats"), Vote::from("dogs")];
        let json = serde_json::to_string(&votes).unwrap();
        assert_eq!(json, r#"["cats","dogs"]"#);

        let parsed: Vec<Vote> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, votes);
    }

    #[test]
    fn option_requires_id_and_description() {
        let missing = serde_json::from_str::<PollOption>(r#"{"id":"cats"}"#);
        assert!(missing.is_err());

        let extra: PollOption =
            serde_json::from_str(r#"{"id":"cats","description":"Cats","color":"grey"}"#).unwrap();
        assert_eq!(extra.description, "Cats");
    }

    #[test]
    fn entry_fields_follow_declaration_order() {
        let option = PollOption {
            id: "a".to_string(),
            description: "Opt A".to_string(),
        };
        let entry = StatisticsEntry::new(&option, 3);
        let names: Vec<&str> = entry.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["id", "description", "count"]);
        assert_eq!(entry.fields()[2].1, "3");
    }
}
