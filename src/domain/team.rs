use serde::{Deserialize, Serialize};

/// A team profile as submitted at ingestion, stored verbatim.
///
/// The `id` is assigned once by the repository when the team is created and
/// survives updates. `email` and `documents` are optional on the wire and
/// default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTeam {
    pub id: String,
    pub team_name: String,
    pub full_name: String,
    pub manager_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl RawTeam {
    /// Whether the manager and the owner are the same person, compared
    /// case-insensitively. Derived metadata; not part of [`ProcessedTeam`].
    pub fn manager_is_owner(&self) -> bool {
        self.manager_name.to_lowercase() == self.full_name.to_lowercase()
    }
}

/// Ingestion payload for creating or updating a team. The repository assigns
/// the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeam {
    pub team_name: String,
    pub full_name: String,
    pub manager_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Derived team record: extracted entity labels plus the profile embedding.
///
/// For a fixed lexicon and embedding model this is a pure function of the
/// [`RawTeam`] it was derived from. Label vectors are deduplicated and
/// lexicographically sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedTeam {
    pub id: String,
    pub team_name: String,
    pub owner: String,
    pub manager: String,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub work_areas: Vec<String>,
    pub embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::RawTeam;

    fn team(full_name: &str, manager_name: &str) -> RawTeam {
        RawTeam {
            id: "t1".to_string(),
            team_name: "Alpha".to_string(),
            full_name: full_name.to_string(),
            manager_name: manager_name.to_string(),
            email: String::new(),
            documents: vec![],
        }
    }

    #[test]
    fn manager_is_owner_compares_case_insensitively() {
        assert!(team("Jane Doe", "jane doe").manager_is_owner());
        assert!(!team("Jane Doe", "John Roe").manager_is_owner());
    }
}
