use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

pub mod lexicon;

pub use lexicon::Lexicon;

/// Labels extracted from a piece of free text, one set per category.
///
/// Sets keep the labels deduplicated and lexicographically ordered so the
/// output is reproducible and diff-friendly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedEntities {
    pub skills: BTreeSet<String>,
    pub tools: BTreeSet<String>,
    pub work_areas: BTreeSet<String>,
}

/// Rule-based keyword tagger over an immutable [`Lexicon`].
pub struct EntityExtractor {
    lexicon: Lexicon,
    whitespace: Regex,
}

impl EntityExtractor {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Tag `text` against the lexicon. A label is included when any of its
    /// trigger phrases occurs as a substring of the normalized input.
    ///
    /// Never fails: empty input or input without matches yields empty sets.
    pub fn extract(&self, text: &str) -> ExtractedEntities {
        let mut entities = ExtractedEntities::default();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return entities;
        }

        // Lower-case, collapse whitespace runs and pad with one space on each
        // side so space-bounded triggers also match at the ends of the text.
        let haystack = format!(
            " {} ",
            self.whitespace.replace_all(&trimmed.to_lowercase(), " ")
        );

        collect_labels(&self.lexicon.skills, &haystack, &mut entities.skills);
        collect_labels(&self.lexicon.tools, &haystack, &mut entities.tools);
        collect_labels(&self.lexicon.work_areas, &haystack, &mut entities.work_areas);

        entities
    }
}

fn collect_labels(
    table: &BTreeMap<String, Vec<String>>,
    haystack: &str,
    into: &mut BTreeSet<String>,
) {
    for (label, triggers) in table {
        if triggers
            .iter()
            .any(|trigger| !trigger.is_empty() && haystack.contains(trigger.as_str()))
        {
            into.insert(label.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityExtractor, Lexicon};

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(Lexicon::default())
    }

    #[test]
    fn extract_of_empty_text_yields_empty_sets() {
        let entities = extractor().extract("");
        assert!(entities.skills.is_empty());
        assert!(entities.tools.is_empty());
        assert!(entities.work_areas.is_empty());

        let entities = extractor().extract("   \n\t ");
        assert!(entities.skills.is_empty());
    }

    #[test]
    fn extract_tags_skills_and_work_areas() {
        let entities = extractor().extract("Alpha | Jane Doe | linux embedded c firmware");

        let skills: Vec<&str> = entities.skills.iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["c", "embedded", "linux"]);
        assert!(entities.work_areas.contains("firmware"));
    }

    #[test]
    fn bounded_trigger_does_not_match_inside_words() {
        let entities = extractor().extract("economic circus");
        assert!(!entities.skills.contains("c"));
    }

    #[test]
    fn unbounded_trigger_matches_inside_words() {
        let entities = extractor().extract("stuck on icd3 debugging");
        assert!(entities.tools.contains("icd"));
        assert!(entities.skills.is_empty());
    }

    #[test]
    fn labels_are_deduplicated_across_triggers() {
        let entities = extractor().extract("we host on github and gitlab");
        assert_eq!(entities.tools.iter().filter(|l| *l == "git").count(), 1);
    }
}
