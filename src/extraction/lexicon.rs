use std::collections::BTreeMap;

use serde::Deserialize;

/// Keyword tables driving entity extraction: each category maps a label to
/// the literal trigger phrases that produce it.
///
/// The tables are configuration, not logic: adding a label means adding a
/// table row. Triggers are matched as substrings of the lower-cased,
/// whitespace-normalized input, so boundedness for short triggers is encoded
/// in the trigger itself (`" c "` rather than `"c"`). `BTreeMap` keeps
/// iteration deterministic.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub skills: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub tools: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub work_areas: BTreeMap<String, Vec<String>>,
}

impl Lexicon {
    /// Load a lexicon from a YAML file with `skills`/`tools`/`work_areas`
    /// top-level tables.
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::new(path, config::FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    pub fn has_skill(&self, label: &str) -> bool {
        self.skills.contains_key(label)
    }

    pub fn has_tool(&self, label: &str) -> bool {
        self.tools.contains_key(label)
    }

    pub fn has_work_area(&self, label: &str) -> bool {
        self.work_areas.contains_key(label)
    }
}

impl Default for Lexicon {
    /// Built-in table used when no lexicon file is configured.
    fn default() -> Self {
        fn table(rows: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
            rows.iter()
                .map(|(label, triggers)| {
                    (
                        label.to_string(),
                        triggers.iter().map(|t| t.to_string()).collect(),
                    )
                })
                .collect()
        }

        Self {
            skills: table(&[
                ("c", &[" c ", " c,"]),
                ("c++", &["c++"]),
                ("embedded", &["embedded"]),
                ("javascript", &["javascript"]),
                ("linux", &["linux"]),
                ("python", &["python"]),
                ("rust", &[" rust "]),
                ("sql", &["sql"]),
            ]),
            tools: table(&[
                ("docker", &["docker"]),
                ("git", &[" git ", "github", "gitlab"]),
                ("icd", &["icd"]),
                ("jira", &["jira"]),
                ("kubernetes", &["kubernetes", "k8s"]),
            ]),
            work_areas: table(&[
                ("devops", &["devops", "ci/cd"]),
                ("firmware", &["firmware"]),
                ("machine learning", &["machine learning", "deep learning"]),
                ("networking", &["networking", "tcp/ip"]),
                ("web development", &["frontend", "backend", "website"]),
            ]),
        }
    }
}
