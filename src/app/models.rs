use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Represents the final configuration after merging the settings file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub verbose: bool,
    pub dry_run: bool,
    pub debug: bool,
    pub output_dir: PathBuf,
    pub difficulty: Difficulty,
    pub rounds: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            dry_run: false,
            debug: false,
            output_dir: PathBuf::from("./output"),
            difficulty: Difficulty::default(),
            rounds: 3,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// One item found by the inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEntry {
    /// `size` is only recorded when the inspected target is the file itself.
    File { name: String, size: Option<u64> },
    Dir { name: String },
}

/// Renders the descriptor: a fixed-width kind tag, the name, and the size if known.
impl fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingEntry::File {
                name,
                size: Some(size),
            } => write!(f, "FILE {} ({} bytes)", name, size),
            ListingEntry::File { name, size: None } => write!(f, "FILE {}", name),
            ListingEntry::Dir { name } => write!(f, "DIR  {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ListingEntry::File { name: "notes.txt".into(), size: Some(42) }, "FILE notes.txt (42 bytes)")]
    #[case(ListingEntry::File { name: "a.txt".into(), size: None }, "FILE a.txt")]
    #[case(ListingEntry::Dir { name: "sub".into() }, "DIR  sub")]
    #[case(ListingEntry::File { name: "empty".into(), size: Some(0) }, "FILE empty (0 bytes)")]
    fn descriptors_use_a_four_character_kind_tag(
        #[case] entry: ListingEntry,
        #[case] expected: &str,
    ) {
        assert_eq!(entry.to_string(), expected);
    }

    #[test]
    fn defaults_match_the_documented_placeholders() {
        let config = RuntimeConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.rounds, 3);
        assert!(!config.verbose && !config.dry_run && !config.debug);
    }
}
