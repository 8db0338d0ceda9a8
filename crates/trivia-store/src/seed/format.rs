//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed import

use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Categories to create or relabel
    #[serde(default)]
    pub categories: Vec<SeedCategory>,

    /// Questions to insert
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// Category definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCategory {
    /// Category id (stable across imports)
    pub id: i64,

    /// Display label
    #[serde(rename = "type")]
    pub kind: String,
}

/// Question definition in seed
///
/// Ids are not part of the seed; the store assigns them on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedQuestion {
    pub question: String,
    pub answer: String,

    /// Category reference (integer or string in YAML, stored as text)
    #[serde(deserialize_with = "deserialize_category")]
    pub category: String,

    pub difficulty: i64,
}

/// Custom deserializer accepting `category: 1` as well as `category: "1"`
fn deserialize_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct CategoryVisitor;

    impl<'de> Visitor<'de> for CategoryVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a category id as integer or string")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(CategoryVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_seed() {
        let yaml = r#"
schema_version: 0
categories:
  - id: 1
    type: Science
questions:
  - question: "What is H2O?"
    answer: Water
    category: 1
    difficulty: 1
"#;
        let seed: SeedV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(seed.categories[0].kind, "Science");
        assert_eq!(seed.questions[0].category, "1");
    }

    #[test]
    fn test_string_category_reference() {
        let yaml = r#"
schema_version: 0
questions:
  - question: Q
    answer: A
    category: "4"
    difficulty: 2
"#;
        let seed: SeedV0 = serde_yaml::from_str(yaml).unwrap();
        assert!(seed.categories.is_empty());
        assert_eq!(seed.questions[0].category, "4");
    }
}
