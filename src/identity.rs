use serde::{Deserialize, Serialize};

/// The (creator, title, year) tuple that seeds a pattern.
///
/// Never persisted by this crate; the offline renderer deserializes a
/// list of these from its manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub creator: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
}

impl Identity {
    pub fn new(
        creator: impl Into<String>,
        title: impl Into<String>,
        year: Option<&str>,
    ) -> Self {
        Self {
            creator: creator.into(),
            title: title.into(),
            year: year.map(str::to_string),
        }
    }

    /// Canonical key string: fields joined by `::`, a missing year
    /// replaced by the literal `unknown`. This exact string feeds the
    /// hasher and prefixes the cache key.
    pub fn key(&self) -> String {
        format!(
            "{}::{}::{}",
            self.creator,
            self.title,
            self.year.as_deref().unwrap_or("unknown")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_fields_with_fixed_delimiter() {
        let id = Identity::new("DJ Dan", "Housing Project", Some("1992"));
        assert_eq!(id.key(), "DJ Dan::Housing Project::1992");
    }

    #[test]
    fn missing_year_substitutes_unknown() {
        let id = Identity::new("DJ Dan", "Housing Project", None);
        assert_eq!(id.key(), "DJ Dan::Housing Project::unknown");
    }

    #[test]
    fn manifest_record_without_year_deserializes() {
        let id: Identity =
            serde_json::from_str(r#"{"creator":"DJ Dan","title":"Housing Project"}"#)
                .expect("manifest record should parse");
        assert_eq!(id.year, None);
    }
}
