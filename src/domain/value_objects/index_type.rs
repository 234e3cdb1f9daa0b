use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Approximate nearest-neighbor index structure for a collection.
///
/// Fixed at collection creation and immutable afterwards. Index and search
/// hyperparameters are deployment constants selected per variant, never
/// caller-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexType {
    #[serde(rename = "IVF_FLAT")]
    IvfFlat,
    #[serde(rename = "HNSW")]
    Hnsw,
}

impl IndexType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexType::IvfFlat => "IVF_FLAT",
            IndexType::Hnsw => "HNSW",
        }
    }

    /// Index construction parameters for the vector field.
    pub fn index_params(&self) -> Value {
        match self {
            IndexType::IvfFlat => json!({ "nlist": 128 }),
            IndexType::Hnsw => json!({ "M": 64, "efConstruction": 64 }),
        }
    }

    /// Query-time parameters matching the index structure.
    pub fn search_params(&self) -> Value {
        match self {
            IndexType::IvfFlat => json!({ "nprobe": 32 }),
            IndexType::Hnsw => json!({ "ef": 64 }),
        }
    }
}

impl Default for IndexType {
    fn default() -> Self {
        IndexType::IvfFlat
    }
}

impl std::fmt::Display for IndexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&IndexType::IvfFlat).unwrap(),
            "\"IVF_FLAT\""
        );
        assert_eq!(serde_json::to_string(&IndexType::Hnsw).unwrap(), "\"HNSW\"");

        let parsed: IndexType = serde_json::from_str("\"HNSW\"").unwrap();
        assert_eq!(parsed, IndexType::Hnsw);
    }

    #[test]
    fn test_params_match_index_structure() {
        assert_eq!(IndexType::IvfFlat.index_params()["nlist"], 128);
        assert_eq!(IndexType::IvfFlat.search_params()["nprobe"], 32);
        assert_eq!(IndexType::Hnsw.index_params()["M"], 64);
        assert_eq!(IndexType::Hnsw.search_params()["ef"], 64);
    }
}
