//! Pure chunking engine: document text in, ordered chunk texts out. No I/O.

pub mod legal;
pub mod sized;

pub const DEFAULT_SEPARATOR: &str = "\n\n";
pub const DEFAULT_CHUNK_SIZE: usize = 512;
pub const DEFAULT_CHUNK_OVERLAP: usize = 128;

/// Default separator ladder for the recursive splitter: paragraph break,
/// line break, word break, then character level.
pub fn default_recursive_separators() -> Vec<String> {
    vec![
        "\n\n".to_string(),
        "\n".to_string(),
        " ".to_string(),
        String::new(),
    ]
}

/// One of the four interchangeable splitting strategies.
///
/// Strategy selection and cross-field validation (separator shape,
/// `chunk_overlap < chunk_size`) happen at the request boundary; by the time
/// a strategy is constructed its configuration is coherent.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitStrategy {
    /// Verbatim split on a literal separator; empty fragments are kept.
    Separator { separator: String },
    /// Literal-separator split merged toward a size bound with overlap.
    Character {
        separator: String,
        chunk_size: usize,
        chunk_overlap: usize,
    },
    /// Ordered separator candidates tried most- to least-specific; emitted
    /// chunks never contain a configured separator verbatim.
    RecursiveCharacter {
        separators: Vec<String>,
        chunk_size: usize,
        chunk_overlap: usize,
    },
    /// Structural parser for chapter/article legal documents; no size bound.
    Legal,
}

impl SplitStrategy {
    /// Wire tag used in requests and per-file status records.
    pub fn name(&self) -> &'static str {
        match self {
            SplitStrategy::Separator { .. } => "SeparatorTextSplitter",
            SplitStrategy::Character { .. } => "CharacterTextSplitter",
            SplitStrategy::RecursiveCharacter { .. } => "RecursiveCharacterTextSplitter",
            SplitStrategy::Legal => "LegalTextSplitter",
        }
    }

    /// Split `text` into an ordered sequence of chunk texts.
    ///
    /// Empty input yields an empty sequence for every strategy.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        match self {
            SplitStrategy::Separator { separator } => text
                .split(separator.as_str())
                .map(|s| s.to_string())
                .collect(),
            SplitStrategy::Character {
                separator,
                chunk_size,
                chunk_overlap,
            } => sized::character_split(text, separator, *chunk_size, *chunk_overlap),
            SplitStrategy::RecursiveCharacter {
                separators,
                chunk_size,
                chunk_overlap,
            } => sized::recursive_character_split(text, separators, *chunk_size, *chunk_overlap),
            SplitStrategy::Legal => legal::legal_split(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_chunks_for_all_strategies() {
        let strategies = [
            SplitStrategy::Separator {
                separator: "\n".to_string(),
            },
            SplitStrategy::Character {
                separator: "\n".to_string(),
                chunk_size: 100,
                chunk_overlap: 20,
            },
            SplitStrategy::RecursiveCharacter {
                separators: default_recursive_separators(),
                chunk_size: 100,
                chunk_overlap: 20,
            },
            SplitStrategy::Legal,
        ];

        for strategy in strategies {
            assert!(strategy.split("").is_empty(), "{} not empty", strategy.name());
        }
    }

    #[test]
    fn test_separator_split_keeps_empty_fragments() {
        let strategy = SplitStrategy::Separator {
            separator: "--".to_string(),
        };
        let chunks = strategy.split("a----b--");

        // Callers filter empties if they want them gone.
        assert_eq!(chunks, vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_separator_split_is_verbatim() {
        let strategy = SplitStrategy::Separator {
            separator: "\n".to_string(),
        };
        assert_eq!(
            strategy.split("first \nsecond"),
            vec!["first ".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_wire_tags() {
        assert_eq!(
            SplitStrategy::Legal.name(),
            "LegalTextSplitter"
        );
        assert_eq!(
            SplitStrategy::Separator {
                separator: String::new()
            }
            .name(),
            "SeparatorTextSplitter"
        );
    }
}
