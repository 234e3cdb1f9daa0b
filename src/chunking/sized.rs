//! Size-bounded splitting: a literal-separator splitter and a recursive
//! multi-separator splitter, both merging fragments toward a target chunk
//! size while keeping a fixed overlap of trailing context between
//! consecutive chunks.

use std::collections::VecDeque;

/// Split on a literal separator, then merge fragments back together up to
/// `chunk_size` characters, carrying `chunk_overlap` characters of trailing
/// context into the next chunk.
pub fn character_split(
    text: &str,
    separator: &str,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let splits: Vec<&str> = text.split(separator).filter(|s| !s.is_empty()).collect();
    merge_splits(&splits, separator, chunk_size, chunk_overlap)
}

/// Split using an ordered list of candidate separators, most specific first.
///
/// The first separator present in the text is used; fragments still larger
/// than `chunk_size` are re-split with the remaining candidates. After
/// splitting, every configured separator is replaced by a single space inside
/// each chunk, so no chunk retains a raw separator token.
pub fn recursive_character_split(
    text: &str,
    separators: &[String],
    chunk_size: usize,
    chunk_overlap: usize,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    split_recursive(text, separators, chunk_size, chunk_overlap)
        .iter()
        .map(|chunk| scrub_separators(chunk, separators))
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

fn split_recursive(
    text: &str,
    separators: &[String],
    chunk_size: usize,
    chunk_overlap: usize,
) -> Vec<String> {
    // Pick the first separator that actually occurs in the text; the empty
    // separator (character-level split) always applies.
    let mut separator = separators.last().cloned().unwrap_or_default();
    let mut remaining: &[String] = &[];
    for (i, candidate) in separators.iter().enumerate() {
        if candidate.is_empty() || text.contains(candidate.as_str()) {
            separator = candidate.clone();
            remaining = &separators[i + 1..];
            break;
        }
    }

    let splits: Vec<String> = if separator.is_empty() {
        text.chars().map(|c| c.to_string()).collect()
    } else {
        text.split(separator.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    };

    let mut chunks = Vec::new();
    let mut good: Vec<String> = Vec::new();

    for piece in splits {
        if piece.chars().count() < chunk_size {
            good.push(piece);
            continue;
        }

        if !good.is_empty() {
            let refs: Vec<&str> = good.iter().map(String::as_str).collect();
            chunks.extend(merge_splits(&refs, &separator, chunk_size, chunk_overlap));
            good.clear();
        }

        if remaining.is_empty() {
            chunks.push(piece);
        } else {
            chunks.extend(split_recursive(&piece, remaining, chunk_size, chunk_overlap));
        }
    }

    if !good.is_empty() {
        let refs: Vec<&str> = good.iter().map(String::as_str).collect();
        chunks.extend(merge_splits(&refs, &separator, chunk_size, chunk_overlap));
    }

    chunks
}

/// Replace every configured separator inside a chunk with a single space.
fn scrub_separators(chunk: &str, separators: &[String]) -> String {
    let mut scrubbed = chunk.to_string();
    for separator in separators {
        if separator.is_empty() {
            continue;
        }
        scrubbed = scrubbed.replace(separator.as_str(), " ");
    }
    scrubbed.trim().to_string()
}

/// Greedily pack fragments into chunks of at most `chunk_size` characters
/// (counting joining separators), then drop fragments off the front until at
/// most `chunk_overlap` characters remain as carried-over context.
///
/// A single fragment longer than `chunk_size` is emitted as its own chunk;
/// size control for such fragments belongs to the recursive splitter.
fn merge_splits(
    splits: &[&str],
    separator: &str,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Vec<String> {
    let separator_len = separator.chars().count();

    let mut chunks = Vec::new();
    let mut current: VecDeque<&str> = VecDeque::new();
    let mut total = 0usize;

    for piece in splits {
        let piece_len = piece.chars().count();
        let join_len = if current.is_empty() { 0 } else { separator_len };

        if total + piece_len + join_len > chunk_size && !current.is_empty() {
            if let Some(chunk) = join_pieces(&current, separator) {
                chunks.push(chunk);
            }
            // Shed leading fragments until the retained context fits both the
            // overlap budget and the room needed for the incoming piece.
            while !current.is_empty()
                && (total > chunk_overlap
                    || (total + piece_len + separator_len > chunk_size && total > 0))
            {
                let trailing_join = if current.len() > 1 { separator_len } else { 0 };
                let dropped = current.pop_front().unwrap_or_default();
                total = total.saturating_sub(dropped.chars().count() + trailing_join);
            }
        }

        current.push_back(piece);
        total += piece_len + if current.len() > 1 { separator_len } else { 0 };
    }

    if let Some(chunk) = join_pieces(&current, separator) {
        chunks.push(chunk);
    }

    chunks
}

fn join_pieces(pieces: &VecDeque<&str>, separator: &str) -> Option<String> {
    let joined = pieces
        .iter()
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
        .trim()
        .to_string();
    if joined.is_empty() { None } else { Some(joined) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_split_empty_input() {
        assert!(character_split("", "\n", 100, 20).is_empty());
    }

    #[test]
    fn test_character_split_respects_size_bound() {
        let text = "alpha\nbravo\ncharlie\ndelta\necho\nfoxtrot\ngolf\nhotel";
        let chunks = character_split(text, "\n", 20, 5);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            // One separator length of tolerance over the target size.
            assert!(chunk.chars().count() <= 21, "oversized chunk: {:?}", chunk);
        }
    }

    #[test]
    fn test_character_split_preserves_content_order() {
        let text = "one\ntwo\nthree\nfour";
        let chunks = character_split(text, "\n", 9, 3);

        let merged = chunks.join("\n");
        for word in ["one", "two", "three", "four"] {
            assert!(merged.contains(word));
        }
        let one = merged.find("one").unwrap();
        let four = merged.rfind("four").unwrap();
        assert!(one < four);
    }

    #[test]
    fn test_character_split_carries_overlap() {
        let text = "aaaa\nbbbb\ncccc\ndddd";
        let chunks = character_split(text, "\n", 10, 5);

        // Consecutive chunks must share the declared trailing context.
        assert!(chunks.len() >= 2);
        for pair in chunks.windows(2) {
            let prev_tail: String = pair[0]
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            assert!(
                pair[1].contains(&prev_tail),
                "expected {:?} to carry {:?}",
                pair[1],
                prev_tail
            );
        }
    }

    #[test]
    fn test_character_split_single_small_text() {
        let chunks = character_split("short text", "\n", 100, 10);
        assert_eq!(chunks, vec!["short text".to_string()]);
    }

    #[test]
    fn test_recursive_split_empty_input() {
        let separators = vec!["\n\n".to_string(), "\n".to_string(), " ".to_string()];
        assert!(recursive_character_split("", &separators, 50, 10).is_empty());
    }

    #[test]
    fn test_recursive_split_never_emits_separators() {
        let separators = vec!["\n\n".to_string(), "\n".to_string()];
        let text = "first paragraph\nwith a line break\n\nsecond paragraph\n\nthird one here";
        let chunks = recursive_character_split(&text, &separators, 40, 5);

        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(!chunk.contains("\n\n"), "raw separator in {:?}", chunk);
            assert!(!chunk.contains('\n'), "raw separator in {:?}", chunk);
        }
    }

    #[test]
    fn test_recursive_split_prefers_most_specific_separator() {
        let separators = vec!["\n\n".to_string(), "\n".to_string(), " ".to_string()];
        let text = "para one line one\npara one line two\n\npara two is here";
        let chunks = recursive_character_split(&text, &separators, 40, 0);

        // Paragraph break wins before line break, so paragraph contents stay
        // together while the paragraphs separate.
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].contains("para one line one"));
        assert!(chunks[1].contains("para two"));
    }

    #[test]
    fn test_recursive_split_falls_through_to_finer_separators() {
        let separators = vec!["\n\n".to_string(), " ".to_string()];
        let text = "word ".repeat(30);
        let chunks = recursive_character_split(&text, &separators, 25, 0);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 26, "oversized chunk: {:?}", chunk);
        }
    }

    #[test]
    fn test_merge_splits_oversized_fragment_passes_through() {
        let splits = vec!["tiny", "this fragment is far too large for the bound", "tiny2"];
        let chunks = merge_splits(&splits, " ", 10, 0);
        assert!(
            chunks
                .iter()
                .any(|c| c.contains("far too large"))
        );
    }
}
