//! Two-pass structural splitter for hierarchical legal documents.
//!
//! Documents are organised as `CHAPTER <roman> <UPPERCASE TITLE>` headers
//! containing numbered `Article <n>` headers. Chunk boundaries follow that
//! structure; there is no size bound.

use regex::Regex;
use std::sync::OnceLock;

fn footer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Trailing continuation lines from tables of contents and page footers
    // end in a run of spaced dots or an ellipsis glyph.
    RE.get_or_init(|| Regex::new(r"[^\n]+?(?:\.\s*\.\s*\.\s*|\u{2026})").unwrap())
}

fn chapter_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Titles may wrap across lines. A continuation line must carry at least
    // two title characters so a capitalised body line ("Introductory ...")
    // does not get pulled into the header.
    RE.get_or_init(|| {
        Regex::new(r"CHAPTER [IVXLCDM]+[ \t\n]+[A-Z][A-Z ,'\-]*(?:\n[A-Z][A-Z ,'\-]+)*").unwrap()
    })
}

fn article_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{1,2}Article \d+[ \t]*\n{1,2}").unwrap())
}

/// Split a legal document into structural chunks.
///
/// Pass 1 cuts the document into chapter segments, keeping any non-empty text
/// before the first chapter header as its own leading segment. Pass 2 cuts
/// each chapter-bearing segment on article headers: non-empty pre-article
/// content stays as its own sub-chunk, later sub-chunks are prefixed with
/// their article header, and any sub-chunk that lost the chapter header in
/// the split gets it re-prepended. Segments without a chapter header pass
/// through unchanged.
pub fn legal_split(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let cleaned = footer_re().replace_all(text, "");
    let segments = split_chapters(&cleaned);

    let mut chunks = Vec::new();
    for segment in &segments {
        match chapter_header_re().find(segment) {
            Some(header) => {
                let chapter_header = header.as_str().trim();
                chunks.extend(split_articles(segment, chapter_header));
            }
            None => chunks.push(segment.clone()),
        }
    }
    chunks
}

fn split_chapters(text: &str) -> Vec<String> {
    let headers: Vec<_> = chapter_header_re().find_iter(text).collect();

    let lead_end = headers.first().map_or(text.len(), |m| m.start());
    let lead = text[..lead_end].trim();

    let mut segments = Vec::new();
    if !lead.is_empty() {
        segments.push(lead.to_string());
    }

    for (i, header) in headers.iter().enumerate() {
        let body_end = headers.get(i + 1).map_or(text.len(), |m| m.start());
        let body = text[header.end()..body_end].trim();
        segments.push(format!("{}\n{}", header.as_str().trim(), body));
    }

    segments
}

fn split_articles(segment: &str, chapter_header: &str) -> Vec<String> {
    let headers: Vec<String> = article_header_re()
        .find_iter(segment)
        .map(|m| m.as_str().trim().to_string())
        .collect();
    let pieces: Vec<&str> = article_header_re().split(segment).collect();

    let mut chunks = Vec::new();
    for (i, piece) in pieces.iter().enumerate() {
        let content = piece.trim();
        if i == 0 && content.is_empty() {
            continue;
        }

        let mut chunk = if i == 0 {
            content.to_string()
        } else {
            format!("{}\n{}", headers[i - 1], content)
        };

        if !chapter_header_re().is_match(&chunk) {
            chunk = format!("{}\n{}", chapter_header, chunk);
        }

        chunks.push(chunk);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
Preamble considerations of the issuing authority.

CHAPTER I
GENERAL PROVISIONS
Introductory notes for the first chapter.

Article 1
Definitions used throughout this regulation.

Article 2
Scope of application.

Article 3
Entry into force of transitional measures.

CHAPTER II
CLOSING PROVISIONS
Residual matters not covered elsewhere.
";

    #[test]
    fn test_empty_input() {
        assert!(legal_split("").is_empty());
    }

    #[test]
    fn test_no_structure_passes_through() {
        let chunks = legal_split("plain text without any headers");
        assert_eq!(chunks, vec!["plain text without any headers".to_string()]);
    }

    #[test]
    fn test_chunk_count_two_chapters_three_articles() {
        let chunks = legal_split(DOCUMENT);

        // Preamble + chapter 1 pre-article content + 3 articles + chapter 2.
        assert_eq!(chunks.len(), 6);
        assert!(chunks[0].starts_with("Preamble"));
        assert!(chunks[5].starts_with("CHAPTER II"));
        assert!(chunks[5].contains("Residual matters"));
    }

    #[test]
    fn test_chapter_one_chunks_keep_chapter_header() {
        let chunks = legal_split(DOCUMENT);

        for chunk in &chunks[1..5] {
            assert!(
                chunk.starts_with("CHAPTER I\nGENERAL PROVISIONS"),
                "missing chapter header: {:?}",
                chunk
            );
        }
        assert!(chunks[2].contains("Article 1"));
        assert!(chunks[3].contains("Article 2"));
        assert!(chunks[4].contains("Article 3"));
        assert!(chunks[2].contains("Definitions"));
    }

    #[test]
    fn test_article_order_follows_document_order() {
        let chunks = legal_split(DOCUMENT);
        let a1 = chunks.iter().position(|c| c.contains("Article 1")).unwrap();
        let a2 = chunks.iter().position(|c| c.contains("Article 2")).unwrap();
        let a3 = chunks.iter().position(|c| c.contains("Article 3")).unwrap();
        assert!(a1 < a2 && a2 < a3);
    }

    #[test]
    fn test_no_preamble_omits_leading_segment() {
        let text = DOCUMENT
            .trim_start_matches("Preamble considerations of the issuing authority.")
            .trim_start();
        let chunks = legal_split(text);

        assert_eq!(chunks.len(), 5);
        assert!(chunks[0].starts_with("CHAPTER I"));
    }

    #[test]
    fn test_footer_continuation_lines_are_stripped() {
        let text = "CHAPTER I\nGENERAL PROVISIONS\nBody text.\nContents entry . . . \nMore body.";
        let chunks = legal_split(text);

        let merged = chunks.join("\n");
        assert!(!merged.contains("Contents entry"));
        assert!(merged.contains("Body text."));
        assert!(merged.contains("More body."));
    }

    #[test]
    fn test_multi_line_chapter_title_is_kept_whole() {
        let text = "\
CHAPTER I
GENERAL
PROVISIONS
Intro text.

Article 1
Definitions.
";
        let chunks = legal_split(text);

        assert_eq!(chunks.len(), 2);
        for chunk in &chunks {
            assert!(
                chunk.starts_with("CHAPTER I\nGENERAL\nPROVISIONS"),
                "truncated chapter title: {:?}",
                chunk
            );
        }
        assert!(chunks[1].contains("Article 1"));
    }

    #[test]
    fn test_chapter_without_articles_is_one_chunk() {
        let text = "CHAPTER I\nGENERAL PROVISIONS\nOnly prose in this chapter.";
        let chunks = legal_split(text);

        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].starts_with("CHAPTER I"));
        assert!(chunks[0].contains("Only prose"));
    }
}
