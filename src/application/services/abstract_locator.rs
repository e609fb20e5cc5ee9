use crate::domain::Page;

/// Heading keywords that mark the abstract page, matched case-insensitively
/// by substring: the Thai term, the English word, and its letter-spaced
/// variant as it appears in some title pages.
pub const ABSTRACT_KEYWORDS: [&str; 3] = ["บทคัดย่อ", "abstract", "a b s t r a c t"];

/// An abstract spans at most this many pages, heading page included.
const ABSTRACT_WINDOW: usize = 3;

/// Locates the abstract within a page sequence.
///
/// Returns 0-based page indices, strictly increasing. The first page whose
/// text contains any keyword wins; that page plus up to the next two are
/// selected, clamped at document end. Only the first match is used, so a
/// later keyword mention in a bibliography cannot shift the window. With no
/// match anywhere, the leading `min(3, len)` pages are returned.
pub fn locate_abstract(pages: &[Page]) -> Vec<usize> {
    for (index, page) in pages.iter().enumerate() {
        let haystack = page.text.to_lowercase();
        if ABSTRACT_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
            let end = (index + ABSTRACT_WINDOW).min(pages.len());
            return (index..end).collect();
        }
    }

    (0..pages.len().min(ABSTRACT_WINDOW)).collect()
}
