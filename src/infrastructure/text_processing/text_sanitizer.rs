use unicode_normalization::UnicodeNormalization;

/// Normalizes one page of extracted text: NFKC normalization, then every
/// run of whitespace collapsed to a single space. Extraction yields text
/// fragments in whatever order the PDF content stream provides; joining
/// them with single spaces keeps heading keywords matchable without
/// re-deriving reading order.
pub fn sanitize_page_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();

    let mut result = String::with_capacity(normalized.len());
    let mut prev_was_space = false;

    for ch in normalized.chars() {
        if ch.is_whitespace() {
            if !prev_was_space && !result.is_empty() {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }

    if result.ends_with(' ') {
        result.pop();
    }

    result
}
