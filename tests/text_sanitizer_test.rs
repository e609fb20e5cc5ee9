use bangmod::infrastructure::text_processing::sanitize_page_text;

#[test]
fn given_fragments_split_across_lines_when_sanitizing_then_whitespace_collapses_to_single_spaces() {
    let raw = "ระบบ  จัดการ\nเอกสาร\t\tออนไลน์";

    assert_eq!(sanitize_page_text(raw), "ระบบ จัดการ เอกสาร ออนไลน์");
}

#[test]
fn given_surrounding_whitespace_when_sanitizing_then_it_is_trimmed() {
    assert_eq!(sanitize_page_text("\n  hello world  \n"), "hello world");
}

#[test]
fn given_compatibility_characters_when_sanitizing_then_nfkc_normalizes_them() {
    // Ligature fi and a fullwidth capital A.
    assert_eq!(sanitize_page_text("ﬁle Ａbstract"), "file Abstract");
}

#[test]
fn given_empty_input_when_sanitizing_then_result_is_empty() {
    assert_eq!(sanitize_page_text(""), "");
}

#[test]
fn given_whitespace_only_input_when_sanitizing_then_result_is_empty() {
    assert_eq!(sanitize_page_text(" \n\t \r\n "), "");
}
