use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as LopdfDocument, Object, Stream};

use bangmod::application::ports::{PageExtractor, PageExtractorError};
use bangmod::domain::{ContentType, Document};
use bangmod::infrastructure::text_processing::PdfPageExtractor;

fn document(filename: &str, len: usize) -> Document {
    Document::new(filename.to_string(), ContentType::Pdf, len as u64)
}

/// Builds a small PDF in memory, one page per entry in `page_texts`. An
/// empty entry produces a page with no text operations.
fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = LopdfDocument::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize test PDF");
    buffer
}

#[tokio::test]
async fn given_single_page_pdf_when_extracting_then_text_and_numbering_are_returned() {
    let extractor = PdfPageExtractor::new();
    let bytes = build_pdf(&["Hello World!"]);

    let pages = extractor
        .extract_pages(&bytes, &document("hello.pdf", bytes.len()))
        .await
        .unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 1);
    assert!(pages[0].text.contains("Hello World!"));
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_pages_are_ordered_and_contiguous() {
    let extractor = PdfPageExtractor::new();
    let bytes = build_pdf(&["page one text", "page two text", "page three text"]);

    let pages = extractor
        .extract_pages(&bytes, &document("three.pdf", bytes.len()))
        .await
        .unwrap();

    assert_eq!(pages.len(), 3);
    let numbers: Vec<_> = pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(pages[0].text.contains("page one"));
    assert!(pages[2].text.contains("page three"));
}

#[tokio::test]
async fn given_page_without_text_when_extracting_then_page_is_kept_with_empty_text() {
    let extractor = PdfPageExtractor::new();
    let bytes = build_pdf(&["has text", ""]);

    let pages = extractor
        .extract_pages(&bytes, &document("partial.pdf", bytes.len()))
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].number, 2);
    assert_eq!(pages[1].text, "");
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_then_whole_document_fails() {
    let extractor = PdfPageExtractor::new();
    let garbage = b"not a pdf at all";

    let result = extractor
        .extract_pages(garbage, &document("broken.pdf", garbage.len()))
        .await;

    assert!(matches!(result, Err(PageExtractorError::InvalidDocument(_))));
}
