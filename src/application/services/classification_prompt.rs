use crate::domain::Page;

/// Character budget for the classification input. Text beyond this is
/// dropped with no word-boundary handling.
pub const MAX_INPUT_CHARS: usize = 6000;

/// Fixed system instruction, identical for every document. Only the user
/// content varies per request.
pub const CLASSIFICATION_SYSTEM_PROMPT: &str = "\
You are a classifier for university senior-project and thesis documents. \
You will be given text extracted from the abstract pages of one document, \
in Thai or English. Assign the project to exactly one of these categories:

- Web-application: websites, web portals, browser-based systems, web services and their backends.
- Mobile-application: applications built for Android, iOS, or cross-platform mobile frameworks.
- Hardware/IoT & Network: embedded systems, microcontrollers, sensors, robotics, smart devices, and computer-network infrastructure.
- Digital Image Processing: image analysis, computer vision, object detection or recognition, and other work whose core input is images or video.
- Other: any project that does not fit the categories above.

If a project spans several areas, pick the category of its main deliverable. \
Answer with the category name only, exactly as written above, with no \
explanation.";

/// Builds the user content for a classification request: the selected
/// pages' texts joined in index order with a blank line between pages,
/// truncated to `MAX_INPUT_CHARS` characters.
pub fn build_classification_input(pages: &[Page], selection: &[usize]) -> String {
    let joined = selection
        .iter()
        .filter_map(|&index| pages.get(index))
        .map(|page| page.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    if joined.chars().count() <= MAX_INPUT_CHARS {
        return joined;
    }

    joined.chars().take(MAX_INPUT_CHARS).collect()
}
