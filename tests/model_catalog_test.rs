use bangmod::application::services::{ModelCatalog, ModelProfile};

#[test]
fn given_no_logical_name_when_resolving_then_default_profile_is_returned() {
    let catalog = ModelCatalog::builtin();

    let profile = catalog.resolve(None);

    assert_eq!(profile.id, "openai/gpt-4o-mini");
}

#[test]
fn given_unknown_logical_name_when_resolving_then_default_profile_is_returned() {
    let catalog = ModelCatalog::builtin();

    let profile = catalog.resolve(Some("does-not-exist"));

    assert_eq!(profile.id, "openai/gpt-4o-mini");
}

#[test]
fn given_known_logical_name_when_resolving_then_that_profile_is_returned() {
    let catalog = ModelCatalog::builtin();

    let profile = catalog.resolve(Some("typhoon"));

    assert_eq!(profile.id, "scb10x/llama3.1-typhoon2-70b-instruct");
    assert_eq!(profile.label, "Typhoon 2 70B");
}

#[test]
fn given_inserted_entry_when_resolving_then_catalog_is_extended_without_code_change() {
    let mut catalog = ModelCatalog::builtin();
    catalog.insert(
        "claude",
        ModelProfile {
            id: "anthropic/claude-3.5-haiku".to_string(),
            label: "Claude 3.5 Haiku".to_string(),
            temperature: 0.1,
        },
    );

    let profile = catalog.resolve(Some("claude"));

    assert_eq!(profile.id, "anthropic/claude-3.5-haiku");
}
