use glossa_core::choice::OTHER_OPTION;
use glossa_core::form::{FormEvent, FormMode, TermForm, TextField};
use glossa_core::listing::{ListingEffect, ListingEvent, ListingState};
use glossa_core::taxonomy::{Dimension, decode_collection};
use glossa_shared::{CategoryDto, LanguageDto, TermDto, TermStatus, ThemeDto};
use serde_json::json;

fn term(text: &str, definition: &str, category: &str) -> TermDto {
    TermDto {
        id: text.to_lowercase(),
        term: text.to_string(),
        definition: definition.to_string(),
        translation: String::new(),
        grammatical_category: category.to_string(),
        theme: String::new(),
        language: String::new(),
        status: TermStatus::Approved,
    }
}

fn loaded_listing() -> ListingState {
    let mut state = ListingState::default();
    state.apply(ListingEvent::TermsLoaded(Ok(vec![
        term("Chat", "Animal domestique", "Noun"),
        term("Rapide", "Vite", "Adjective"),
    ])));
    state
}

#[test]
fn search_narrows_listing_to_matching_term() {
    let mut state = loaded_listing();
    state.apply(ListingEvent::Search("chat".to_string()));

    let view = state.page_view();
    assert_eq!(view.total, 1);
    assert_eq!(view.items[0].term, "Chat");
}

#[test]
fn clicking_selected_category_again_restores_everything() {
    let mut state = loaded_listing();
    state.apply(ListingEvent::Toggle(Dimension::Category, "Noun".to_string()));
    assert_eq!(state.filtered().len(), 1);

    state.apply(ListingEvent::Toggle(Dimension::Category, "Noun".to_string()));
    assert_eq!(state.filter().selected(Dimension::Category), None);
    assert_eq!(state.filtered().len(), 2);
}

#[test]
fn fetches_apply_in_any_order() {
    let mut state = ListingState::default();

    let languages = decode_collection::<LanguageDto>("languages", json!({"error": "boom"}));
    assert_eq!(
        state.apply(ListingEvent::LanguagesLoaded(languages)),
        ListingEffect::None
    );
    state.apply(ListingEvent::CategoriesLoaded(Ok(vec![
        CategoryDto {
            id: "1".to_string(),
            name: "Noun".to_string(),
            is_approved: true,
        },
        CategoryDto {
            id: "2".to_string(),
            name: "Draft".to_string(),
            is_approved: false,
        },
    ])));
    state.apply(ListingEvent::Toggle(Dimension::Category, "Noun".to_string()));
    state.apply(ListingEvent::TermsLoaded(Ok(vec![
        term("Chat", "Animal domestique", "Noun"),
        term("Rapide", "Vite", "Adjective"),
    ])));

    assert!(state.options(Dimension::Language).is_empty());
    assert_eq!(state.options(Dimension::Category), ["Noun".to_string()]);
    assert_eq!(state.page_view().items.len(), 1);
}

#[test]
fn other_category_alone_submits_capitalized() {
    let mut form = TermForm::new(FormMode::from_id(None));
    form.apply(FormEvent::CategoriesLoaded(Ok(vec![CategoryDto {
        id: "1".to_string(),
        name: "Noun".to_string(),
        is_approved: true,
    }])));
    form.apply(FormEvent::ChoiceSelected(
        Dimension::Category,
        OTHER_OPTION.to_string(),
    ));
    form.apply(FormEvent::FreeTextChanged(
        Dimension::Category,
        "verb".to_string(),
    ));

    let request = form.begin_submit().expect("submission starts");
    assert_eq!(request.payload().grammatical_category, "Verb");
    assert!(form.is_submitting());
}

#[test]
fn create_form_resolves_other_category() {
    let mut form = TermForm::new(FormMode::from_id(None));
    form.apply(FormEvent::CategoriesLoaded(Ok(vec![CategoryDto {
        id: "1".to_string(),
        name: "Noun".to_string(),
        is_approved: true,
    }])));
    form.apply(FormEvent::ThemesLoaded(Ok(vec![ThemeDto {
        id: "1".to_string(),
        name: "Animals".to_string(),
        is_approved: true,
    }])));
    form.apply(FormEvent::LanguagesLoaded(Ok(vec![LanguageDto {
        id: "1".to_string(),
        name: "French".to_string(),
        code: "fr".to_string(),
        is_approved: true,
    }])));
    assert_eq!(form.choice(Dimension::Category).selected(), "Noun");

    form.apply(FormEvent::TextChanged(TextField::Term, "courir".to_string()));
    form.apply(FormEvent::TextChanged(
        TextField::Definition,
        "se déplacer vite".to_string(),
    ));
    form.apply(FormEvent::TextChanged(TextField::Translation, "run".to_string()));
    form.apply(FormEvent::ChoiceSelected(
        Dimension::Category,
        OTHER_OPTION.to_string(),
    ));
    form.apply(FormEvent::FreeTextChanged(
        Dimension::Category,
        "verb".to_string(),
    ));

    let request = form.begin_submit().expect("form is complete");
    let payload = request.payload();
    assert_eq!(payload.grammatical_category, "Verb");
    assert_eq!(payload.term, "Courir");
    assert_eq!(payload.definition, "se déplacer vite");
    assert_eq!(payload.theme, "Animals");
    assert_eq!(payload.language, "French");
}

#[test]
fn edit_form_preselects_initial_language() {
    let mut form = TermForm::new(FormMode::Edit("7".to_string()));
    let languages = ["Spanish", "English"]
        .iter()
        .map(|name| LanguageDto {
            id: name.to_lowercase(),
            name: name.to_string(),
            code: String::new(),
            is_approved: true,
        })
        .collect();
    form.apply(FormEvent::LanguagesLoaded(Ok(languages)));

    let mut existing = term("Hello", "Greeting", "Interjection");
    existing.language = "English".to_string();
    form.apply(FormEvent::TermLoaded(Ok(existing)));

    assert_eq!(form.choice(Dimension::Language).selected(), "English");
}
