use std::io;

use anyhow::bail;
use glossa_core::choice::OTHER_OPTION;
use glossa_core::config::Config;
use glossa_core::endpoints::Endpoint;
use glossa_core::form::{FormEffect, FormEvent, FormMode, SUBMIT_FAILED, TermForm, TextField};
use glossa_core::listing::{ListingEffect, ListingEvent, ListingState};
use glossa_core::taxonomy::Dimension;
use glossa_shared::{CategoryDto, LanguageDto, TermDto, ThemeDto};
use tracing::{info, warn};

use crate::cli::{Command, ListArgs, TermArgs};
use crate::client::HttpClient;
use crate::render::Renderer;

#[tracing::instrument(skip_all)]
pub async fn dispatch(
    client: &HttpClient,
    cfg: &Config,
    renderer: &Renderer,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::List(args) => list(client, cfg, renderer, &args).await,
        Command::Submit(fields) => submit(client, cfg, renderer, FormMode::Create, &fields).await,
        Command::Edit(args) => {
            submit(client, cfg, renderer, FormMode::Edit(args.id), &args.fields).await
        }
    }
}

async fn list(
    client: &HttpClient,
    cfg: &Config,
    renderer: &Renderer,
    args: &ListArgs,
) -> anyhow::Result<()> {
    let mut state = ListingState::new(&cfg.listing);

    let (terms, categories, themes, languages) = tokio::join!(
        client.collection::<TermDto>(Endpoint::ApprovedTerms),
        client.collection::<CategoryDto>(Endpoint::Categories),
        client.collection::<ThemeDto>(Endpoint::Themes),
        client.collection::<LanguageDto>(Endpoint::Languages),
    );

    let loads = [
        ListingEvent::TermsLoaded(terms),
        ListingEvent::CategoriesLoaded(categories),
        ListingEvent::ThemesLoaded(themes),
        ListingEvent::LanguagesLoaded(languages),
    ];
    for event in loads {
        if state.apply(event) == ListingEffect::RedirectToLogin {
            bail!(login_required(cfg));
        }
    }
    if let Some(message) = state.load_error() {
        bail!("{message}");
    }

    let selections = [
        (Dimension::Category, &args.category),
        (Dimension::Theme, &args.theme),
        (Dimension::Language, &args.language),
    ];
    for (dimension, value) in selections {
        let Some(value) = value else {
            continue;
        };
        if !state.options(dimension).contains(value) {
            warn!(
                dimension = dimension.key(),
                value = %value,
                "not an approved option; the filter may match nothing"
            );
        }
        state.apply(ListingEvent::Toggle(dimension, value.clone()));
    }
    if let Some(search) = &args.search {
        state.apply(ListingEvent::Search(search.clone()));
    }
    state.apply(ListingEvent::GoToPage(args.page));

    let view = state.page_view();
    info!(page = view.page, total = view.total, "rendering listing");
    renderer.write_page(io::stdout().lock(), &view)
}

async fn submit(
    client: &HttpClient,
    cfg: &Config,
    renderer: &Renderer,
    mode: FormMode,
    fields: &TermArgs,
) -> anyhow::Result<()> {
    let mut form = TermForm::new(mode.clone());

    let existing = async {
        match &mode {
            FormMode::Edit(id) => Some(client.term(id).await),
            FormMode::Create => None,
        }
    };
    let (existing, categories, themes, languages) = tokio::join!(
        existing,
        client.collection::<CategoryDto>(Endpoint::Categories),
        client.collection::<ThemeDto>(Endpoint::Themes),
        client.collection::<LanguageDto>(Endpoint::Languages),
    );

    let mut loads = Vec::with_capacity(4);
    if let Some(result) = existing {
        loads.push(FormEvent::TermLoaded(result));
    }
    loads.push(FormEvent::CategoriesLoaded(categories));
    loads.push(FormEvent::ThemesLoaded(themes));
    loads.push(FormEvent::LanguagesLoaded(languages));
    for event in loads {
        if form.apply(event) == FormEffect::RedirectToLogin {
            bail!(login_required(cfg));
        }
    }
    if let Some(message) = form.error() {
        bail!("{message}");
    }

    for event in field_events(fields) {
        form.apply(event);
    }

    let request = form.begin_submit()?;
    let result = client.submit(&request).await;
    let failure = result.as_ref().err().map(ToString::to_string);
    form.apply(FormEvent::SubmitFinished(result));

    if !form.show_confirmation() {
        let message = form.error().unwrap_or(SUBMIT_FAILED);
        match failure {
            Some(cause) => bail!("{message} ({cause})"),
            None => bail!("{message}"),
        }
    }

    let heading = if mode.is_edit() {
        "Term updated."
    } else {
        "Term submitted for review."
    };
    renderer.write_payload(io::stdout().lock(), heading, request.payload())?;
    form.apply(FormEvent::DismissConfirmation);
    Ok(())
}

/// Translates command-line flags into the keystrokes and selections a user
/// would make in the form. Absent flags leave the form untouched.
fn field_events(fields: &TermArgs) -> Vec<FormEvent> {
    let mut events = Vec::new();

    let texts = [
        (TextField::Term, &fields.term),
        (TextField::Definition, &fields.definition),
        (TextField::Translation, &fields.translation),
    ];
    for (field, value) in texts {
        if let Some(value) = value {
            events.push(FormEvent::TextChanged(field, value.clone()));
        }
    }

    let choices = [
        (Dimension::Category, &fields.category, &fields.new_category),
        (Dimension::Theme, &fields.theme, &fields.new_theme),
        (Dimension::Language, &fields.language, &fields.new_language),
    ];
    for (dimension, selected, free_text) in choices {
        match (selected, free_text) {
            (Some(value), _) if value.eq_ignore_ascii_case(OTHER_OPTION) => {
                events.push(FormEvent::ChoiceSelected(dimension, OTHER_OPTION.to_string()));
            }
            (Some(value), _) => {
                events.push(FormEvent::ChoiceSelected(dimension, value.clone()));
            }
            (None, Some(_)) => {
                events.push(FormEvent::ChoiceSelected(dimension, OTHER_OPTION.to_string()));
            }
            (None, None) => {}
        }
        if let Some(text) = free_text {
            events.push(FormEvent::FreeTextChanged(dimension, text.clone()));
        }
    }

    events
}

fn login_required(cfg: &Config) -> String {
    format!(
        "authentication required; sign in at {} and pass the token with --token",
        cfg.routes.login
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_value_without_selection_picks_other() {
        let fields = TermArgs {
            new_theme: Some("cuisine".to_string()),
            ..TermArgs::default()
        };
        let events = field_events(&fields);
        assert_eq!(
            events,
            vec![
                FormEvent::ChoiceSelected(Dimension::Theme, OTHER_OPTION.to_string()),
                FormEvent::FreeTextChanged(Dimension::Theme, "cuisine".to_string()),
            ]
        );
    }

    #[test]
    fn lowercase_other_is_normalized() {
        let fields = TermArgs {
            category: Some("other".to_string()),
            new_category: Some("verb".to_string()),
            ..TermArgs::default()
        };

        let mut form = TermForm::new(FormMode::Create);
        for event in field_events(&fields) {
            form.apply(event);
        }
        assert!(form.choice(Dimension::Category).is_other());
        assert_eq!(form.choice(Dimension::Category).effective(), "Verb");
    }

    #[test]
    fn text_flags_become_text_events() {
        let fields = TermArgs {
            term: Some("chat".to_string()),
            definition: Some("Animal domestique".to_string()),
            ..TermArgs::default()
        };
        let events = field_events(&fields);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            FormEvent::TextChanged(TextField::Term, "chat".to_string())
        );
    }
}
