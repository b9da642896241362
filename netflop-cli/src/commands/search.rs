use anyhow::Context;
use netflop_config::Config;
use netflop_core::location::UrlLocation;
use netflop_core::render::render_search;
use netflop_core::search::{Message, SearchController, SearchRuntime, SearchSettings};
use netflop_core::suggestions::SuggestionProvider;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use url::Url;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Submit,
    More,
    Suggest,
    Quit,
    Value(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim_end_matches(['\r', '\n']) {
            ":submit" => Input::Submit,
            ":more" => Input::More,
            ":suggest" => Input::Suggest,
            ":quit" | ":q" => Input::Quit,
            value => Input::Value(value.to_string()),
        }
    }

    fn into_message(self) -> Option<Message> {
        match self {
            Input::Submit => Some(Message::Submit),
            Input::More => Some(Message::LoadMore),
            Input::Suggest => Some(Message::ReloadSuggestions),
            Input::Value(value) => Some(Message::InputChanged(value)),
            Input::Quit => None,
        }
    }
}

pub async fn run(config: &Config, url: Option<Url>) -> anyhow::Result<()> {
    let catalog = super::catalog(config)?;
    let images = super::images(config);
    let location = UrlLocation::new(url.unwrap_or_else(|| config.ui.page_url.clone()));

    let controller = SearchController::new(
        SearchSettings::from(&config.search),
        location,
        images,
    );
    let suggestions =
        SuggestionProvider::new(catalog.clone(), config.search.suggestion_batch);
    let mut runtime =
        SearchRuntime::new(controller, catalog, suggestions, config.search.debounce);

    runtime.start();
    render(&runtime);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    break;
                };
                let Some(message) = Input::parse(&line).into_message() else {
                    break;
                };
                debug!(message = message.as_str(), "user input");
                runtime.dispatch(message);
            }
            message = runtime.recv() => {
                let Some(message) = message else {
                    break;
                };
                runtime.dispatch(message);
            }
        }
        render(&runtime);
    }

    Ok(())
}

fn render(runtime: &SearchRuntime) {
    let controller = runtime.controller();
    println!("{}", render_search(controller.view()));
    println!("-- {}", controller.location().url());
}
