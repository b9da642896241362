//! Async driver that executes controller commands on tokio.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use super::controller::SearchController;
use super::messages::{Command, Message};
use crate::catalog::CatalogApi;
use crate::debounce::Debouncer;
use crate::suggestions::SuggestionProvider;

/// Owns a [`SearchController`] and performs the side effects it requests:
/// debounce timers, catalog lookups and suggestion loads. Their outcomes are
/// queued as messages; [`SearchRuntime::step`] applies the next one.
///
/// Lookups are never aborted; a superseded response is dropped by the
/// controller's sequence check when it arrives.
#[derive(Debug)]
pub struct SearchRuntime {
    controller: SearchController,
    catalog: Arc<dyn CatalogApi>,
    suggestions: SuggestionProvider,
    debouncer: Debouncer<(u64, String)>,
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
}

impl SearchRuntime {
    pub fn new(
        controller: SearchController,
        catalog: Arc<dyn CatalogApi>,
        suggestions: SuggestionProvider,
        debounce: Duration,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer_tx = tx.clone();
        let debouncer = Debouncer::new(debounce, move |(ticket, query): (u64, String)| {
            if timer_tx
                .send(Message::DebounceElapsed { ticket, query })
                .is_err()
            {
                debug!("search runtime gone; debounce dropped");
            }
        });

        Self {
            controller,
            catalog,
            suggestions,
            debouncer,
            tx,
            rx,
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    /// Sender for feeding user events from another task.
    pub fn sender(&self) -> mpsc::UnboundedSender<Message> {
        self.tx.clone()
    }

    pub fn start(&mut self) {
        let commands = self.controller.start();
        self.execute(commands);
    }

    pub fn dispatch(&mut self, message: Message) {
        let commands = self.controller.update(message);
        self.execute(commands);
    }

    /// Wait for the next queued message.
    pub async fn recv(&mut self) -> Option<Message> {
        self.rx.recv().await
    }

    /// Wait for the next queued message and apply it.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(message) => {
                self.dispatch(message);
                true
            }
            None => false,
        }
    }

    fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::ScheduleDebounce { ticket, query } => {
                    self.debouncer.call((ticket, query));
                }
                Command::CancelDebounce => self.debouncer.cancel(),
                Command::Fetch { seq, request } => {
                    let catalog = Arc::clone(&self.catalog);
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let outcome =
                            catalog.search(&request.query, request.page).await;
                        if tx
                            .send(Message::SearchCompleted {
                                seq,
                                request,
                                outcome,
                            })
                            .is_err()
                        {
                            debug!(seq, "search runtime gone; response dropped");
                        }
                    });
                }
                Command::LoadSuggestions { ticket } => {
                    let provider = self.suggestions.clone();
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let outcome = provider.load().await;
                        if tx
                            .send(Message::SuggestionsLoaded { ticket, outcome })
                            .is_err()
                        {
                            debug!(ticket, "search runtime gone; suggestions dropped");
                        }
                    });
                }
            }
        }
    }
}
