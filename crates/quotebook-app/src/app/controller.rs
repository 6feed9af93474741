//! Application controller
//!
//! Owns the selection controller and processes commands from all frontends
//! through a single crossbeam channel. The catalog fetch runs on a worker
//! thread and reports back through the same channel.

use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, info, warn};

use quotebook::error::FetchError;
use quotebook::quote::{Quote, QuoteSource};
use quotebook::selection::SelectionController;

use super::state::{AppCommand, AppSnapshot};

pub struct AppController {
    cmd_rx: Receiver<AppCommand>,
    cmd_tx: Sender<AppCommand>,
    shared_state: Arc<Mutex<AppSnapshot>>,
    selection: SelectionController,
    source: Arc<dyn QuoteSource>,
    /// Monotonically increasing counter to discard stale fetch results
    load_generation: u64,
    is_loading: bool,
    last_error: Option<String>,
}

impl AppController {
    pub fn new(
        cmd_rx: Receiver<AppCommand>,
        cmd_tx: Sender<AppCommand>,
        shared_state: Arc<Mutex<AppSnapshot>>,
        selection: SelectionController,
        source: Arc<dyn QuoteSource>,
    ) -> Self {
        Self {
            cmd_rx,
            cmd_tx,
            shared_state,
            selection,
            source,
            load_generation: 0,
            is_loading: false,
            last_error: None,
        }
    }

    /// Run the controller event loop (blocking, call from a dedicated thread)
    ///
    /// Starts the initial catalog load, then handles commands until
    /// `Shutdown` arrives or every sender is dropped.
    pub fn run(&mut self) {
        self.start_load();
        self.publish();

        while let Ok(cmd) = self.cmd_rx.recv() {
            if self.handle_command(cmd) {
                break;
            }
            self.publish();
        }

        debug!("controller stopped");
    }

    /// Handle a single command. Returns true if the loop should exit.
    fn handle_command(&mut self, cmd: AppCommand) -> bool {
        match cmd {
            AppCommand::Shutdown => return true,

            AppCommand::SetCategory(category) => {
                self.selection.set_category(category);
                self.last_error = None;
            }
            AppCommand::ToggleFavorite(id) => match self.selection.toggle(id) {
                Ok(outcome) => {
                    debug!(%id, ?outcome, "toggled favorite");
                    self.last_error = None;
                }
                Err(e) => {
                    warn!(%id, error = %e, "toggle rejected");
                    self.last_error = Some(e.to_string());
                }
            },
            AppCommand::RemoveFavorite(id) => {
                self.selection.remove(id);
                self.last_error = None;
            }
            AppCommand::DismissNotification => {
                self.selection.dismiss_notification();
            }
            AppCommand::ReloadCatalog => {
                self.start_load();
            }
            AppCommand::Sync(reply) => {
                self.publish();
                let _ = reply.send(());
            }
            AppCommand::InternalCatalogLoaded { generation, result } => {
                self.handle_catalog_loaded(generation, result);
            }
        }
        false
    }

    /// Fetch the catalog on a worker thread, then send the result back.
    ///
    /// Each call increments `load_generation`; stale results from earlier
    /// calls are discarded in `handle_catalog_loaded`.
    fn start_load(&mut self) {
        self.load_generation += 1;
        let generation = self.load_generation;
        self.is_loading = true;

        let source = Arc::clone(&self.source);
        let cmd_tx = self.cmd_tx.clone();

        let spawned = std::thread::Builder::new()
            .name("catalog-fetch".into())
            .spawn(move || {
                let result = source.fetch();
                let _ = cmd_tx.send(AppCommand::InternalCatalogLoaded { generation, result });
            });

        if let Err(e) = spawned {
            warn!(error = %e, "failed to spawn catalog fetch thread");
            self.is_loading = false;
            self.last_error = Some(format!("Could not start catalog load: {e}"));
        } else {
            info!(source = self.source.id(), generation, "catalog load started");
        }
    }

    /// Apply a fetch result. Results with a stale `generation` are discarded.
    fn handle_catalog_loaded(&mut self, generation: u64, result: Result<Vec<Quote>, FetchError>) {
        if generation != self.load_generation {
            debug!(generation, current = self.load_generation, "discarding stale catalog load");
            return;
        }

        self.is_loading = false;
        match self.selection.ingest_catalog(result) {
            Ok(_) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    /// Copy current state into the shared snapshot
    fn publish(&self) {
        let snapshot = AppSnapshot {
            category: self.selection.category(),
            visible: self.selection.visible_quotes().into_iter().cloned().collect(),
            favorites: self.selection.favorite_list().to_vec(),
            max_faves: self.selection.favorites().max_faves(),
            notification: self.selection.notification().cloned(),
            is_loading: self.is_loading,
            catalog_loaded: self.selection.catalog().is_loaded(),
            catalog_size: self.selection.catalog().len(),
            last_error: self.last_error.clone(),
        };

        let mut state = self.shared_state.lock().unwrap_or_else(|e| e.into_inner());
        *state = snapshot;
    }
}
