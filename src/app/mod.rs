//! eframe shell around a [`GraphSession`].

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context};
use rand::Rng;

use crate::config::LayoutConfig;
use crate::graph::{GraphSpec, load_graph_spec, sample_graph_spec};
use crate::session::GraphSession;

mod canvas;
mod ui;

#[derive(Clone, Debug)]
pub enum GraphSource {
    Sample,
    File(PathBuf),
}

impl GraphSource {
    fn describe(&self) -> String {
        match self {
            Self::Sample => "built-in sample".to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }

    fn load(&self) -> Result<GraphSpec, String> {
        match self {
            Self::Sample => Ok(sample_graph_spec()),
            Self::File(path) => load_graph_spec(path).map_err(|error| {
                tracing::warn!(path = %path.display(), "graph load failed: {error:#}");
                format!("{error:#}")
            }),
        }
    }
}

pub struct KnowledgeGraphApp {
    source: GraphSource,
    config: LayoutConfig,
    seed: Option<u64>,
    state: AppState,
    reload_rx: Option<Receiver<Result<GraphSpec, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<GraphSpec, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    spec: GraphSpec,
    config: LayoutConfig,
    seed: u64,
    /// Built on the first frame that knows the canvas size.
    session: Option<GraphSession>,
    entity_filter: String,
}

impl KnowledgeGraphApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        source: GraphSource,
        config: LayoutConfig,
        seed: Option<u64>,
    ) -> Self {
        let state = Self::start_load(source.clone());
        Self {
            source,
            config,
            seed,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(source: GraphSource) -> Receiver<Result<GraphSpec, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(source.load());
        });

        rx
    }

    fn start_load(source: GraphSource) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(source),
        }
    }

    fn ready(&self, spec: GraphSpec) -> AppState {
        AppState::Ready(Box::new(ViewModel::new(spec, self.config.clone(), self.seed)))
    }
}

impl eframe::App for KnowledgeGraphApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;
        let mut retry = false;

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(result) => transition = Some(result),
                    Err(TryRecvError::Empty) => ctx.request_repaint(),
                    Err(TryRecvError::Disconnected) => {
                        transition = Some(Err("Background load worker disconnected".to_owned()));
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load graph");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        retry = true;
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(
                    ctx,
                    &self.source.describe(),
                    &mut reload_requested,
                    is_reloading,
                );

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.source.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => transition = Some(result),
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                            ctx.request_repaint();
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(Err("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if retry {
            self.state = Self::start_load(self.source.clone());
        }

        if let Some(result) = transition {
            self.reload_rx = None;
            self.state = match result {
                Ok(spec) => self.ready(spec),
                Err(error) => AppState::Error(error),
            };
        }
    }
}

impl ViewModel {
    fn new(spec: GraphSpec, config: LayoutConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        tracing::info!(seed, nodes = spec.nodes.len(), "graph loaded");

        Self {
            spec,
            config,
            seed,
            session: None,
            entity_filter: String::new(),
        }
    }

    /// Drops the current layout; the next frame rebuilds it with a new seed.
    fn relayout(&mut self) {
        self.seed = rand::rng().random();
        self.session = None;
        tracing::info!(seed = self.seed, "re-running layout");
    }
}
