//! App module - contains the main application state and logic

mod controller;
mod form;

use controller::SubmissionController;

use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) controller: SubmissionController,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) endpoint_override: Option<String>,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        endpoint: Url,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons on top of the default fonts
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            controller: SubmissionController::new(reqwest::Client::new(), endpoint),
            runtime,
            endpoint_override: settings.endpoint,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            endpoint: self.endpoint_override.clone(),
        };
        settings.save(&self.data_dir);
    }

    /// Submit the form. The request task repaints the window when it settles.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        let dispatched = self
            .controller
            .submit(self.runtime.handle(), move || ctx.request_repaint());
        debug!(dispatched, "Submit requested");
    }

    /// Pick up the result of an in-flight submission, if any
    pub fn poll_submission(&mut self) {
        self.controller.poll();
    }
}
