//! Egui-based desktop viewer for the catalog (feature = "egui").
//!
//! Draws the same [`Page`](crate::view::Page)s as the HTML renderer and routes
//! every click through [`Session::navigate`] / [`Session::back`].

#![cfg(feature = "egui")]

mod state;
mod ui;

pub use state::{Action, CatalogApp};

use anyhow::Result;

use crate::catalog::CatalogSource;
use crate::session::Session;

/// Open a window showing `session`, which should already be started.
pub fn run<S: CatalogSource + 'static>(session: Session<S>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "rpgshelf",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CatalogApp::new(session)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
