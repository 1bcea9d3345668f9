#![cfg(feature = "egui")]

use eframe::egui;

use crate::catalog::CatalogSource;
use crate::session::Session;
use crate::view::View;

/// A click collected while drawing, applied once the frame is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(View),
    Back(usize),
}

/// Interactive egui application wrapping a browsing [`Session`].
pub struct CatalogApp<S: CatalogSource> {
    pub session: Session<S>,
    /// Message of the last failed navigation, cleared by the next success.
    pub error: Option<String>,
}

impl<S: CatalogSource> CatalogApp<S> {
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            error: None,
        }
    }

    pub fn apply(&mut self, action: Action) {
        let result = match action {
            Action::Navigate(view) => self.session.navigate(view),
            Action::Back(skip) => self.session.back(skip).map(|_| ()),
        };
        self.error = match result {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(error = %err, "navigation failed");
                Some(err.user_message().to_string())
            }
        };
    }
}

impl<S: CatalogSource> eframe::App for CatalogApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = super::ui::update(self, ctx) {
            self.apply(action);
        }
    }
}
