//! Browsing session: the memoized catalog, the history stack and the screen
//! currently shown in the output container.

use crate::catalog::{CatalogLoader, CatalogSource};
use crate::config::SiteConfig;
use crate::error::{CatalogError, Result};
use crate::grouper::group;
use crate::history::NavigationHistory;
use crate::model::{Families, Item};
use crate::render::{render_load_error, render_page};
use crate::view::{Page, View, resolve};

/// Contents of the output container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Page(Page),
    /// The catalog could not be loaded; terminal for the session.
    LoadError,
}

impl Screen {
    pub fn to_html(&self) -> String {
        match self {
            Screen::Page(page) => render_page(page),
            Screen::LoadError => render_load_error(),
        }
    }
}

pub struct Session<S: CatalogSource> {
    loader: CatalogLoader<S>,
    config: SiteConfig,
    history: NavigationHistory<View>,
    screen: Option<Screen>,
}

impl<S: CatalogSource> Session<S> {
    pub fn new(source: S, config: SiteConfig) -> Self {
        Self {
            loader: CatalogLoader::new(source),
            config,
            history: NavigationHistory::new(),
            screen: None,
        }
    }

    /// Load the catalog and show the home screen, or the load error message
    /// if the catalog is unavailable.
    pub fn start(&mut self) -> Result<()> {
        self.loader.load();
        if self.loader.failure().is_some() {
            self.screen = Some(Screen::LoadError);
            return Ok(());
        }
        self.navigate(View::Home)
    }

    /// Resolve `view`, replace the screen with it and record it in the history.
    ///
    /// On error nothing changes: the previous screen and history stay in place.
    pub fn navigate(&mut self, view: View) -> Result<()> {
        let page = resolve(&view, &self.families())?;
        tracing::trace!(?view, depth = self.history.len() + 1, "navigate");
        self.history.push(view);
        self.screen = Some(Screen::Page(page));
        Ok(())
    }

    /// Go back past `skip` entries and re-show the entry below them.
    ///
    /// Returns `false` when the history is too short, leaving everything as is.
    pub fn back(&mut self, skip: usize) -> Result<bool> {
        match self.history.back(skip) {
            Some(view) => {
                self.navigate(view)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Families recomputed from the memoized catalog.
    pub fn families(&self) -> Families {
        group(self.loader.load(), &self.config)
    }

    pub fn catalog(&self) -> &[Item] {
        self.loader.load()
    }

    /// Why the catalog failed to load, if it did.
    pub fn failure(&self) -> Option<&CatalogError> {
        self.loader.failure()
    }

    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    /// The page on screen, if one is shown.
    pub fn page(&self) -> Option<&Page> {
        match &self.screen {
            Some(Screen::Page(page)) => Some(page),
            _ => None,
        }
    }

    pub fn history(&self) -> &NavigationHistory<View> {
        &self.history
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Current container markup; empty before [`start`](Self::start).
    pub fn html(&self) -> String {
        self.screen.as_ref().map(Screen::to_html).unwrap_or_default()
    }
}
