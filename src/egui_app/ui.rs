#![cfg(feature = "egui")]

use eframe::egui::{self, Color32, RichText};

use super::state::{Action, CatalogApp};
use crate::catalog::CatalogSource;
use crate::model::Item;
use crate::render::{LOAD_ERROR_MESSAGE, NO_VERSION_PLACEHOLDER};
use crate::session::Screen;
use crate::view::{FamilyCard, Page, VersionEntry, View};

const CARD_IMAGE_WIDTH: f32 = 180.0;

/// Draw one frame and return the action the user triggered, if any.
pub fn update<S: CatalogSource>(app: &CatalogApp<S>, ctx: &egui::Context) -> Option<Action> {
    let mut action = None;
    let file_root = std::env::current_dir().ok();

    egui::TopBottomPanel::top("breadcrumb").show(ctx, |ui| {
        ui.horizontal(|ui| match app.session.page() {
            Some(page) => breadcrumb(ui, page, &mut action),
            None => {
                ui.label("Início");
            }
        });
        if let Some(err) = &app.error {
            ui.colored_label(Color32::RED, err);
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| match app.session.screen() {
            None => {
                ui.spinner();
            }
            Some(Screen::LoadError) => {
                ui.colored_label(Color32::RED, LOAD_ERROR_MESSAGE);
            }
            Some(Screen::Page(Page::Home { cards })) => {
                home(ui, cards, file_root.as_deref(), &mut action)
            }
            Some(Screen::Page(Page::Versions { family, versions })) => {
                versions_list(ui, family, versions, &mut action)
            }
            Some(Screen::Page(Page::Detail {
                version,
                supplements,
                ..
            })) => detail(ui, version, supplements),
        });
    });

    action
}

fn breadcrumb(ui: &mut egui::Ui, page: &Page, action: &mut Option<Action>) {
    match page {
        Page::Home { .. } => {
            ui.label("Início");
        }
        Page::Versions { family, .. } => {
            if ui.link("Início").clicked() {
                *action = Some(Action::Back(1));
            }
            ui.label(">");
            ui.label(family.as_str());
        }
        Page::Detail {
            family, version, ..
        } => {
            if ui.link("Início").clicked() {
                *action = Some(Action::Back(2));
            }
            ui.label(">");
            if ui.link(family.as_str()).clicked() {
                *action = Some(Action::Back(1));
            }
            ui.label(">");
            ui.label(version.name.as_str());
        }
    }
}

fn home(
    ui: &mut egui::Ui,
    cards: &[FamilyCard],
    file_root: Option<&std::path::Path>,
    action: &mut Option<Action>,
) {
    ui.horizontal_wrapped(|ui| {
        for card in cards {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.set_width(CARD_IMAGE_WIDTH);
                    if let Some(root) = file_root {
                        let uri = format!("file://{}", root.join(&card.image).display());
                        ui.add(egui::Image::new(uri).max_width(CARD_IMAGE_WIDTH));
                    }
                    ui.heading(card.name.as_str());
                    match &card.latest {
                        Some(label) => ui.label(format!("Versão mais recente: {label}")),
                        None => ui.label(NO_VERSION_PLACEHOLDER),
                    };
                    if ui.button("Mais Informações").clicked() {
                        *action = Some(Action::Navigate(View::family(&card.name)));
                    }
                });
            });
        }
    });
}

fn versions_list(
    ui: &mut egui::Ui,
    family: &str,
    versions: &[VersionEntry],
    action: &mut Option<Action>,
) {
    ui.heading(format!("Versões de {family}"));
    ui.horizontal_wrapped(|ui| {
        for v in versions {
            if ui.button(format!("Acessar Versão {}", v.label)).clicked() {
                *action = Some(Action::Navigate(View::version(family, &v.name)));
            }
        }
    });
}

fn detail(ui: &mut egui::Ui, version: &Item, supplements: &[Item]) {
    ui.heading(version.name.as_str());
    ui.label(version.description.as_str());
    ui.add_space(8.0);
    ui.label(RichText::new("Downloads").strong());
    ui.hyperlink_to(
        format!("{} (Sistema Principal)", version.name),
        &version.pdf_link,
    );
    for sup in supplements {
        ui.hyperlink_to(format!("{} (Suplemento)", sup.name), &sup.pdf_link);
    }
}
