//! HTML rendering of resolved pages into the contents of the `<main>` container.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::model::Item;
use crate::view::{FamilyCard, Page, VersionEntry};

/// Shown in place of all content when the catalog cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str =
    "Não foi possível carregar os dados dos sistemas. Tente recarregar a página.";

/// Shown on a home card when the family has no main-system release.
pub const NO_VERSION_PLACEHOLDER: &str = "Nenhuma versão principal encontrada.";

const PDF_ICON: &str = "https://img.icons8.com/ios-filled/24/000000/pdf.png";

/// Markup replacing the container after a failed catalog load.
pub fn render_load_error() -> String {
    format!(r#"<p class="error">{}</p>"#, text(LOAD_ERROR_MESSAGE))
}

/// Markup for a page. Always replaces the whole container.
pub fn render_page(page: &Page) -> String {
    match page {
        Page::Home { cards } => render_home(cards),
        Page::Versions { family, versions } => render_versions(family, versions),
        Page::Detail {
            family,
            version,
            supplements,
        } => render_detail(family, version, supplements),
    }
}

fn render_home(cards: &[FamilyCard]) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"breadcrumb\">Início</div>\n");
    out.push_str("<section class=\"systems-container\">\n");
    for card in cards {
        let latest = match &card.latest {
            Some(label) => format!("<p>Versão mais recente: {}</p>", text(label)),
            None => format!("<p>{}</p>", text(NO_VERSION_PLACEHOLDER)),
        };
        out.push_str("<div class=\"system-card\">\n");
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"Imagem de {}\" class=\"system-image\">\n",
            attr(&card.image),
            attr(&card.name)
        ));
        out.push_str("<div class=\"system-card-content\">\n");
        out.push_str(&format!("<h3>{}</h3>\n{}\n", text(&card.name), latest));
        out.push_str(&format!(
            "<button data-nav=\"family\" data-system=\"{}\">Mais Informações</button>\n",
            attr(&card.name)
        ));
        out.push_str("</div>\n</div>\n");
    }
    out.push_str("</section>\n");
    out
}

fn render_versions(family: &str, versions: &[VersionEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r##"<div class="breadcrumb"><a href="#" data-back="1">Início</a> &gt; {}</div>"##,
        text(family)
    ));
    out.push('\n');
    out.push_str("<section class=\"versions-container\">\n");
    out.push_str(&format!("<h2>Versões de {}</h2>\n", text(family)));
    out.push_str("<div class=\"version-buttons\">\n");
    for v in versions {
        out.push_str(&format!(
            "<button data-nav=\"version\" data-system=\"{}\" data-version=\"{}\">",
            attr(family),
            attr(&v.name)
        ));
        out.push_str(&format!("Acessar Versão {}</button>\n", text(&v.label)));
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn render_detail(family: &str, version: &Item, supplements: &[Item]) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"breadcrumb\">");
    out.push_str(r##"<a href="#" data-back="2">Início</a> &gt; "##);
    out.push_str(&format!(
        r##"<a href="#" data-back="1">{}</a> &gt; {}</div>"##,
        text(family),
        text(&version.name)
    ));
    out.push('\n');
    out.push_str("<section class=\"details-container\">\n");
    out.push_str(&format!("<h2>{}</h2>\n", text(&version.name)));
    out.push_str(&format!("<p>{}</p>\n", text(&version.description)));
    out.push_str("<div class=\"pdf-list\">\n<h4>Downloads</h4>\n");
    out.push_str(&pdf_link(version, "Sistema Principal"));
    for sup in supplements {
        out.push_str(&pdf_link(sup, "Suplemento"));
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn pdf_link(item: &Item, role: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" class="pdf-link"><img src="{}" alt="PDF"/>{} ({})</a>"#,
        attr(&item.pdf_link),
        PDF_ICON,
        text(&item.name),
        role
    ) + "\n"
}
