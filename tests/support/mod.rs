#![allow(dead_code)]

use std::cell::Cell;

use rpgshelf::catalog::CatalogSource;
use rpgshelf::config::SiteConfig;
use rpgshelf::model::{Item, ItemKind};
use rpgshelf::Session;

/// In-memory catalog source that counts how often it is fetched.
pub struct StaticSource {
    body: Result<String, String>,
    pub fetches: Cell<usize>,
}

impl StaticSource {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: Ok(body.into()),
            fetches: Cell::new(0),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            body: Err(reason.into()),
            fetches: Cell::new(0),
        }
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&self) -> anyhow::Result<String> {
        self.fetches.set(self.fetches.get() + 1);
        self.body.clone().map_err(|e| anyhow::anyhow!(e))
    }

    fn location(&self) -> String {
        "memory://data.json".to_string()
    }
}

pub fn sistema(name: &str) -> Item {
    Item::new(
        name,
        ItemKind::MainSystem,
        format!("Descrição de {name}"),
        format!("https://pdf.example/{name}.pdf"),
    )
}

pub fn suplemento(name: &str) -> Item {
    Item::new(
        name,
        ItemKind::Supplement,
        format!("Descrição de {name}"),
        format!("https://pdf.example/{name}.pdf"),
    )
}

/// The catalog used throughout the navigation tests.
pub fn sample_catalog_json() -> String {
    serde_json::json!([
        {
            "nome": "Feiticeiros & Maldições v2.0",
            "type": "sistema",
            "descricao": "Segunda edição.",
            "link_pdf": "https://pdf.example/fm-2.0.pdf"
        },
        {
            "nome": "Feiticeiros & Maldições v2.5.2",
            "type": "sistema",
            "descricao": "Revisão 2.5.2.",
            "link_pdf": "https://pdf.example/fm-2.5.2.pdf"
        },
        {
            "nome": "Suplemento X (f&m 2.0)",
            "type": "suplemento",
            "descricao": "Regras extras.",
            "link_pdf": "https://pdf.example/sup-x.pdf"
        },
        {
            "nome": "Noites em Tokyo - Core",
            "type": "sistema",
            "descricao": "Livro básico.",
            "link_pdf": "https://pdf.example/nt-core.pdf"
        },
        {
            "nome": "Mapa de Tokyo",
            "type": "mapa",
            "descricao": "Tipo desconhecido.",
            "link_pdf": "https://pdf.example/mapa.pdf"
        }
    ])
    .to_string()
}

pub fn started_session() -> Session<StaticSource> {
    let mut session = Session::new(StaticSource::ok(sample_catalog_json()), SiteConfig::default());
    session.start().unwrap();
    session
}
