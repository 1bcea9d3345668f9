mod support;

use camino::Utf8PathBuf;
use rpgshelf::catalog::{CatalogLoader, CatalogSource, FsSource, HttpSource};
use rpgshelf::config::SiteConfig;
use rpgshelf::render::LOAD_ERROR_MESSAGE;
use rpgshelf::{CatalogError, Screen, Session};
use rpgshelf::model::ItemKind;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use support::{StaticSource, sample_catalog_json};

#[test]
fn test_fs_source_loads_catalog_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("data.json");
    fs::write(&path, sample_catalog_json()).unwrap();
    let path = Utf8PathBuf::from_path_buf(path).unwrap();

    let loader = CatalogLoader::new(FsSource::new(&path));
    assert_eq!(loader.load().len(), 5);
    assert!(loader.failure().is_none());
}

#[test]
fn test_load_is_memoized() {
    let loader = CatalogLoader::new(StaticSource::ok(sample_catalog_json()));
    assert!(!loader.is_loaded());
    let first = loader.load().to_vec();
    let second = loader.load().to_vec();
    assert_eq!(first, second);
    assert!(loader.is_loaded());

    let mut session = Session::new(StaticSource::ok(sample_catalog_json()), SiteConfig::default());
    session.start().unwrap();
    session.navigate(rpgshelf::view::View::family("Noites em Tokyo")).unwrap();
    session.back(1).unwrap();
    assert_eq!(session.catalog().len(), 5);
}

#[test]
fn test_source_fetched_once() {
    let source = StaticSource::ok("[]");
    let loader = CatalogLoader::new(&source);
    for _ in 0..3 {
        assert!(loader.load().is_empty());
    }
    // Empty but successful catalogs are memoized too.
    assert_eq!(source.fetches.get(), 1);
    assert!(loader.failure().is_none());
}

#[test]
fn test_fetch_failure_shows_only_error_message() {
    let source = StaticSource::failing("connection refused");
    let mut session = Session::new(source, SiteConfig::default());
    session.start().unwrap();

    assert_eq!(session.screen(), Some(&Screen::LoadError));
    assert_eq!(
        session.html(),
        format!(r#"<p class="error">{}</p>"#, LOAD_ERROR_MESSAGE)
    );
    assert!(session.catalog().is_empty());
    assert!(session.history().is_empty());
    assert!(matches!(session.failure(), Some(CatalogError::Fetch { .. })));
}

#[test]
fn test_failure_is_not_retried() {
    let source = StaticSource::failing("timeout");
    let loader = CatalogLoader::new(&source);
    assert!(loader.load().is_empty());
    assert!(loader.load().is_empty());
    assert!(loader.failure().is_some());
    assert_eq!(source.fetches.get(), 1);
}

#[test]
fn test_malformed_document_is_parse_failure() {
    let source = StaticSource::ok(r#"{"nome": "not a list"}"#);
    let mut session = Session::new(source, SiteConfig::default());
    session.start().unwrap();
    assert_eq!(session.screen(), Some(&Screen::LoadError));
    assert!(matches!(session.failure(), Some(CatalogError::Parse(_))));
    assert!(session.catalog().is_empty());
}

#[test]
fn test_missing_file_is_fetch_failure() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("missing.json")).unwrap();
    let loader = CatalogLoader::new(FsSource::new(&path));
    assert!(loader.load().is_empty());
    match loader.failure() {
        Some(CatalogError::Fetch { location, .. }) => assert_eq!(location, path.as_str()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_entries_without_usable_type_are_dropped_not_fatal() {
    let body = r#"[
        {"nome": "Feiticeiros & Maldições v2.0", "type": "sistema", "descricao": "", "link_pdf": ""},
        {"nome": "Sem tipo", "descricao": "", "link_pdf": ""},
        {"nome": "Tipo nulo", "type": null, "descricao": "", "link_pdf": ""},
        {"nome": "Tipo numérico", "type": 3, "descricao": "", "link_pdf": ""}
    ]"#;
    let mut session = Session::new(StaticSource::ok(body), SiteConfig::default());
    session.start().unwrap();

    assert!(session.failure().is_none());
    assert_eq!(session.catalog().len(), 4);
    let kinds: Vec<ItemKind> = session.catalog().iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![ItemKind::MainSystem, ItemKind::Unknown, ItemKind::Unknown, ItemKind::Unknown]
    );
    let families = session.families();
    assert_eq!(families["Feiticeiros & Maldições"].versions.len(), 1);
    assert!(families["Outros"].versions.is_empty());
    assert!(families["Outros"].supplements.is_empty());
    assert!(matches!(session.screen(), Some(Screen::Page(_))));
}

/// Serve one HTTP response on a local port and return the catalog URL.
fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n",
            body.len()
        );
        let response = format!("{head}Connection: close\r\n\r\n{body}");
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}/data.json")
}

#[test]
fn test_http_source_downloads_catalog() {
    let url = serve_once("200 OK", sample_catalog_json());
    let source = HttpSource::new(&url).unwrap();
    assert_eq!(source.location(), url);

    let loader = CatalogLoader::new(source);
    assert_eq!(loader.load().len(), 5);
    assert!(loader.failure().is_none());
}

#[test]
fn test_http_error_status_is_fetch_failure() {
    let url = serve_once("404 Not Found", String::new());
    let loader = CatalogLoader::new(HttpSource::new(&url).unwrap());
    assert!(loader.load().is_empty());
    match loader.failure() {
        Some(CatalogError::Fetch { location, .. }) => assert_eq!(location, &url),
        other => panic!("unexpected {other:?}"),
    }
}
