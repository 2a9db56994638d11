//! Tests de bout en bout: service HTTP réel, client et vue carte

use std::path::PathBuf;

use lawmap::{CentroidStrategy, CountryCollection, FetchState, MapView, PopupBody};
use lawmap_server::{server, LawClient, ServerConfig};
use tokio::net::TcpListener;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data")
}

fn countries() -> CountryCollection {
    let text = std::fs::read_to_string(data_dir().join("countries.geo.json")).unwrap();
    CountryCollection::from_geojson(&text).unwrap()
}

/// Démarre le service sur un port libre et retourne son URL de base
async fn spawn_server(laws_file: PathBuf) -> String {
    let config = ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        laws_file,
        cors: true,
    };

    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::run(listener, server::router(&config)));

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_and_click_france() {
    let url = spawn_server(data_dir().join("privacyLaws.json")).await;
    let client = LawClient::new(&url).unwrap();

    let table = client.fetch().await.unwrap();
    assert_eq!(table.len(), 7);

    let countries = countries();
    let mut view = MapView::new(CentroidStrategy::VertexAverage);
    view.on_laws_loaded(Ok(table));
    assert!(matches!(view.fetch_state(), FetchState::Ready(_)));

    let france = countries.find("France").unwrap();
    view.click(france);

    let popup = view.popup().unwrap();
    assert_eq!(Some(popup.position), france.representative_point(view.strategy()));
    match &popup.body {
        PopupBody::Law { country, record } => {
            assert_eq!(country, "France");
            assert!(record.regulator.contains("CNIL"));
        }
        other => panic!("unexpected popup body: {:?}", other),
    }
}

#[tokio::test]
async fn test_country_without_law_entry() {
    let url = spawn_server(data_dir().join("privacyLaws.json")).await;
    let table = LawClient::new(&url).unwrap().fetch().await.unwrap();

    let countries = countries();
    let mut view = MapView::default();
    view.on_laws_loaded(Ok(table));
    view.click(countries.find("United States of America").unwrap());

    let popup = view.popup().unwrap();
    assert!(matches!(popup.body, PopupBody::NoData { .. }));
}

#[tokio::test]
async fn test_missing_law_file_reports_status() {
    let url = spawn_server(data_dir().join("does-not-exist.json")).await;
    let err = LawClient::new(&url).unwrap().fetch().await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed with status code 500");
}

#[tokio::test]
async fn test_unreachable_service_shows_error_popup() {
    // Port lié puis libéré: plus personne n'écoute
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = LawClient::new(&format!("http://{}", addr)).unwrap();
    let result = client.fetch().await;
    assert!(result.is_err());

    let countries = countries();
    let mut view = MapView::default();
    view.on_laws_loaded(result);
    view.click(countries.find("Germany").unwrap());

    let popup = view.popup().unwrap();
    match popup.body {
        PopupBody::Error { message } => assert!(message.starts_with("Network Error")),
        other => panic!("unexpected popup body: {:?}", other),
    }
}
