//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_source;

use countries_catalog::config::{Config, ConfigStore};
use countries_catalog::country::Country;
use countries_catalog::web::{CatalogServer, ServerHandle};
use serde_json::json;
use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// One record in the REST Countries v3.1 shape.
pub fn country_json(official: &str, cca3: &str) -> serde_json::Value {
    let cca2 = &cca3[..2];
    json!({
        "flags": {
            "png": format!("https://flagcdn.com/w320/{}.png", cca2.to_lowercase()),
            "svg": format!("https://flagcdn.com/{}.svg", cca2.to_lowercase()),
        },
        "name": {
            "common": official,
            "official": official,
            "nativeName": {
                "eng": {"official": official, "common": official}
            }
        },
        "cca2": cca2,
        "cca3": cca3,
        "altSpellings": [cca2, official],
        "idd": {"root": "+9", "suffixes": ["9"]}
    })
}

/// `"Country 01"` .. `"Country {n}"`, codes `C01` .. in the same order.
pub fn synthetic_countries(n: usize) -> serde_json::Value {
    let records: Vec<serde_json::Value> = (1..=n)
        .map(|i| country_json(&format!("Country {:02}", i), &format!("C{:02}", i)))
        .collect();
    serde_json::Value::Array(records)
}

pub fn albania_zambia_chad() -> serde_json::Value {
    json!([
        country_json("Albania", "ALB"),
        country_json("Zambia", "ZMB"),
        country_json("Chad", "TCD"),
    ])
}

pub fn parse_countries(value: &serde_json::Value) -> Vec<Country> {
    serde_json::from_value(value.clone()).expect("fixture should deserialize")
}

pub fn official_names(countries: &[Country]) -> Vec<String> {
    countries.iter().map(|c| c.name.official.clone()).collect()
}

/// Create a temporary config file pointing at `source_url`.
pub fn temp_config(source_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let content = format!(
        r#"[server]
bind_addr = "127.0.0.1:0"

[source]
base_url = "{}"
timeout_seconds = 2
connect_timeout_seconds = 1

[page]
title = "Test Catalog"
search_debounce_ms = 250
"#,
        source_url
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Start a catalog server against `source_url` on a free port.
pub async fn spawn_catalog(source_url: &str) -> (SocketAddr, ServerHandle) {
    let mut config = Config::default();
    config.server.bind_addr = format!("127.0.0.1:{}", free_port());
    config.source.base_url = source_url.to_string();
    config.source.timeout_seconds = 2;
    config.source.connect_timeout_seconds = 1;

    let store = ConfigStore::new(config, PathBuf::from("/tmp/countries-catalog-test.toml"));
    let mut server = CatalogServer::new(store).expect("Failed to create catalog server");

    // Bind before spawning so the port cannot be taken in between
    let addr = server.try_bind().await.expect("Failed to bind");
    let handle = server.handle();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    assert!(wait_for_server(addr, Duration::from_secs(2)).await);
    (addr, handle)
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
