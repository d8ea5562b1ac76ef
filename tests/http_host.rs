#![cfg(feature = "serve")]

//! Integration tests for the HTTP host

use secondbrain_home::serve::HomePageServer;
use secondbrain_home::{HomePageRenderer, RenderConfig};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::Path;

fn start_server(dir: &Path) -> SocketAddr {
    let config = RenderConfig {
        asset_dir: dir.to_path_buf(),
        ..Default::default()
    };
    let renderer = HomePageRenderer::new(config).expect("renderer");
    let server = HomePageServer::bind("127.0.0.1:0", renderer).expect("bind");
    let addr = server.local_addr().expect("ip listener");
    std::thread::spawn(move || {
        let _ = server.run();
    });
    addr
}

fn get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).expect("connect");
    write!(stream, "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path).unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).expect("read response");
    response
}

#[test]
fn test_serves_document_at_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("brain.svg"), "<svg id=\"abc\"></svg>").unwrap();
    std::fs::write(dir.path().join("Demo.svg"), "<svg id=\"demo\"></svg>").unwrap();
    let addr = start_server(dir.path());

    let response = get(addr, "/");
    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert!(response.to_ascii_lowercase().contains("content-type: text/html"));
    assert!(response.contains("<title>Inventory &amp; Orders</title>"));
    assert!(response.contains("data:image/svg+xml;base64,"));

    let missing = get(addr, "/dashboard");
    assert!(missing.starts_with("HTTP/1.1 404"), "{}", missing);
}

#[test]
fn test_render_failure_is_500() {
    let dir = tempfile::tempdir().unwrap();
    let addr = start_server(dir.path());

    let response = get(addr, "/");
    assert!(response.starts_with("HTTP/1.1 500"), "{}", response);
    assert!(response.contains("Internal Server Error"));
}
