//! Minimal HTTP host for the rendered page.
//!
//! Every request to `/` renders the document fresh, so asset changes on disk
//! show up on the next page view. Requests are handled one at a time on the
//! calling thread.

use crate::assets::{AssetSource, FsAssetSource};
use crate::renderer::HomePageRenderer;
use crate::{Error, Result};
use std::io;
use std::net::SocketAddr;
use tiny_http::{Header, Method, Response, Server};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Status, content type and body for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: TEXT_CONTENT_TYPE,
            body: body.to_string(),
        }
    }
}

/// Decide the reply for a request without touching the network.
pub fn handle<S: AssetSource>(renderer: &HomePageRenderer<S>, method: &Method, url: &str) -> Reply {
    let path = url.split('?').next().unwrap_or(url);

    if path != "/" && path != "/index.html" {
        return Reply::text(404, "Not Found");
    }
    // tiny_http drops the body when answering HEAD.
    if !matches!(method, Method::Get | Method::Head) {
        return Reply::text(405, "Method Not Allowed");
    }

    match renderer.render_document() {
        Ok(body) => Reply {
            status: 200,
            content_type: HTML_CONTENT_TYPE,
            body,
        },
        Err(e) => {
            // Details stay in the log; the client only sees a generic failure.
            log::error!("failed to render home page: {}", e);
            Reply::text(500, "Internal Server Error")
        }
    }
}

/// A bound HTTP server that renders the home page per request
pub struct HomePageServer<S = FsAssetSource> {
    server: Server,
    renderer: HomePageRenderer<S>,
}

impl<S: AssetSource> HomePageServer<S> {
    /// Bind to `addr` (for example `127.0.0.1:8501`, or port `0` for any free port).
    pub fn bind(addr: &str, renderer: HomePageRenderer<S>) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::Other, e)))?;
        Ok(Self { server, renderer })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until the listener shuts down.
    pub fn run(&self) -> Result<()> {
        if let Some(addr) = self.local_addr() {
            log::info!("serving home page on http://{}", addr);
        }

        for request in self.server.incoming_requests() {
            let reply = handle(&self.renderer, request.method(), request.url());
            log::debug!("{} {} -> {}", request.method(), request.url(), reply.status);

            let mut response = Response::from_string(reply.body).with_status_code(reply.status);
            if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
                response = response.with_header(header);
            }
            if let Err(e) = request.respond(response) {
                log::warn!("failed to send response: {}", e);
            }
        }
        Ok(())
    }
}

/// Bind and serve in one call.
pub fn serve<S: AssetSource>(addr: &str, renderer: HomePageRenderer<S>) -> Result<()> {
    HomePageServer::bind(addr, renderer)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderConfig;

    fn renderer_over(dir: &std::path::Path) -> HomePageRenderer {
        let config = RenderConfig {
            asset_dir: dir.to_path_buf(),
            ..Default::default()
        };
        HomePageRenderer::new(config).unwrap()
    }

    #[test]
    fn root_renders_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("brain.svg"), "<svg id=\"abc\"></svg>").unwrap();
        std::fs::write(dir.path().join("Demo.svg"), "<svg id=\"demo\"></svg>").unwrap();
        let renderer = renderer_over(dir.path());

        let reply = handle(&renderer, &Method::Get, "/?tab=home");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, HTML_CONTENT_TYPE);
        assert!(reply.body.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn unknown_paths_and_methods() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer_over(dir.path());
        assert_eq!(handle(&renderer, &Method::Get, "/dashboard").status, 404);
        assert_eq!(handle(&renderer, &Method::Post, "/").status, 405);
    }

    #[test]
    fn head_is_answered_like_get() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("brain.svg"), "<svg id=\"abc\"></svg>").unwrap();
        std::fs::write(dir.path().join("Demo.svg"), "<svg id=\"demo\"></svg>").unwrap();
        let renderer = renderer_over(dir.path());

        let head = handle(&renderer, &Method::Head, "/");
        assert_eq!(head.status, 200);
        assert_eq!(head.content_type, HTML_CONTENT_TYPE);
        assert_eq!(head, handle(&renderer, &Method::Get, "/"));
        assert_eq!(handle(&renderer, &Method::Head, "/missing").status, 404);
    }

    #[test]
    fn missing_assets_are_a_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer_over(dir.path());
        let reply = handle(&renderer, &Method::Get, "/");
        assert_eq!(reply.status, 500);
        assert!(!reply.body.contains("brain.svg"));
    }
}
