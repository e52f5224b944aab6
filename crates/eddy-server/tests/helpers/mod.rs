//! Test helpers para eddy-server.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod origin;

pub use client::{TestClient, TestResponse, app, app_client, client};
pub use origin::{ORIGIN, StubOrigin};

/// Query string de fetch para `resource` bajo [`ORIGIN`].
pub fn fetch_uri(resource: &str) -> String {
    format!("/?url={}/{}", ORIGIN, resource)
}
