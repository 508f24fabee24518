//! Test helpers: build the router over a temporary upload root.
//!
//! Run from workspace root: `cargo test -p mediadrop-api`.

#![allow(dead_code)]

pub mod fixtures;
pub mod workflows;

use axum_test::TestServer;
use mediadrop_api::setup;
use mediadrop_core::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test application: server plus the temporary directory that backs it.
pub struct TestApp {
    pub server: TestServer,
    pub config: Config,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        self.config.upload_dir()
    }

    pub fn videos_dir(&self) -> PathBuf {
        self.upload_dir().join("videos")
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.upload_dir().join("docs")
    }
}

/// Setup test app with an isolated upload root and no static frontend.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let mut config = Config::with_upload_dir(temp_dir.path().join("uploads"));
    config.public_dir = temp_dir.path().join("public");
    build_test_app(config, temp_dir).await
}

/// Setup test app running under the given `ENVIRONMENT` value.
pub async fn setup_test_app_in_environment(environment: &str) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let mut config = Config::with_upload_dir(temp_dir.path().join("uploads"));
    config.public_dir = temp_dir.path().join("public");
    config.environment = environment.to_string();
    build_test_app(config, temp_dir).await
}

/// Setup test app whose static frontend contains a single `index.html`.
pub async fn setup_test_app_with_frontend(index_html: &str) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let public_dir = temp_dir.path().join("public");
    std::fs::create_dir_all(&public_dir).expect("Failed to create public dir");
    std::fs::write(public_dir.join("index.html"), index_html).expect("Failed to write index");

    let mut config = Config::with_upload_dir(temp_dir.path().join("uploads"));
    config.public_dir = public_dir;
    build_test_app(config, temp_dir).await
}

async fn build_test_app(config: Config, temp_dir: TempDir) -> TestApp {
    let (_state, app) = setup::build_app(config.clone())
        .await
        .expect("Failed to build app");
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        config,
        _temp_dir: temp_dir,
    }
}
