//! Temporary workspaces holding catalogue and request files.

use camino::{Utf8Path, Utf8PathBuf};
use configurator_core::{Product, RecommendRequest, SpecKey};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary directory with conventional catalogue and request paths.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) catalog: Utf8PathBuf,
    pub(super) request: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("catalog.json");
        let request = root.join("request.json");
        Self {
            _dir: dir,
            root,
            catalog,
            request,
        }
    }

    pub(super) fn write_catalog(&self, products: &[Product]) {
        let payload = serde_json::to_string_pretty(products).expect("serialise catalogue");
        write_utf8(&self.catalog, payload.as_bytes());
    }

    pub(super) fn write_request(&self, request: &RecommendRequest) {
        let payload = serde_json::to_string_pretty(request).expect("serialise request");
        write_utf8(&self.request, payload.as_bytes());
    }
}

/// Two office towers that tie on score; the cheaper one is listed first.
pub(super) fn office_towers() -> Vec<Product> {
    vec![
        Product::new("tower-premium", "Tour Premium", "office", 600_000)
            .with_spec(SpecKey::Ram, 16)
            .with_stock(5),
        Product::new("tower-basic", "Tour Basique", "office", 400_000)
            .with_spec(SpecKey::Ram, 8)
            .with_stock(5),
    ]
}

pub(super) fn office_request() -> RecommendRequest {
    RecommendRequest::new("office", 300_000.0, 700_000.0)
}
