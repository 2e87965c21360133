#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway workspace with an `sfdx-project.json` and `node_modules` trees.
pub struct Fixture {
    pub tmp: TempDir,
}

impl Fixture {
    /// `packages` is `(name, default, declared dependencies)` in descriptor order.
    /// Each package lives at `packages/<name>`.
    pub fn new(packages: &[(&str, bool, &[&str])]) -> Self {
        let tmp = TempDir::new().unwrap();
        let entries: Vec<serde_json::Value> = packages
            .iter()
            .map(|(name, default, deps)| {
                let deps: Vec<serde_json::Value> = deps
                    .iter()
                    .map(|d| serde_json::json!({ "package": d }))
                    .collect();
                serde_json::json!({
                    "path": format!("packages/{name}"),
                    "package": name,
                    "default": default,
                    "dependencies": deps,
                })
            })
            .collect();
        let descriptor = serde_json::json!({
            "packageDirectories": entries,
            "namespace": "",
            "sourceApiVersion": "60.0",
        });
        std::fs::write(
            tmp.path().join("sfdx-project.json"),
            serde_json::to_string_pretty(&descriptor).unwrap(),
        )
        .unwrap();
        for (name, _, _) in packages {
            std::fs::create_dir_all(tmp.path().join("packages").join(name)).unwrap();
        }
        Self { tmp }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn modules(&self, package: &str) -> PathBuf {
        self.root()
            .join("packages")
            .join(package)
            .join("node_modules")
    }

    /// Install `name@version` at `<package>/node_modules/<relative>`.
    pub fn install_at(&self, package: &str, relative: &str, name: &str, version: &str) -> PathBuf {
        let dir = self.modules(package).join(relative);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("package.json"),
            serde_json::json!({ "name": name, "version": version, "main": "index.js" })
                .to_string(),
        )
        .unwrap();
        std::fs::write(dir.join("index.js"), "module.exports = {};\n").unwrap();
        dir
    }

    /// Install `name@version` at `<package>/node_modules/<name>`.
    pub fn install(&self, package: &str, name: &str, version: &str) -> PathBuf {
        self.install_at(package, name, name, version)
    }
}

/// Every file path under `root`, sorted, for before/after comparisons.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut out = Vec::new();
    collect(root, root, &mut out);
    out.sort();
    out
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).unwrap().to_path_buf();
            out.push((rel, std::fs::read(&path).unwrap()));
        }
    }
}
