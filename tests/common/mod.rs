// Shared helpers for integration tests.
//
// Builds a temporary resource bundle and a temporary project so each test
// runs against an isolated filesystem.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use devtools_setup::cli::GlobalOpts;
use devtools_setup::logging::Logger;

/// Lint config shipped in the test bundle.
pub const LINT_CONFIG: &str = "disabled_rules:\n  - trailing_whitespace\n";

/// Format config shipped in the test bundle.
pub const FORMAT_CONFIG: &str = "--indent 4\n--maxwidth 120\n";

/// Body of every hook script in the test bundle.
pub const HOOK_SCRIPT: &str = "#!/bin/sh\nmake lint\n";

/// Write a complete resource bundle into `root`.
///
/// Creates:
/// - `configs/swiftlint.yml`
/// - `configs/swiftformat`
/// - `scripts/pre-commit`, `scripts/pre-push`
/// - `templates/Feature/View.swift`, `templates/README.md`
/// - `templates/Assets/` (empty)
pub fn write_bundle(root: &Path) {
    std::fs::create_dir_all(root.join("configs")).expect("create configs dir");
    std::fs::create_dir_all(root.join("scripts")).expect("create scripts dir");
    std::fs::create_dir_all(root.join("templates/Feature")).expect("create templates dir");
    std::fs::create_dir_all(root.join("templates/Assets")).expect("create templates dir");

    std::fs::write(root.join("configs/swiftlint.yml"), LINT_CONFIG).expect("write lint config");
    std::fs::write(root.join("configs/swiftformat"), FORMAT_CONFIG).expect("write format config");
    for hook in ["pre-commit", "pre-push"] {
        std::fs::write(root.join("scripts").join(hook), HOOK_SCRIPT).expect("write hook");
    }
    std::fs::write(root.join("templates/Feature/View.swift"), "struct View {}\n")
        .expect("write template");
    std::fs::write(root.join("templates/README.md"), "# Templates\n").expect("write template");
}

/// An isolated bundle + project pair backed by a [`tempfile::TempDir`].
///
/// The project starts with only a `Package.swift` marker.
#[derive(Debug)]
pub struct Fixture {
    _tmp: tempfile::TempDir,
    /// Resource bundle root.
    pub bundle: PathBuf,
    /// Project root.
    pub project: PathBuf,
}

impl Fixture {
    /// Create a complete bundle and a project containing `Package.swift`.
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let bundle = tmp.path().join("bundle");
        let project = tmp.path().join("MyApp");
        write_bundle(&bundle);
        std::fs::create_dir_all(&project).expect("create project dir");
        std::fs::write(project.join("Package.swift"), "// swift-tools-version:5.9\n")
            .expect("write Package.swift");
        Self {
            _tmp: tmp,
            bundle,
            project,
        }
    }

    /// Create `.git/hooks` in the project.
    pub fn with_git_hooks(self) -> Self {
        std::fs::create_dir_all(self.project.join(".git/hooks")).expect("create .git/hooks");
        self
    }

    /// Global options pointing at this fixture.
    pub fn global(&self, dry_run: bool) -> GlobalOpts {
        GlobalOpts {
            dry_run,
            project: Some(self.project.clone()),
            resources: Some(self.bundle.clone()),
        }
    }

    /// Path inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.project.join(rel)
    }

    /// Read a project file as a string.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).expect("read project file")
    }

    /// Names of the entries directly inside the project, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.project)
            .expect("read project dir")
            .map(|e| {
                e.expect("read entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        names.sort();
        names
    }
}

/// A logger that records steps without a log file.
pub fn logger() -> Arc<Logger> {
    Arc::new(Logger::with_log_file(None))
}

/// Every entry under `root` by relative path: file bytes, or `None` for a
/// directory. Empty directories are listed too.
pub fn tree(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Option<Vec<u8>>>) {
        for entry in std::fs::read_dir(dir).expect("read dir") {
            let path = entry.expect("read entry").path();
            let rel = path.strip_prefix(root).expect("path under root").to_path_buf();
            if path.is_dir() {
                out.insert(rel, None);
                walk(root, &path, out);
            } else {
                out.insert(rel, Some(std::fs::read(&path).expect("read file")));
            }
        }
    }

    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}
