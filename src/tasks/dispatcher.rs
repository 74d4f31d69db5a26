//! Step 3: the generated `Makefile` dispatcher.
use anyhow::{Context as _, Result};

use super::{ApplyVerb, Context, Task, TaskResult, TaskStats, apply_resource};
use crate::resources::generated::GeneratedFile;

/// Name of the generated dispatcher, relative to the project root.
pub const DISPATCHER_FILE: &str = "Makefile";

/// Targets exposed by the dispatcher, in the order they are defined.
pub const DISPATCHER_TARGETS: [&str; 6] = ["help", "lint", "format", "fix", "setup", "clean"];

/// Render the dispatcher for the given tool version.
///
/// The output depends on nothing but `version`. Missing lint/format tools
/// print an install hint instead of failing the target.
#[must_use]
pub fn render_makefile(version: &str) -> String {
    format!(
        "\
# Generated by devtools-setup {version}.
# Do not edit: run `devtools-setup install` to regenerate.

.PHONY: help lint format fix setup clean

help:
\t@echo \"Available targets:\"
\t@echo \"  make lint    Run SwiftLint\"
\t@echo \"  make format  Check formatting with SwiftFormat (dry run)\"
\t@echo \"  make fix     Apply SwiftFormat fixes\"
\t@echo \"  make setup   Re-run devtools-setup install\"
\t@echo \"  make clean   Remove build artifacts\"

lint:
\t@if command -v swiftlint >/dev/null 2>&1; then \\
\t\tswiftlint lint --config .swiftlint.yml; \\
\telse \\
\t\techo \"swiftlint is not installed. Install it with: brew install swiftlint\"; \\
\tfi

format:
\t@if command -v swiftformat >/dev/null 2>&1; then \\
\t\tswiftformat --config .swiftformat --lint .; \\
\telse \\
\t\techo \"swiftformat is not installed. Install it with: brew install swiftformat\"; \\
\tfi

fix:
\t@if command -v swiftformat >/dev/null 2>&1; then \\
\t\tswiftformat --config .swiftformat .; \\
\telse \\
\t\techo \"swiftformat is not installed. Install it with: brew install swiftformat\"; \\
\tfi

setup:
\tdevtools-setup install

clean:
\trm -rf .build DerivedData
"
    )
}

/// Write the generated `Makefile` to the project root.
#[derive(Debug)]
pub struct GenerateDispatcher;

impl Task for GenerateDispatcher {
    fn name(&self) -> &'static str {
        "Generate Makefile"
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resource = GeneratedFile::new(
            ctx.root().join(DISPATCHER_FILE),
            render_makefile(crate::version()),
        );
        let mut stats = TaskStats::new();
        stats += apply_resource(ctx, &resource, ApplyVerb::WRITE)
            .with_context(|| format!("writing {DISPATCHER_FILE}"))?;
        Ok(stats.finish(ctx))
    }
}
