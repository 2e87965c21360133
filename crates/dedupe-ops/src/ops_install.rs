//! Operation: run the package manager in every package directory.

use std::path::Path;

use dedupe_core::config::DedupeConfig;
use dedupe_core::workspace::Workspace;
use dedupe_util::log::LogSink;
use dedupe_util::process::CommandBuilder;

/// Run the configured install command in each package, in descriptor order.
///
/// `on_package` is called with the package name before its command starts.
/// Stops at the first failing command. Returns the number of packages installed.
pub fn install(
    root: &Path,
    config: &DedupeConfig,
    sink: &dyn LogSink,
    mut on_package: impl FnMut(&str),
) -> miette::Result<usize> {
    let workspace = Workspace::load(root, &config.descriptor)?;

    let mut count = 0;
    for package in &workspace.packages {
        let dir = workspace.package_dir(package);
        if !dir.is_dir() {
            sink.warn(
                "Skipping",
                format!("{}: {} does not exist", package.name(), dir.display()),
            );
            continue;
        }
        on_package(package.name());
        let cmd = CommandBuilder::new(config.install.program.clone())
            .args(config.install.args.iter().cloned())
            .cwd(&dir);
        cmd.exec_checked()?;
        sink.info("Installed", format!("{} ({})", package.name(), cmd.display()));
        count += 1;
    }
    Ok(count)
}
