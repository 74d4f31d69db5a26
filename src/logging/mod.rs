//! Console and log-file output.
//!
//! Everything goes through `tracing`: [`Logger`] emits events, and the
//! subscriber from [`init_subscriber`] renders them twice, styled on the
//! terminal and timestamped in `<cache>/devtools-setup/<command>.log`.

mod logger;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{Log, TaskEntry, TaskStatus};

/// A [`Logger`] whose events land in `<tmp>/test.log` through a
/// thread-local subscriber.
///
/// Keep all three values alive for the length of the test: dropping the
/// guard uninstalls the subscriber, dropping the dir deletes the file.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) fn isolated_logger() -> (Logger, tempfile::TempDir, tracing::dispatcher::DefaultGuard) {
    use tracing_subscriber::Layer as _;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt as _;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.log");
    let layer = subscriber::FileLayer::at(&path).expect("open test log");
    let dispatch = tracing::Dispatch::new(
        tracing_subscriber::registry().with(layer.with_filter(LevelFilter::DEBUG)),
    );
    let guard = tracing::dispatcher::set_default(&dispatch);
    (Logger::with_log_file(Some(path)), dir, guard)
}
