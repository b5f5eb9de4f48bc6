//! Per-call execution timing for repository operations.

use chrono::Local;
use std::time::{Duration, Instant};
use strum::{Display, IntoStaticStr};

/// Repository operations that get timed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum Operation {
    CreateProduct,
    DeleteProduct,
    GetProduct,
    GetProductByCategory,
    GetProductByName,
    GetProducts,
    UpdateProduct,
}

/// Timer started right before a store call
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Sink for operation timings
pub trait ExecutionLog: Send + Sync {
    /// Record one finished operation; `detail` carries the failure message, if any
    fn record(&self, operation: Operation, elapsed: Duration, detail: Option<&str>);
}

/// Writes timings as `tracing` debug events
///
/// ```text
/// <<GetProduct>> ran for <<3>> ms at 2024-05-01 10:15:42.120.
/// Additional Info : connection refused
/// ```
///
/// The second line is only written for a non-blank detail.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingExecutionLog;

impl ExecutionLog for TracingExecutionLog {
    fn record(&self, operation: Operation, elapsed: Duration, detail: Option<&str>) {
        tracing::debug!(
            "<<{}>> ran for <<{}>> ms at {}.",
            operation,
            elapsed.as_millis(),
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        );

        if let Some(detail) = detail.filter(|d| !d.trim().is_empty()) {
            tracing::debug!("Additional Info : {}", detail);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory writer for asserting emitted log lines
    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
            tracing_subscriber::fmt()
                .with_writer(self.clone())
                .with_max_level(tracing::Level::DEBUG)
                .with_ansi(false)
                .with_target(false)
                .without_time()
                .finish()
        }

        pub fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }
}
