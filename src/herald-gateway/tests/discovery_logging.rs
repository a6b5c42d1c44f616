//! Discovery failure reporting through tracing.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use herald_gateway::{DiscoveryReport, DiscoveryUnit, Registry};
use tracing_subscriber::fmt::writer::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buffer: self.buffer.clone(),
        }
    }
}

fn units(healthy: &Arc<AtomicUsize>) -> Vec<DiscoveryUnit> {
    let counter = healthy.clone();
    vec![
        DiscoveryUnit::new("bots.commands.", "Broken", |_| {
            anyhow::bail!("static initializer exploded")
        }),
        DiscoveryUnit::new("bots.commands.", "Healthy", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
        DiscoveryUnit::new("bots.other.", "Ignored", |_| {
            anyhow::bail!("must never run")
        }),
    ]
}

fn discover_with_logs(log_errors: bool) -> (DiscoveryReport, usize, String) {
    let healthy = Arc::new(AtomicUsize::new(0));
    let units = units(&healthy);

    let mut registry = Registry::new();
    registry.add_search_path("bots.commands.").unwrap();
    registry.set_error_logging(log_errors);

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let report = tracing::subscriber::with_default(subscriber, || registry.discover(&units));
    (report, healthy.load(Ordering::SeqCst), logs.contents())
}

#[test]
fn test_failure_is_silent_without_error_logging() {
    let (report, healthy, logs) = discover_with_logs(false);

    assert_eq!(report.matched, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(healthy, 1);
    assert!(!logs.contains("static initializer exploded"));
    assert!(!logs.contains("must never run"));
}

#[test]
fn test_failure_is_logged_with_error_logging() {
    let (report, healthy, logs) = discover_with_logs(true);

    assert_eq!(report.failed, 1);
    assert_eq!(report.initialized, 1);
    assert_eq!(healthy, 1);
    assert!(logs.contains("Failed to initialize discovery unit"));
    assert!(logs.contains("bots.commands.Broken"));
    assert!(logs.contains("static initializer exploded"));
    assert!(!logs.contains("must never run"));
}
