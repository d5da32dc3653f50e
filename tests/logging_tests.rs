//! Log output of the lenient read paths.
//!
//! Unreadable JSON and TTL payloads are reported through `tracing` instead of
//! being returned as errors.

use kvstash::Storage;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
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

fn with_captured_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_unparseable_json_is_logged() {
    let storage = Storage::memory();
    storage.set("prefs", "not json{").unwrap();

    let output = with_captured_logs(|| {
        let value: Option<serde_json::Value> = storage.get_json("prefs").unwrap();
        assert!(value.is_none());
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("prefs"));
}

#[test]
fn test_unreadable_ttl_value_is_logged() {
    let storage = Storage::memory();
    storage.set("session", "{\"value\":\"v\"}").unwrap();

    let output = with_captured_logs(|| {
        assert!(storage.get_with_ttl("session").unwrap().is_none());
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("session"));
}

#[test]
fn test_absent_key_logs_nothing_at_warn() {
    let storage = Storage::memory();

    let output = with_captured_logs(|| {
        assert!(storage.get_json::<u32>("missing").unwrap().is_none());
        assert!(storage.get_with_ttl("missing").unwrap().is_none());
    });

    assert!(!output.contains("WARN"));
}
