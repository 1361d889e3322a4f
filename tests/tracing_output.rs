#![cfg(feature = "tracing")]

//! Log output emitted at the unwrap boundary when the `tracing` feature is on.

use std::io;
use std::panic;
use std::sync::{Arc, Mutex};

use clearwater::{Failure, Maybe, Outcome, Status};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
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

fn capture<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn failed_unwrap_is_logged_before_panicking() {
    let output = capture(|| {
        let result = panic::catch_unwind(|| Outcome::<i32, _>::fail(Failure::new("db down")).unwrap());
        assert!(result.is_err());
    });

    assert!(output.contains("ERROR"));
    assert!(output.contains("unwrapped a value that is not present"));
    assert!(output.contains("db down"));
}

#[test]
fn raised_payload_is_logged() {
    let output = capture(|| {
        let result = panic::catch_unwind(|| Maybe::<i32>::none().unwrap_or_raise(|| 7_u8));
        assert!(result.is_err());
    });

    assert!(output.contains("raising caller payload"));
}

#[test]
fn rejected_construction_is_logged() {
    let output = capture(|| {
        assert!(Status::<Failure>::try_fail(None).is_err());
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("rejected null or default constructor argument"));
    assert!(output.contains("error"));
}

#[test]
fn successful_paths_stay_quiet() {
    let output = capture(|| {
        assert_eq!(Outcome::<_, Failure>::ok(1).unwrap(), 1);
        assert_eq!(Maybe::some(2).unwrap(), 2);
    });

    assert!(output.is_empty());
}
