use std::{fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::error::DashboardError;

pub const DEFAULT_DIRECTIVE: &str = "smartclass360=info";

/// `RUST_LOG` when set and valid, otherwise info for this crate.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Sends log output to `path`; the terminal belongs to the dashboard.
pub fn init(path: &Path) -> Result<(), DashboardError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| DashboardError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| DashboardError::Subscriber(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    use crate::record::{Record, Scores};
    use crate::roster::Roster;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            BufferWriter(Arc::clone(&self.0))
        }
    }

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut guard = self
                .0
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
            guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn duplicate_insert_is_logged_with_its_id() {
        let sink = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .with_ansi(false)
            .with_max_level(Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut roster = Roster::new();
            assert!(roster.insert(Record::new("Hina", 2, Scores::new())));
            assert!(!roster.insert(Record::new("Other", 2, Scores::new())));
        });

        let bytes = sink.0.lock().expect("lock output").clone();
        let text = String::from_utf8(bytes).expect("utf8 log output");
        let rejected = text
            .lines()
            .find(|l| l.contains("rejected duplicate roll number"))
            .expect("rejection logged");
        assert!(rejected.contains("DEBUG"));
        assert!(rejected.contains("id=2"));
    }

    #[test]
    fn default_directive_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(super::DEFAULT_DIRECTIVE).is_ok());
    }
}
