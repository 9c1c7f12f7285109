//! Rolling Logger
//!
//! A `tracing-subscriber` formatter whose lines go to the browser console
//! (stderr off wasm) and into a bounded in-memory buffer. `log` records are
//! bridged in, so `log::info!` and `tracing::info!` end up in the same place.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Lines kept by `init_logger`
pub const DEFAULT_CAPACITY: usize = 500;

static BUFFER: OnceLock<RingBuffer> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Last `capacity` log lines, oldest first
#[derive(Debug, Clone)]
pub struct RingBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Collects one formatted event and emits it line by line when dropped
pub struct LineWriter {
    buffer: RingBuffer,
    level: Level,
    pending: Vec<u8>,
}

impl LineWriter {
    fn new(buffer: RingBuffer, level: Level) -> Self {
        Self {
            buffer,
            level,
            pending: Vec::new(),
        }
    }
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.pending);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            emit(self.level, line);
            self.buffer.push(line.to_string());
        }
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: RingBuffer,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter::new(self.buffer.clone(), Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter::new(self.buffer.clone(), *meta.level())
    }
}

/// `[HH:MM:SS.mmm]` in local time
struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "[{}]", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

fn level_filter(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

/// Install the global subscriber and the `log` bridge. Call once at startup.
pub fn init_logger(app_name: &str, level: log::LevelFilter) -> Result<(), LoggerError> {
    let buffer = RingBuffer::new(DEFAULT_CAPACITY);
    BUFFER
        .set(buffer.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing_subscriber::fmt()
        .with_max_level(level_filter(level))
        .with_ansi(false)
        .with_timer(ClockTime)
        .with_writer(BufferMakeWriter { buffer })
        .finish()
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    tracing::info!("{} logging started", app_name);
    Ok(())
}

/// Lines kept since `init_logger`, oldest first
pub fn recent_lines() -> Vec<String> {
    BUFFER.get().map(RingBuffer::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let buffer = RingBuffer::new(3);
        for n in 0..5 {
            buffer.push(format!("line {}", n));
        }
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let buffer = RingBuffer::new(0);
        buffer.push("x".to_string());
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_writer_splits_lines_on_drop() {
        let buffer = RingBuffer::new(10);
        {
            let mut writer = LineWriter::new(buffer.clone(), Level::WARN);
            writer.write_all(b"first\n").unwrap();
            writer.write_all(b"second\n\n").unwrap();
            assert!(buffer.lines().is_empty());
        }
        assert_eq!(buffer.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_init_captures_log_records() {
        init_logger("test", log::LevelFilter::Debug).unwrap();
        log::warn!("catalog fallback engaged");

        let lines = recent_lines();
        let line = lines
            .iter()
            .find(|l| l.contains("catalog fallback engaged"))
            .expect("record captured");
        assert!(line.starts_with('['));
        assert!(line.contains("WARN"));

        assert!(matches!(
            init_logger("again", log::LevelFilter::Info),
            Err(LoggerError::AlreadyInitialized)
        ));
    }
}
