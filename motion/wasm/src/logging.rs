//! `tracing` output routed to the browser console.
//!
//! Lines are formatted by `tracing-subscriber`'s fmt layer (no timestamps, no
//! ANSI) and handed to `console.error`/`warn`/`info`/`debug` by level.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let msg = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&msg),
            Level::WARN => web_sys::console::warn_1(&msg),
            Level::INFO => web_sys::console::info_1(&msg),
            _ => web_sys::console::debug_1(&msg),
        }
    }
}

/// [`MakeWriter`] producing one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. Later calls are no-ops.
pub fn init(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    let _ = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(filter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}
