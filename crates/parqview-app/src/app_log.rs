use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

const MAX_LOG_LINES: usize = 2000;

static LOG_BUFFER: OnceLock<Arc<Mutex<VecDeque<String>>>> = OnceLock::new();

fn buffer() -> Arc<Mutex<VecDeque<String>>> {
    LOG_BUFFER.get_or_init(|| Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_LINES)))).clone()
}

fn commit_line(line: &str) {
    if line.is_empty() {
        return;
    }
    let buf = buffer();
    let Ok(mut guard) = buf.lock() else { return };
    guard.push_back(line.to_string());
    while guard.len() > MAX_LOG_LINES {
        let _ = guard.pop_front();
    }
}

/// The last `limit` log lines, oldest first. Printed after the terminal is
/// restored when the app exits with an error.
pub fn recent_lines(limit: usize) -> Vec<String> {
    let buf = buffer();
    let guard = match buf.lock() {
        Ok(g) => g,
        Err(_) => return Vec::new(),
    };
    let skip = guard.len().saturating_sub(limit);
    guard.iter().skip(skip).cloned().collect()
}

/// Appends formatted log lines to the debug log file and keeps a copy of the
/// most recent ones in memory. The terminal owns stdout while the UI runs, so
/// nothing is written there.
#[derive(Clone)]
pub struct AppLogMakeWriter {
    file: Arc<Mutex<File>>,
}

impl AppLogMakeWriter {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file: Arc::new(Mutex::new(file)) })
    }
}

impl<'a> MakeWriter<'a> for AppLogMakeWriter {
    type Writer = AppLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        AppLogWriter { file: Arc::clone(&self.file), line_buf: String::new() }
    }
}

/// Collects bytes until a full line arrives; the formatter may split one event
/// over several `write()` calls.
pub struct AppLogWriter {
    file: Arc<Mutex<File>>,
    line_buf: String,
}

impl AppLogWriter {
    fn emit(&self, line: &str) -> io::Result<()> {
        commit_line(line);
        let mut file = self.file.lock().map_err(|_| io::Error::other("log file lock poisoned"))?;
        writeln!(file, "{line}")
    }
}

impl Write for AppLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.line_buf.push_str(&text);

        while let Some(pos) = self.line_buf.find('\n') {
            let line = self.line_buf.drain(..=pos).collect::<String>();
            self.emit(line.trim_end_matches('\n'))?;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.line_buf.is_empty() {
            let line = std::mem::take(&mut self.line_buf);
            self.emit(line.trim_end_matches('\n'))?;
        }
        let mut file = self.file.lock().map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.flush()
    }
}

impl Drop for AppLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
