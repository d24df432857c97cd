//! Append-only JSONL file for one session.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::SessionLogEntry;

/// Writes `<logs_dir>/raw/<date>_<session>.jsonl`.
pub struct SessionLogWriter {
    session: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl SessionLogWriter {
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> io::Result<Self> {
        let session = session.into();
        let raw_dir = logs_dir.as_ref().join("raw");
        fs::create_dir_all(&raw_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = raw_dir.join(format!("{date}_{session}.jsonl"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            session,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry and flush, so the file is readable while the app runs.
    pub fn write(&self, entry: &SessionLogEntry) -> io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{json}")?;
        writer.flush()
    }

    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

impl Drop for SessionLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Read every entry of a session file. Lines that fail to parse are skipped.
pub fn read_entries(path: impl AsRef<Path>) -> io::Result<Vec<SessionLogEntry>> {
    let file = File::open(path)?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = SessionLogEntry::from_json_line(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_is_named_by_date_and_session() {
        let temp = TempDir::new().unwrap();
        let writer = SessionLogWriter::new(temp.path(), "alice").unwrap();
        let name = writer.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.ends_with("_alice.jsonl"));
        assert_eq!(writer.path().parent().unwrap(), temp.path().join("raw"));
    }

    #[test]
    fn appends_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let writer = SessionLogWriter::new(temp.path(), "default").unwrap();
        writer
            .write(&SessionLogEntry::new("info", "default", "t", "first"))
            .unwrap();
        writer
            .write(&SessionLogEntry::new("debug", "default", "t", "second"))
            .unwrap();

        let entries = read_entries(writer.path()).unwrap();
        let msgs: Vec<_> = entries.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(msgs, ["first", "second"]);
    }
}
