//! Whole-file access to one line-oriented backing file.
//!
//! Readers go straight to disk without locking. Every mutation runs through
//! [`FlatFile::mutate`], which holds the file's exclusive lock for the full
//! read, transform and rewrite cycle.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::{fs, sync::Mutex};

use crate::dao::{
    codec::{FormatError, is_blank},
    storage::{StoreError, StoreResult},
};

/// A non-blank line of a backing file along with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

/// Outcome of a transform passed to [`FlatFile::mutate`].
pub struct Rewrite<T> {
    /// Full replacement content, one record per entry.
    pub lines: Vec<String>,
    /// Value handed back to the caller once the file is written.
    pub output: T,
}

/// Handle over a single backing file and its writer lock.
#[derive(Debug)]
pub struct FlatFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FlatFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file (and its parent directories) when it does not exist yet.
    pub async fn ensure_exists(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::io(parent, source))?;
        }

        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map(drop)
            .map_err(|source| StoreError::io(&self.path, source))
    }

    /// Read every non-blank line of the file.
    pub async fn read_lines(&self) -> StoreResult<Vec<Line>> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::io(&self.path, source))?;
        Ok(split_lines(&contents))
    }

    /// Read and decode every record, aborting on the first malformed line.
    pub async fn load_records<T>(
        &self,
        decode: impl Fn(&str) -> Result<T, FormatError>,
    ) -> StoreResult<Vec<T>> {
        self.read_lines()
            .await?
            .iter()
            .map(|line| self.decode_line(line, &decode))
            .collect()
    }

    /// Decode a single line, attaching this file's path and the line number on failure.
    pub fn decode_line<T>(
        &self,
        line: &Line,
        decode: impl Fn(&str) -> Result<T, FormatError>,
    ) -> StoreResult<T> {
        decode(&line.text).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            line: line.number,
            source,
        })
    }

    /// Run one exclusive read-transform-rewrite cycle.
    ///
    /// A missing file reads as empty. When `transform` fails nothing is written.
    pub async fn mutate<T>(
        &self,
        transform: impl FnOnce(Vec<Line>) -> StoreResult<Rewrite<T>>,
    ) -> StoreResult<T> {
        let _guard = self.write_lock.lock().await;

        let lines = match fs::read_to_string(&self.path).await {
            Ok(contents) => split_lines(&contents),
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::io(&self.path, source)),
        };

        let Rewrite { lines, output } = transform(lines)?;
        self.rewrite(&lines).await?;
        Ok(output)
    }

    async fn rewrite(&self, lines: &[String]) -> StoreResult<()> {
        let mut contents = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines.iter().filter(|line| !is_blank(line)) {
            contents.push_str(line);
            contents.push('\n');
        }

        fs::write(&self.path, contents)
            .await
            .map_err(|source| StoreError::io(&self.path, source))
    }
}

fn split_lines(contents: &str) -> Vec<Line> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, text)| !is_blank(text))
        .map(|(index, text)| Line {
            number: index + 1,
            text: text.to_string(),
        })
        .collect()
}
