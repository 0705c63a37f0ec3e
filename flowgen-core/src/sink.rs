//! Destinations for generated edge lists.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{edge::EdgeList, error::SinkError};

/// Receives a finished edge list and persists it.
pub trait EdgeSink {
    /// Writes every edge of `edges`.
    ///
    /// # Errors
    /// Returns [`SinkError`] when the destination cannot be written.
    fn write_edges(&mut self, edges: &EdgeList) -> Result<(), SinkError>;
}

/// Writes an edge list to a file, replacing it atomically.
///
/// Lines go to `<path>.part` in the destination directory, which is flushed,
/// synced and renamed over `path` once complete. A failed write removes the
/// partial file so no truncated edge list is left behind.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// use flowgen_core::{Edge, EdgeList, EdgeSink, FileSink, Vertex};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// # let dir = TempDir::new()?;
/// let path = dir.path().join("graph.txt");
/// let mut edges = EdgeList::new();
/// edges.push(Edge::new(Vertex::Source, Vertex::Sink, 3));
/// FileSink::new(&path).write_edges(&edges)?;
/// assert_eq!(std::fs::read_to_string(&path)?, "s t 3\n");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink targeting `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn part_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(ToOwned::to_owned).unwrap_or_default();
        name.push(".part");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl EdgeSink for FileSink {
    #[instrument(
        name = "sink.file",
        err,
        skip(self, edges),
        fields(path = %self.path.display(), edges = edges.len()),
    )]
    fn write_edges(&mut self, edges: &EdgeList) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let part_path = self.part_path();
        if let Err(source) = write_synced(&part_path, edges) {
            discard(&part_path);
            return Err(self.io_error(source));
        }
        if let Err(source) = fs::rename(&part_path, &self.path) {
            discard(&part_path);
            return Err(self.io_error(source));
        }

        debug!("edge list persisted");
        Ok(())
    }
}

fn write_synced(path: &Path, edges: &EdgeList) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    edges.write_to(&mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn discard(path: &Path) {
    // The partial file may never have been created.
    if let Err(err) = fs::remove_file(path) {
        if err.kind() != io::ErrorKind::NotFound {
            debug!(path = %path.display(), error = %err, "failed to remove partial edge list");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::{Edge, Vertex};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn sample_edges() -> EdgeList {
        let mut edges = EdgeList::new();
        edges.push(Edge::new(Vertex::Source, Vertex::internal(1), 2));
        edges.push(Edge::new(Vertex::internal(1), Vertex::Sink, 5));
        edges
    }

    #[test]
    fn part_path_appends_suffix_to_the_file_name() {
        let sink = FileSink::new("out/graph.txt");
        assert_eq!(sink.part_path(), PathBuf::from("out/graph.txt.part"));
    }

    #[test]
    fn writes_lines_and_leaves_no_partial_file() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("mesh.txt");
        FileSink::new(&path).write_edges(&sample_edges())?;
        assert_eq!(fs::read_to_string(&path)?, "s v1 2\nv1 t 5\n");
        assert!(!dir.path().join("mesh.txt.part").exists());
        Ok(())
    }

    #[test]
    fn creates_missing_parent_directories() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("Mesh").join("nested").join("graph.txt");
        FileSink::new(&path).write_edges(&sample_edges())?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn replaces_an_existing_file() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("graph.txt");
        fs::write(&path, "stale contents\n")?;
        FileSink::new(&path).write_edges(&sample_edges())?;
        assert_eq!(fs::read_to_string(&path)?, "s v1 2\nv1 t 5\n");
        Ok(())
    }

    #[test]
    fn reports_the_destination_when_the_path_is_a_directory() -> TestResult {
        let dir = TempDir::new()?;
        let target = dir.path().join("occupied");
        fs::create_dir(&target)?;
        let err = FileSink::new(&target)
            .write_edges(&sample_edges())
            .expect_err("renaming over a directory must fail");
        let SinkError::Io { path, .. } = &err;
        assert_eq!(path, &target);
        assert_eq!(err.code(), crate::SinkErrorCode::Io);
        assert!(!dir.path().join("occupied.part").exists());
        Ok(())
    }
}
