//! Persisting a diagram document to its destination.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use log::{debug, info};

use crate::{ClassDiagError, DiagramDocument, OutputTarget};

/// Writes a fixed [`DiagramDocument`] to a fixed [`OutputTarget`].
///
/// Each call to [`write`](Self::write) creates or truncates the destination
/// and fills it with the document text. Parent directories are never created.
#[derive(Debug, Clone, Default)]
pub struct DiagramWriter {
    document: DiagramDocument,
    target: OutputTarget,
}

impl DiagramWriter {
    /// Create a writer for the given document and destination.
    pub fn new(document: DiagramDocument, target: OutputTarget) -> Self {
        Self { document, target }
    }

    /// Returns the document this writer persists.
    pub fn document(&self) -> &DiagramDocument {
        &self.document
    }

    /// Returns the destination this writer persists to.
    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Write the document to the destination.
    ///
    /// The file handle is released when this function returns, on success
    /// and on error alike. A failed write is not retried and nothing is
    /// cleaned up.
    ///
    /// # Errors
    ///
    /// Returns [`ClassDiagError::Write`], naming the destination, when the
    /// destination directory does not exist, when permission is denied, or
    /// when the disk is full. A permission failure happens at open time, so
    /// an existing file is left untouched.
    pub fn write(&self) -> Result<&OutputTarget, ClassDiagError> {
        let path = self.target.path();
        debug!(path = path.display().to_string(); "Opening destination");

        let write_error = |err: io::Error| ClassDiagError::new_write_error(path, err);

        let mut file = BufWriter::new(File::create(path).map_err(write_error)?);
        file.write_all(self.document.as_bytes()).map_err(write_error)?;
        file.flush().map_err(write_error)?;

        info!(
            path = path.display().to_string(),
            bytes = self.document.len();
            "Diagram written"
        );

        Ok(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::ErrorKind};

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_write_is_byte_identical() {
        let dir = tempdir().unwrap();
        let target = OutputTarget::new(dir.path().join("class_diagram.puml"));
        let writer = DiagramWriter::new(DiagramDocument::bundled(), target);

        let written = writer.write().unwrap();

        let content = fs::read(written.path()).unwrap();
        assert_eq!(content, DiagramDocument::bundled().as_bytes());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("class_diagram.puml");
        fs::write(&path, "stale content that is much longer than the payload ".repeat(200))
            .unwrap();

        let writer = DiagramWriter::new(
            DiagramDocument::new("@startuml\n@enduml\n"),
            OutputTarget::new(&path),
        );
        writer.write().unwrap();
        writer.write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "@startuml\n@enduml\n");
    }

    #[test]
    fn test_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("class_diagram.puml");
        let writer = DiagramWriter::new(DiagramDocument::bundled(), OutputTarget::new(&path));

        let err = writer.write().unwrap_err();

        assert!(err.to_string().contains("class_diagram.puml"), "{err}");
        match err {
            ClassDiagError::Write { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("Expected Write error, got {other:?}"),
        }
        assert!(!path.exists());
        assert!(!dir.path().join("missing").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_destination_left_unmodified() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("class_diagram.puml");
        fs::write(&path, "previous").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        // Privileged users bypass file modes, so there is nothing to observe
        if fs::OpenOptions::new().write(true).open(&path).is_ok() {
            eprintln!(
                "skipping test_read_only_destination_left_unmodified: \
                 process can write read-only files (running as root?)"
            );
            return;
        }

        let writer = DiagramWriter::new(DiagramDocument::bundled(), OutputTarget::new(&path));
        let err = writer.write().unwrap_err();

        assert!(matches!(
            err,
            ClassDiagError::Write { ref source, .. } if source.kind() == ErrorKind::PermissionDenied
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_default_writer_uses_bundled_document() {
        let writer = DiagramWriter::default();

        assert_eq!(writer.document(), &DiagramDocument::bundled());
        assert_eq!(writer.target(), &OutputTarget::default_location());
    }
}
