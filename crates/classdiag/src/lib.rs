//! Classdiag - the project's PlantUML class diagram, bundled and saved to disk.
//!
//! The crate carries a single diagram document as opaque text and writes it,
//! unchanged, to a destination file. The text is never parsed or rendered here;
//! rendering is left to PlantUML itself.
//!
//! # Examples
//!
//! ```rust,no_run
//! use classdiag::{DiagramDocument, DiagramWriter, OutputTarget};
//!
//! let writer = DiagramWriter::new(
//!     DiagramDocument::bundled(),
//!     OutputTarget::new("/tmp/class_diagram.puml"),
//! );
//! let target = writer.write().expect("Failed to write diagram");
//! println!("Class diagram saved to {}", target.path().display());
//! ```

pub mod config;

mod document;
mod error;
mod target;
mod writer;

pub use document::DiagramDocument;
pub use error::ClassDiagError;
pub use target::{DEFAULT_FILE_NAME, OutputTarget};
pub use writer::DiagramWriter;
