//! The diagram document carried by this crate.

use std::{borrow::Cow, fmt};

/// PlantUML source of the project's class diagram.
const BUNDLED_CLASS_DIAGRAM: &str = include_str!("../assets/class_diagram.puml");

/// An immutable block of diagram-notation text.
///
/// The content is fixed at construction and treated as opaque payload: it is
/// never parsed, validated or rewritten. Whatever goes in is exactly what a
/// [`DiagramWriter`](crate::DiagramWriter) puts on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramDocument {
    content: Cow<'static, str>,
}

impl DiagramDocument {
    /// Creates a document from arbitrary text.
    pub fn new(content: impl Into<Cow<'static, str>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the class diagram bundled with the crate.
    ///
    /// The text starts with a newline and ends with `@enduml\n`, exactly as
    /// it was authored.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_CLASS_DIAGRAM)
    }

    /// Returns the document text.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns the document text as UTF-8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Returns the length of the document in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the document holds no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for DiagramDocument {
    fn default() -> Self {
        Self::bundled()
    }
}

impl fmt::Display for DiagramDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_delimiters() {
        let doc = DiagramDocument::bundled();

        assert!(doc.as_str().starts_with("\n@startuml ChatGPT_Class_Diagram\n"));
        assert!(doc.as_str().ends_with("@enduml\n"));
        assert_eq!(doc.len(), 3001);
    }

    #[test]
    fn test_bundled_keeps_whitespace_lines() {
        let doc = DiagramDocument::bundled();

        // Blank separators inside package blocks are indented, not empty
        assert!(doc.as_str().contains("    }\n    \n    class Message {"));
    }

    #[test]
    fn test_bundled_lists_every_class() {
        let doc = DiagramDocument::bundled();
        let classes = doc
            .as_str()
            .lines()
            .filter(|line| line.trim_start().starts_with("class "))
            .count();

        assert_eq!(classes, 13);
        assert!(doc.as_str().contains("ChatInterface --> ConfigManager"));
    }

    #[test]
    fn test_display_is_verbatim() {
        let doc = DiagramDocument::new("@startuml\nA --> B\n@enduml\n");

        assert_eq!(doc.to_string(), "@startuml\nA --> B\n@enduml\n");
        assert_eq!(doc.as_bytes(), b"@startuml\nA --> B\n@enduml\n");
    }

    #[test]
    fn test_empty_document() {
        let doc = DiagramDocument::new(String::new());

        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
