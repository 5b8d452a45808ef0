//! Office document templates (translates the `Document` prototype of the C++
//! catalogue).

use std::any::Any;
use std::fmt;

use dp_core::Prototype;

/// The closed set of document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentKind {
    /// A word-processing document.
    Word,
    /// A PDF document.
    Pdf,
    /// A slide presentation.
    PowerPoint,
    /// A spreadsheet.
    Excel,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentKind::Word => "Word Document",
            DocumentKind::Pdf => "PDF Document",
            DocumentKind::PowerPoint => "PowerPoint Presentation",
            DocumentKind::Excel => "Excel Spreadsheet",
        };
        f.write_str(s)
    }
}

/// A cloneable document template.
///
/// ```
/// use dp_prototype::{Document, DocumentKind, Prototype};
///
/// let template = Document::word_template("Quarterly Report");
/// let mut copy = template.clone();
/// copy.set_author("R. Santos");
/// assert_eq!(template.author(), "Unknown");
/// assert_eq!(copy.kind(), DocumentKind::Word);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    label: String,
    kind: DocumentKind,
    content: String,
    author: String,
    template: String,
    pages: Vec<String>,
}

impl Document {
    /// Create an empty document of the given kind.
    pub fn new(kind: DocumentKind, label: &str) -> Self {
        Document {
            label: label.to_string(),
            kind,
            content: String::new(),
            author: "Unknown".to_string(),
            template: "Default".to_string(),
            pages: Vec::new(),
        }
    }

    /// A word-processing template with boilerplate content.
    pub fn word_template(label: &str) -> Self {
        let mut doc = Document::new(DocumentKind::Word, label);
        doc.set_template("Microsoft Word Template");
        doc.set_content("This is a Word document template.");
        doc
    }

    /// A PDF template with boilerplate content.
    pub fn pdf_template(label: &str) -> Self {
        let mut doc = Document::new(DocumentKind::Pdf, label);
        doc.set_template("PDF Template");
        doc.set_content("This is a PDF document template.");
        doc
    }

    /// A presentation template pre-seeded with the standard four slides.
    pub fn presentation_template(label: &str) -> Self {
        let mut doc = Document::new(DocumentKind::PowerPoint, label);
        doc.set_template("PowerPoint Template");
        doc.set_content("This is a presentation template.");
        doc.add_page("Title Slide");
        doc.add_page("Introduction");
        doc.add_page("Content");
        doc.add_page("Conclusion");
        doc
    }

    /// A spreadsheet template with boilerplate content.
    pub fn spreadsheet_template(label: &str) -> Self {
        let mut doc = Document::new(DocumentKind::Excel, label);
        doc.set_template("Excel Template");
        doc.set_content("This is a spreadsheet template.");
        doc
    }

    /// The document kind.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The document body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The author. Defaults to `"Unknown"`.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The name of the template this document was built from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The pages appended so far.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Replace the document body.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    /// Set the author.
    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    /// Set the template name.
    pub fn set_template(&mut self, template: &str) {
        self.template = template.to_string();
    }

    /// Append a page.
    pub fn add_page(&mut self, page: &str) {
        self.pages.push(page.to_string());
    }
}

impl Prototype for Document {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let doc = Document::new(DocumentKind::Pdf, "manual");
        assert_eq!(doc.label(), "manual");
        assert_eq!(doc.author(), "Unknown");
        assert_eq!(doc.template(), "Default");
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn presentation_template_is_seeded() {
        let deck = Document::presentation_template("pitch");
        assert_eq!(deck.kind(), DocumentKind::PowerPoint);
        assert_eq!(deck.page_count(), 4);
        assert_eq!(deck.pages()[0], "Title Slide");
    }

    #[test]
    fn clone_does_not_alias_pages() {
        let mut original = Document::word_template("src");
        let mut copy = original.clone();

        original.add_page("only in original");
        copy.set_author("only in copy");

        assert_eq!(original.page_count(), 1);
        assert_eq!(copy.page_count(), 0);
        assert_eq!(original.author(), "Unknown");
        assert_eq!(copy.author(), "only in copy");
    }

    #[test]
    fn polymorphic_clone_roundtrips() {
        let original = Document::spreadsheet_template("sheet");
        let clone = original
            .clone_prototype()
            .into_any()
            .downcast::<Document>()
            .unwrap();
        assert_eq!(*clone, original);
    }

    #[test]
    fn kind_display() {
        assert_eq!(DocumentKind::Excel.to_string(), "Excel Spreadsheet");
    }
}
