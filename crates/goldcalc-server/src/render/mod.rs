//! Rendering collaborators: HTML templates and HTML-to-PDF conversion.

pub mod markup;
pub mod pdf;
pub mod templates;

pub use pdf::{PdfRenderer, TextLayoutPdf};
pub use templates::{IndexPage, Templates};
