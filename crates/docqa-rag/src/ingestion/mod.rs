//! Upload parsing

pub mod parser;

pub use parser::{ParsedPdf, PdfParser};
