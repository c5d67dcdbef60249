//! Diagnostics: the channel through which rendered types are reported.

mod collection;
mod message;
mod printer;

#[cfg(test)]
mod tests;

pub use collection::Diagnostics;
pub use message::{DiagnosticKind, DiagnosticMessage, Severity, Span};
pub use printer::DiagnosticsPrinter;
