use std::fmt;

use serde::{Deserialize, Serialize};

/// Byte range in the inspected source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// Rendered type of a marked site.
    Trace,
    /// Marker on a site that is neither an assignment nor a return.
    IgnoredMarker,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::Trace => Severity::Info,
            Self::IgnoredMarker => Severity::Warning,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::IgnoredMarker => "IgnoredMarker",
        }
    }

    /// Short label attached to the source span.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Trace => "type shown for this node",
            Self::IgnoredMarker => "not an assignment or return",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub span: Span,
    pub message: String,
}

impl DiagnosticMessage {
    pub fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            span,
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Message without the surrounding newlines of a framed rendering.
    pub fn body(&self) -> &str {
        self.message.trim_matches('\n')
    }

    /// Framed messages are meant to be shown as a separate block.
    pub fn is_block(&self) -> bool {
        self.message.starts_with('\n')
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] at {}:",
            self.severity,
            self.kind.title(),
            self.span
        )?;
        if self.is_block() {
            write!(f, "\n{}", self.body())
        } else {
            write!(f, " {}", self.body())
        }
    }
}
