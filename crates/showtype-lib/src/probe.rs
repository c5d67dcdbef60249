//! Marker-driven type reporting for analyzed sites.
//!
//! A host analyzer hands over the sites it visited (assignments, returns, ...)
//! together with their documentation comment and inferred type. Sites whose
//! comment carries the marker (`@show-type` by default) are reported as
//! `Trace` diagnostics holding the framed rendering of the type.
//!
//! Only assignments and return statements are inspected. A marker anywhere
//! else produces an `IgnoredMarker` warning instead of a trace.

use serde::{Deserialize, Serialize};
use showtype_core::{TypeCatalog, TypeUnion};

use crate::TypePrinter;
use crate::diagnostics::{DiagnosticKind, DiagnosticMessage, Diagnostics, Span};

pub const SHOW_TYPE_MARKER: &str = "@show-type";

/// Reported in place of a type when inference produced none.
pub const UNKNOWN_TYPE_MESSAGE: &str = "Unable to determine type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteKind {
    /// Variable assignment expression.
    Assign,
    /// Function return statement.
    Return,
    #[serde(other)]
    Other,
}

impl SiteKind {
    pub fn is_inspectable(self) -> bool {
        matches!(self, SiteKind::Assign | SiteKind::Return)
    }
}

/// One analyzed node, as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub kind: SiteKind,
    #[serde(default)]
    pub doc_comment: Option<String>,
    pub span: Span,
    /// Inferred type; `None` when inference failed.
    #[serde(default, rename = "type")]
    pub ty: Option<TypeUnion>,
}

/// Whether a documentation comment carries the marker. An empty marker never matches.
pub fn has_show_marker(doc_comment: Option<&str>, marker: &str) -> bool {
    !marker.is_empty() && doc_comment.is_some_and(|doc| doc.contains(marker))
}

/// Turns marked sites into diagnostics.
pub struct Probe<'c> {
    printer: TypePrinter<'c>,
    marker: String,
}

impl<'c> Probe<'c> {
    pub fn new(catalog: &'c dyn TypeCatalog) -> Self {
        Self {
            printer: TypePrinter::new(catalog),
            marker: SHOW_TYPE_MARKER.to_string(),
        }
    }

    /// Set the marker searched for in documentation comments (default: `@show-type`).
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Report for a single site, or `None` when the site is not marked.
    pub fn inspect(&self, site: &Site) -> Option<DiagnosticMessage> {
        if !has_show_marker(site.doc_comment.as_deref(), &self.marker) {
            return None;
        }

        if !site.kind.is_inspectable() {
            tracing::trace!(span = %site.span, "marker on a site that is never inspected");
            return Some(DiagnosticMessage::new(
                DiagnosticKind::IgnoredMarker,
                site.span,
                format!(
                    "`{}` only applies to assignments and return statements",
                    self.marker
                ),
            ));
        }

        let message = match &site.ty {
            Some(ty) => self.printer.render(ty),
            None => {
                tracing::trace!(span = %site.span, "marked site has no inferred type");
                UNKNOWN_TYPE_MESSAGE.to_string()
            }
        };
        Some(DiagnosticMessage::new(DiagnosticKind::Trace, site.span, message))
    }

    /// Reports for all marked sites, in input order.
    #[tracing::instrument(level = "debug", skip_all, fields(sites = sites.len()))]
    pub fn inspect_all(&self, sites: &[Site]) -> Diagnostics {
        let diagnostics: Diagnostics = sites.iter().filter_map(|site| self.inspect(site)).collect();
        tracing::debug!(
            reported = diagnostics.len(),
            warnings = diagnostics.warning_count(),
            "probe finished"
        );
        diagnostics
    }
}
