//! Layout diagnostics collected while rendering.
//!
//! Renderers never fail on layout problems: an element that would spill
//! out of its section is skipped, and a diagnostic records what was
//! dropped so callers can decide whether the layout needs attention.

use crate::catalog::ScreenKind;
use std::fmt;

/// Severity of a layout finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Content was dropped from the image.
    Warning,
    /// Informational; the image is complete.
    Info,
}

/// A single finding for one rendered screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDiagnostic {
    /// Screen being drawn when the finding was raised.
    pub screen: ScreenKind,
    /// Short element identifier (e.g. "fab", "share-option").
    pub element: &'static str,
    /// Human-readable message.
    pub message: String,
    pub severity: Severity,
}

impl LayoutDiagnostic {
    /// An element skipped because its bottom edge passed `limit`.
    pub fn overflow(screen: ScreenKind, element: &'static str, bottom: f32, limit: f32) -> Self {
        Self {
            screen,
            element,
            message: format!(
                "`{element}` skipped: bottom edge {bottom} exceeds available space ({limit})"
            ),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for LayoutDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.screen, self.message)
    }
}

/// Sink for diagnostics raised while drawing one screenshot.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<LayoutDiagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding; warnings are also logged.
    pub fn push(&mut self, diag: LayoutDiagnostic) {
        match diag.severity {
            Severity::Warning => log::warn!("{diag}"),
            Severity::Info => log::debug!("{diag}"),
        }
        self.items.push(diag);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutDiagnostic> {
        self.items.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<LayoutDiagnostic> {
        self.items
    }
}
