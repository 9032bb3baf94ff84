//! Section composition: maps a flat resume record plus custom sections onto
//! an ordered sequence of render instructions.
//!
//! Pure and infallible: malformed input degrades to fewer or blanker
//! instructions, never to an error. Ordering is fixed: contact block, then
//! the canonical content fields, then custom sections in input order.

use serde::{Deserialize, Serialize};

use crate::models::resume::{CustomSection, ResumeRecord};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Style directive attached to each instruction, telling the renderer how to
/// set the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Single contact line at contact size, no heading.
    ContactLine,
    /// Wrapped contact block (the postal address), no heading.
    ContactBlock,
    /// Titled section: bold heading in the theme color, regular body.
    Section,
}

/// One ordered, titled block of text, the unit consumed by the page-layout
/// renderer. Contact instructions carry an empty title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInstruction {
    pub title: String,
    pub body: String,
    pub emphasis: Emphasis,
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// Composes the ordered render-instruction sequence for a resume.
///
/// Required-field validation happens at the form boundary; if name, email or
/// phone are empty the contact line still renders with empty segments.
/// Style concerns (font, theme color, template) never influence which
/// sections are emitted, so they flow straight to the renderer instead of
/// through here.
pub fn compose(record: &ResumeRecord, custom: &[CustomSection]) -> Vec<RenderInstruction> {
    let mut out = Vec::new();

    out.push(contact_line(format!(
        "Email: {} | Phone: {}",
        record.email, record.phone
    )));
    if !record.linkedin.is_empty() {
        out.push(contact_line(format!("LinkedIn: {}", record.linkedin)));
    }
    if !record.github.is_empty() {
        out.push(contact_line(format!("GitHub: {}", record.github)));
    }
    if !record.address.is_empty() {
        out.push(RenderInstruction {
            title: String::new(),
            body: format!("Address: {}", record.address),
            emphasis: Emphasis::ContactBlock,
        });
    }

    for (field, value) in record.content_fields() {
        if !value.is_empty() {
            out.push(RenderInstruction {
                title: section_title(field),
                body: value.to_string(),
                emphasis: Emphasis::Section,
            });
        }
    }

    for section in custom {
        // Half-filled custom sections are dropped entirely, never rendered
        // with blanks.
        if section.title.is_empty() || section.body.is_empty() {
            continue;
        }
        out.push(RenderInstruction {
            title: section.title.to_uppercase(),
            body: section.body.clone(),
            emphasis: Emphasis::Section,
        });
    }

    out
}

fn contact_line(body: String) -> RenderInstruction {
    RenderInstruction {
        title: String::new(),
        body,
        emphasis: Emphasis::ContactLine,
    }
}

/// Field identifier to section heading: upper-cased, underscores to spaces.
fn section_title(field: &str) -> String {
    field.to_uppercase().replace('_', " ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
