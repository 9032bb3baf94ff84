//! PDF rendering backend over printpdf builtin fonts.
//!
//! Layout is a single-column flow on A4: a centered title header repeated on
//! every page, contact lines, then titled sections. The cursor tracks
//! millimetres from the top edge and is flipped into PDF bottom-up
//! coordinates at draw time. Line wrapping uses per-font average glyph
//! widths; exact metrics are overkill at these sizes.

use printpdf::image_crate::GenericImageView;
use printpdf::{
    Color, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};
use thiserror::Error;

use crate::builder::composer::{Emphasis, RenderInstruction};
use crate::render::style::{FontChoice, StyleConfig};

const PAGE_W_MM: f32 = 210.0;
const PAGE_H_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_H_MM: f32 = 10.0;
const BOTTOM_LIMIT_MM: f32 = PAGE_H_MM - 15.0;

const TITLE_PT: f32 = 16.0;
const HEADING_PT: f32 = 13.0;
const BODY_PT: f32 = 12.0;
const CONTACT_PT: f32 = 11.0;

/// Millimetres per typographic point.
const MM_PER_PT: f32 = 0.352_778;

/// Profile photo box: fixed position top-right, fixed size.
const PHOTO_X_MM: f32 = 170.0;
const PHOTO_TOP_MM: f32 = 8.0;
const PHOTO_SIZE_MM: f32 = 25.0;
const PHOTO_DPI: f32 = 300.0;

const BLACK: (u8, u8, u8) = (0, 0, 0);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf backend error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("could not decode profile image: {0}")]
    Image(#[from] printpdf::image_crate::ImageError),
}

/// Renders the instruction sequence into PDF bytes.
///
/// `title` is the page-header line (the record's name); when empty, no
/// header is drawn on any page. The optional profile image (JPEG or PNG
/// bytes) lands in a fixed 25x25mm box at the top right of page one.
pub fn render_pdf(
    title: &str,
    instructions: &[RenderInstruction],
    style: &StyleConfig,
    profile_image: Option<&[u8]>,
) -> Result<Vec<u8>, RenderError> {
    let (doc, page, layer) =
        PdfDocument::new("Resume", Mm(PAGE_W_MM), Mm(PAGE_H_MM), "Layer 1");
    let regular = doc.add_builtin_font(style.font.regular())?;
    let bold = doc.add_builtin_font(style.font.bold())?;

    {
        let mut writer = PageWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: MARGIN_MM,
            regular,
            bold,
            style: *style,
            title: title.to_string(),
        };

        writer.draw_header();
        if let Some(bytes) = profile_image {
            writer.draw_photo(bytes)?;
        }
        // Room under the header so text never collides with the photo box.
        writer.advance(30.0);

        for instruction in instructions {
            match instruction.emphasis {
                Emphasis::ContactLine => {
                    writer.text_line(&instruction.body, CONTACT_PT, false, BLACK);
                }
                Emphasis::ContactBlock => {
                    writer.wrapped(&instruction.body, CONTACT_PT);
                    writer.advance(3.0);
                }
                Emphasis::Section => {
                    let heading_rgb = writer.style.theme.heading_rgb();
                    writer.text_line(&instruction.title, HEADING_PT, true, heading_rgb);
                    writer.wrapped(&instruction.body, BODY_PT);
                    writer.advance(3.0);
                }
            }
        }
    }

    doc.save_to_bytes().map_err(RenderError::Pdf)
}

// ────────────────────────────────────────────────────────────────────────────
// Page writer
// ────────────────────────────────────────────────────────────────────────────

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    /// Cursor in millimetres from the top edge of the current page.
    y: f32,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    style: StyleConfig,
    title: String,
}

impl PageWriter<'_> {
    fn advance(&mut self, mm: f32) {
        self.y += mm;
    }

    /// Converts the top-down cursor into a bottom-up text baseline.
    fn baseline(&self) -> Mm {
        Mm(PAGE_H_MM - self.y - LINE_H_MM * 0.7)
    }

    fn set_color(&self, (r, g, b): (u8, u8, u8)) {
        self.layer.set_fill_color(Color::Rgb(Rgb::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            None,
        )));
    }

    fn break_page_if_needed(&mut self) {
        if self.y + LINE_H_MM <= BOTTOM_LIMIT_MM {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_W_MM), Mm(PAGE_H_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = MARGIN_MM;
        self.draw_header();
    }

    /// Centered title header, repeated at the top of every page when set.
    fn draw_header(&mut self) {
        if self.title.is_empty() {
            return;
        }
        self.set_color(self.style.theme.heading_rgb());
        let width_mm = estimate_width_mm(&self.title, TITLE_PT, self.style.font);
        let x = ((PAGE_W_MM - width_mm) / 2.0).max(MARGIN_MM);
        self.layer
            .use_text(self.title.clone(), TITLE_PT, Mm(x), self.baseline(), &self.bold);
        self.y += LINE_H_MM + 5.0;
    }

    fn text_line(&mut self, text: &str, pt: f32, bold: bool, color: (u8, u8, u8)) {
        self.break_page_if_needed();
        self.set_color(color);
        let font = if bold {
            self.bold.clone()
        } else {
            self.regular.clone()
        };
        self.layer
            .use_text(text.to_string(), pt, Mm(MARGIN_MM), self.baseline(), &font);
        self.y += LINE_H_MM;
    }

    /// Body text: explicit newlines are honored, long lines wrap to the
    /// column width.
    fn wrapped(&mut self, text: &str, pt: f32) {
        let columns = wrap_columns(pt, self.style.font);
        for raw_line in text.lines() {
            if raw_line.trim().is_empty() {
                self.advance(LINE_H_MM);
                continue;
            }
            for line in textwrap::wrap(raw_line, columns) {
                self.text_line(&line, pt, false, BLACK);
            }
        }
    }

    fn draw_photo(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        let decoded = printpdf::image_crate::load_from_memory(bytes)?;
        let (px_w, px_h) = decoded.dimensions();
        let native_w_mm = (px_w.max(1) as f32) * 25.4 / PHOTO_DPI;
        let native_h_mm = (px_h.max(1) as f32) * 25.4 / PHOTO_DPI;
        let image = Image::from_dynamic_image(&decoded);
        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(PHOTO_X_MM)),
                translate_y: Some(Mm(PAGE_H_MM - PHOTO_TOP_MM - PHOTO_SIZE_MM)),
                scale_x: Some(PHOTO_SIZE_MM / native_w_mm),
                scale_y: Some(PHOTO_SIZE_MM / native_h_mm),
                dpi: Some(PHOTO_DPI),
                ..Default::default()
            },
        );
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Width estimates
// ────────────────────────────────────────────────────────────────────────────

fn estimate_width_mm(text: &str, pt: f32, font: FontChoice) -> f32 {
    text.chars().count() as f32 * font.avg_char_em() * pt * MM_PER_PT
}

/// Wrap width in characters for the usable column at the given size.
fn wrap_columns(pt: f32, font: FontChoice) -> usize {
    let usable_mm = PAGE_W_MM - 2.0 * MARGIN_MM;
    let char_mm = font.avg_char_em() * pt * MM_PER_PT;
    ((usable_mm / char_mm).floor() as usize).max(20)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::composer::compose;
    use crate::models::resume::{CustomSection, ResumeRecord};

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            name: "Jane Doe".to_string(),
            email: "j@x.com".to_string(),
            phone: "555".to_string(),
            linkedin: "in/jane".to_string(),
            summary: "Engineer with internship experience.".to_string(),
            skills: "Rust, Python".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_emits_pdf_bytes() {
        let record = sample_record();
        let instructions = compose(&record, &[]);
        let bytes =
            render_pdf(&record.name, &instructions, &StyleConfig::default(), None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_with_custom_sections_and_theme() {
        let record = sample_record();
        let custom = vec![CustomSection {
            title: "Awards".to_string(),
            body: "Dean's list".to_string(),
        }];
        let instructions = compose(&record, &custom);
        let style = StyleConfig::resolve("Times", "Creative", "Modern");
        let bytes = render_pdf(&record.name, &instructions, &style, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_long_body_spills_onto_more_pages() {
        let mut record = sample_record();
        record.experience = (0..80)
            .map(|i| format!("Did important thing number {i} at some length"))
            .collect::<Vec<_>>()
            .join("\n");
        let instructions = compose(&record, &[]);
        let bytes =
            render_pdf(&record.name, &instructions, &StyleConfig::default(), None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_title_skips_header() {
        let instructions = compose(&ResumeRecord::default(), &[]);
        let bytes = render_pdf("", &instructions, &StyleConfig::default(), None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_wrap_columns_reasonable() {
        let cols = wrap_columns(BODY_PT, FontChoice::Arial);
        assert!(cols >= 60 && cols <= 120, "got {cols}");
        // Monospace wraps earlier than proportional faces.
        assert!(wrap_columns(BODY_PT, FontChoice::Courier) < cols);
    }

    #[test]
    fn test_estimate_width_scales_with_length() {
        let short = estimate_width_mm("Jane", TITLE_PT, FontChoice::Arial);
        let long = estimate_width_mm("Jane Doe the Third", TITLE_PT, FontChoice::Arial);
        assert!(long > short);
    }
}
