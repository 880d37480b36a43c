//! PDF renderer: fixed vertical letterhead layout.
//!
//! Built-in Helvetica has no embedded metrics in printpdf, so line wrapping
//! and centering use an average glyph-width approximation. Page breaks are
//! inserted whenever the write cursor reaches the bottom margin.

use crate::ExportError;
use dsg_types::DischargeSummary;
use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 18.0;
const BOTTOM_MARGIN_MM: f64 = 20.0;

// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_FACTOR: f64 = 0.5;
const PT_TO_MM: f64 = 0.352_778;

fn approx_width_mm(text: &str, font_size_pt: f64) -> f64 {
    text.chars().count() as f64 * font_size_pt * AVG_GLYPH_FACTOR * PT_TO_MM
}

fn line_height_mm(font_size_pt: f64) -> f64 {
    font_size_pt * 1.35 * PT_TO_MM
}

/// Greedy word wrap against the approximated line width.
fn wrap(text: &str, font_size_pt: f64, max_width_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_owned()
            } else {
                format!("{} {}", current, word)
            };
            if approx_width_mm(&candidate, font_size_pt) > max_width_mm && !current.is_empty() {
                lines.push(current);
                current = word.to_owned();
            } else {
                current = candidate;
            }
        }
        lines.push(current);
    }
    lines
}

struct PdfWriter {
    doc: printpdf::PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y_mm: f64,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn ensure_room(&mut self, needed_mm: f64) {
        if self.y_mm - needed_mm >= BOTTOM_MARGIN_MM {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn text_line(&mut self, text: &str, font_size_pt: f64, bold: bool, x_mm: f64) {
        self.ensure_room(line_height_mm(font_size_pt));
        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, font_size_pt as f32, Mm(x_mm as f32), Mm(self.y_mm as f32), font);
        self.y_mm -= line_height_mm(font_size_pt);
    }

    fn centered_line(&mut self, text: &str, font_size_pt: f64, bold: bool) {
        let x = (PAGE_WIDTH_MM - approx_width_mm(text, font_size_pt)).max(MARGIN_MM) / 2.0;
        self.text_line(text, font_size_pt, bold, x);
    }

    fn wrapped_text(&mut self, text: &str, font_size_pt: f64) {
        let max_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        for line in wrap(text, font_size_pt, max_width) {
            self.text_line(&line, font_size_pt, false, MARGIN_MM);
        }
    }

    fn rule(&mut self) {
        self.ensure_room(4.0);
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM as f32), Mm(self.y_mm as f32)), false),
                (
                    Point::new(Mm((PAGE_WIDTH_MM - MARGIN_MM) as f32), Mm(self.y_mm as f32)),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer.set_outline_thickness(1.0);
        self.layer.add_line(line);
        self.y_mm -= 4.0;
    }

    fn blank(&mut self, mm: f64) {
        self.y_mm -= mm;
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }
}

/// Renders the full letterhead discharge document.
///
/// # Errors
///
/// Returns an `ExportError::Pdf` if the underlying document cannot be
/// assembled or serialized.
pub fn render_pdf(summary: &DischargeSummary) -> Result<Vec<u8>, ExportError> {
    let mut w = PdfWriter::new("Discharge Summary")?;

    // Letterhead
    w.centered_line("ESIC MEDICAL COLLEGE & HOSPITAL", 20.0, true);
    w.centered_line("DEPARTMENT OF PEDIATRICS", 14.0, false);
    w.centered_line("KK Nagar, Chennai - 600078", 10.0, false);
    w.blank(3.0);
    w.rule();
    w.blank(3.0);

    // Patient info
    w.text_line("PATIENT DETAILS", 12.0, true, MARGIN_MM);
    w.text_line(
        &format!(
            "Name: {}    Age/Sex: {}y / {}",
            summary.patient_name, summary.age, summary.gender
        ),
        10.0,
        false,
        MARGIN_MM,
    );
    w.text_line(
        &format!(
            "IP No: {}    Unit: {}",
            summary.ip_number, summary.unit_of_admission
        ),
        10.0,
        false,
        MARGIN_MM,
    );
    w.text_line(
        &format!("Consultant: {}", summary.consultant_name),
        10.0,
        false,
        MARGIN_MM,
    );
    w.text_line(
        &format!(
            "DOA: {}    DOD: {}",
            summary.admission_date, summary.discharge_date
        ),
        10.0,
        false,
        MARGIN_MM,
    );
    w.blank(4.0);

    // Diagnosis
    w.text_line("DIAGNOSIS", 12.0, true, MARGIN_MM);
    w.text_line(
        &format!("Admitting: {}", summary.admitting_diagnosis),
        10.0,
        false,
        MARGIN_MM,
    );
    w.text_line(
        &format!("Discharge: {}", summary.discharge_diagnosis),
        10.0,
        false,
        MARGIN_MM,
    );
    w.blank(4.0);

    // Generated narrative
    w.text_line("SUMMARY OF COURSE & MANAGEMENT", 12.0, true, MARGIN_MM);
    let narrative = summary
        .generated_summary
        .as_deref()
        .unwrap_or("No summary generated.");
    w.wrapped_text(narrative, 10.0);

    // Footer
    w.blank(8.0);
    w.centered_line("This is a computer-generated document.", 8.0, false);

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn renders_a_pdf_byte_stream() {
        let bytes = render_pdf(&fixtures::summary()).expect("render pdf");
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn long_narratives_overflow_onto_extra_pages() {
        let mut summary = fixtures::summary();
        summary.generated_summary = Some("ward round note ".repeat(2000));
        let bytes = render_pdf(&summary).expect("render pdf");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn missing_narrative_uses_placeholder() {
        let mut summary = fixtures::summary();
        summary.generated_summary = None;
        assert!(render_pdf(&summary).is_ok());
    }

    #[test]
    fn wrap_respects_the_column_width() {
        let lines = wrap("alpha beta gamma delta epsilon zeta", 10.0, 30.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(approx_width_mm(line, 10.0) <= 30.0 + 10.0 * AVG_GLYPH_FACTOR * PT_TO_MM);
        }
    }

    #[test]
    fn wrap_preserves_blank_lines() {
        let lines = wrap("first\n\nsecond", 10.0, 100.0);
        assert_eq!(lines, vec!["first".to_owned(), String::new(), "second".to_owned()]);
    }
}
