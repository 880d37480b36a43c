//! Word-compatible renderer.
//!
//! Deliberately an abbreviated document relative to the PDF: letterhead,
//! one identification line pair, the heading, and the generated narrative.

use crate::ExportError;
use docx_rs::{AlignmentType, Docx, Paragraph, Run};
use dsg_types::DischargeSummary;
use std::io::Cursor;

fn centered(text: &str, half_points: usize, bold: bool) -> Paragraph {
    let mut run = Run::new().add_text(text).size(half_points);
    if bold {
        run = run.bold();
    }
    Paragraph::new().add_run(run).align(AlignmentType::Center)
}

fn labeled_pair(label_a: &str, value_a: &str, label_b: &str, value_b: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(label_a).bold())
        .add_run(Run::new().add_text(format!("{}        ", value_a)))
        .add_run(Run::new().add_text(label_b).bold())
        .add_run(Run::new().add_text(value_b))
}

/// Renders the abbreviated Word-compatible document.
///
/// # Errors
///
/// Returns an `ExportError::Docx` if packing the document archive fails.
pub fn render_docx(summary: &DischargeSummary) -> Result<Vec<u8>, ExportError> {
    let narrative = summary
        .generated_summary
        .as_deref()
        .unwrap_or("No summary generated.");

    let mut docx = Docx::new()
        .add_paragraph(centered("ESIC MEDICAL COLLEGE & HOSPITAL", 36, true))
        .add_paragraph(centered("DEPARTMENT OF PEDIATRICS", 28, true))
        .add_paragraph(centered("KK Nagar, Chennai - 600078", 22, false))
        .add_paragraph(Paragraph::new())
        .add_paragraph(labeled_pair(
            "Name: ",
            &summary.patient_name,
            "Age/Sex: ",
            &format!("{}y / {}", summary.age, summary.gender),
        ))
        .add_paragraph(labeled_pair(
            "IP No: ",
            &summary.ip_number,
            "DOA: ",
            &summary.admission_date,
        ))
        .add_paragraph(Paragraph::new())
        .add_paragraph(centered("DISCHARGE SUMMARY", 26, true));

    // One paragraph per narrative line keeps the plain-text layout readable.
    for line in narrative.lines() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::Docx(e.to_string()))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn renders_a_zip_container() {
        let bytes = render_docx(&fixtures::summary()).expect("render docx");
        // DOCX is a ZIP archive
        assert!(bytes.starts_with(b"PK"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn missing_narrative_uses_placeholder() {
        let mut summary = fixtures::summary();
        summary.generated_summary = None;
        assert!(render_docx(&summary).is_ok());
    }
}
