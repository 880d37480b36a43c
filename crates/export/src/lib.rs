//! # dsg-export
//!
//! Document exporters for discharge summaries.
//!
//! Two independent, stateless renderers consume one stored record and
//! produce a byte buffer: [`pdf::render_pdf`] and [`docx::render_docx`].
//! Field coverage differs between the two on purpose; the DOCX export is an
//! abbreviated version of the PDF letterhead document.

pub mod docx;
pub mod pdf;

pub use docx::render_docx;
pub use pdf::render_pdf;

use dsg_types::DischargeSummary;

/// Export failures, kept opaque about renderer internals.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to render PDF: {0}")]
    Pdf(String),
    #[error("failed to render DOCX: {0}")]
    Docx(String),
}

/// Attachment filename for the PDF export, embedding the record's IP number.
pub fn pdf_filename(summary: &DischargeSummary) -> String {
    format!("discharge_{}.pdf", summary.ip_number)
}

/// Attachment filename for the DOCX export, embedding the record's IP number.
pub fn docx_filename(summary: &DischargeSummary) -> String {
    format!("discharge_{}.docx", summary.ip_number)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::Utc;
    use dsg_types::{AdmissionUnit, DischargeCondition, DischargeInput, DischargeSummary, Gender};

    pub fn summary() -> DischargeSummary {
        let input = DischargeInput {
            patient_name: "Baby of Priya".into(),
            age: 2,
            gender: Gender::Male,
            father_name: Some("Ramesh".into()),
            mother_name: Some("Priya".into()),
            ip_number: "IP123456".into(),
            bed_number: Some("PICU-05".into()),
            unit_of_admission: AdmissionUnit::Picu,
            admission_date: "2023-10-01".into(),
            discharge_date: "2023-10-05".into(),
            consultant_name: "Dr. S. Kumar".into(),
            admitting_diagnosis: "Acute Bronchiolitis".into(),
            comorbidities: None,
            discharge_diagnosis: "Acute Bronchiolitis - Resolved".into(),
            complications: None,
            blood_investigations: None,
            imaging_investigations: None,
            other_investigations: None,
            hospital_course: "Admitted with respiratory distress.".into(),
            discharge_medications: "Syp. Ascoril LS 2.5ml TDS x 5 days".into(),
            iv_medications: None,
            follow_up_plan: "Review in OPD after 1 week".into(),
            special_instructions: None,
            discharge_condition: DischargeCondition::Stable,
        };
        DischargeSummary::from_input(
            1,
            input,
            Some("DISCHARGE SUMMARY\n\nThe patient was admitted with respiratory distress and improved on supportive care.".into()),
            Utc::now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_embed_ip_number() {
        let summary = fixtures::summary();
        assert_eq!(pdf_filename(&summary), "discharge_IP123456.pdf");
        assert_eq!(docx_filename(&summary), "discharge_IP123456.docx");
    }
}
