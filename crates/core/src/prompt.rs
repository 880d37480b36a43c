//! Prompt construction for the completion provider.
//!
//! The template is deterministic: the same input always produces the same
//! prompt text. Optional free-text blocks that were left empty appear as a
//! literal `N/A` so the model never sees a dangling label.

use dsg_types::DischargeInput;

/// Fixed system instruction sent with every generation request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a senior pediatrician at ESIC Hospital. Write professional, concise discharge summaries.";

/// Placeholder substituted when the provider returns empty content.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Summary generation failed.";

fn or_na(value: &Option<String>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => "N/A",
    }
}

/// Builds the user prompt embedding every input field.
pub fn build_prompt(input: &DischargeInput) -> String {
    format!(
        "Create an official ESIC Medical College discharge summary for the following patient:\n\
         \n\
         PATIENT: {patient_name}, {age}y/{gender}, IP: {ip_number}\n\
         UNIT: {unit}, Consultant: {consultant}\n\
         ADMISSION: {admission_date}, DISCHARGE: {discharge_date}\n\
         \n\
         ADMITTING DX: {admitting_dx}\n\
         DISCHARGE DX: {discharge_dx}\n\
         \n\
         COURSE IN HOSPITAL: {course}\n\
         \n\
         INVESTIGATIONS:\n\
         Blood: {blood}\n\
         Imaging: {imaging}\n\
         Other: {other}\n\
         \n\
         MEDICATIONS: {medications}\n\
         FOLLOW UP: {follow_up}\n\
         INSTRUCTIONS: {instructions}\n\
         CONDITION: {condition}\n\
         \n\
         Format the output as a professional medical discharge summary.\n\
         Do not use markdown formatting (like ** or #). Just plain text with clear section headers.\n\
         Start with \"DISCHARGE SUMMARY\" centered.",
        patient_name = input.patient_name,
        age = input.age,
        gender = input.gender,
        ip_number = input.ip_number,
        unit = input.unit_of_admission,
        consultant = input.consultant_name,
        admission_date = input.admission_date,
        discharge_date = input.discharge_date,
        admitting_dx = input.admitting_diagnosis,
        discharge_dx = input.discharge_diagnosis,
        course = input.hospital_course,
        blood = or_na(&input.blood_investigations),
        imaging = or_na(&input.imaging_investigations),
        other = or_na(&input.other_investigations),
        medications = input.discharge_medications,
        follow_up = input.follow_up_plan,
        instructions = or_na(&input.special_instructions),
        condition = input.discharge_condition,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsg_types::{AdmissionUnit, DischargeCondition, Gender};

    fn input() -> DischargeInput {
        DischargeInput {
            patient_name: "Baby of Priya".into(),
            age: 2,
            gender: Gender::Male,
            father_name: None,
            mother_name: None,
            ip_number: "IP123456".into(),
            bed_number: None,
            unit_of_admission: AdmissionUnit::Picu,
            admission_date: "2023-10-01".into(),
            discharge_date: "2023-10-05".into(),
            consultant_name: "Dr. S. Kumar".into(),
            admitting_diagnosis: "Acute Bronchiolitis".into(),
            comorbidities: None,
            discharge_diagnosis: "Acute Bronchiolitis - Resolved".into(),
            complications: None,
            blood_investigations: Some("CBC within normal limits".into()),
            imaging_investigations: None,
            other_investigations: Some("   ".into()),
            hospital_course: "Admitted with respiratory distress.".into(),
            discharge_medications: "Syp. Ascoril LS 2.5ml TDS x 5 days".into(),
            iv_medications: None,
            follow_up_plan: "Review in OPD after 1 week".into(),
            special_instructions: None,
            discharge_condition: DischargeCondition::Stable,
        }
    }

    #[test]
    fn embeds_every_required_field() {
        let prompt = build_prompt(&input());
        assert!(prompt.contains("PATIENT: Baby of Priya, 2y/Male, IP: IP123456"));
        assert!(prompt.contains("UNIT: PICU, Consultant: Dr. S. Kumar"));
        assert!(prompt.contains("ADMITTING DX: Acute Bronchiolitis"));
        assert!(prompt.contains("CONDITION: Stable"));
    }

    #[test]
    fn substitutes_na_for_empty_optionals() {
        let prompt = build_prompt(&input());
        assert!(prompt.contains("Blood: CBC within normal limits"));
        assert!(prompt.contains("Imaging: N/A"));
        // whitespace-only counts as empty
        assert!(prompt.contains("Other: N/A"));
        assert!(prompt.contains("INSTRUCTIONS: N/A"));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(build_prompt(&input()), build_prompt(&input()));
    }
}
