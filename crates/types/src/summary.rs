//! Discharge summary record shapes and fixed clinical value sets.
//!
//! Three shapes cover the record's lifecycle:
//! - [`NewDischargeSummary`] is the raw wire input. Every field is optional
//!   or defaulted at the serde level so that a missing required field is
//!   reported by [`validate`](NewDischargeSummary::validate) with its wire
//!   name rather than by an opaque deserializer error.
//! - [`DischargeInput`] is the validated, fully-typed input.
//! - [`DischargeSummary`] is the stored row: input plus the server-assigned
//!   `id`, `createdAt`, and the write-once `generatedSummary`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

/// The clinical unit a patient was admitted under.
///
/// Wire values match the option list presented to clinicians, including the
/// numbered ward prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AdmissionUnit {
    #[serde(rename = "Unit 1 - General Pediatrics")]
    GeneralPediatrics,
    #[serde(rename = "Unit 2 - Respiratory")]
    Respiratory,
    #[serde(rename = "Unit 3 - Neurology")]
    Neurology,
    #[serde(rename = "NICU")]
    Nicu,
    #[serde(rename = "PICU")]
    Picu,
}

impl std::fmt::Display for AdmissionUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AdmissionUnit::GeneralPediatrics => "Unit 1 - General Pediatrics",
            AdmissionUnit::Respiratory => "Unit 2 - Respiratory",
            AdmissionUnit::Neurology => "Unit 3 - Neurology",
            AdmissionUnit::Nicu => "NICU",
            AdmissionUnit::Picu => "PICU",
        };
        write!(f, "{}", s)
    }
}

/// Categorical outcome status at discharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DischargeCondition {
    Recovered,
    Improved,
    Stable,
    Transferred,
    /// Left against medical advice.
    #[serde(rename = "LAMA")]
    Lama,
}

impl std::fmt::Display for DischargeCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DischargeCondition::Recovered => "Recovered",
            DischargeCondition::Improved => "Improved",
            DischargeCondition::Stable => "Stable",
            DischargeCondition::Transferred => "Transferred",
            DischargeCondition::Lama => "LAMA",
        };
        write!(f, "{}", s)
    }
}

/// Raw create-request body, field names exactly as on the wire.
///
/// Required strings default to empty and required enums/numbers to `None`
/// when absent; [`validate`](Self::validate) turns either form of absence
/// into a [`FieldError`](crate::FieldError) naming the wire field.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDischargeSummary {
    #[serde(default)]
    pub patient_name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub ip_number: String,
    #[serde(default)]
    pub bed_number: Option<String>,
    pub unit_of_admission: Option<AdmissionUnit>,
    #[serde(default)]
    pub admission_date: String,
    #[serde(default)]
    pub discharge_date: String,
    #[serde(default)]
    pub consultant_name: String,
    #[serde(default)]
    pub admitting_diagnosis: String,
    #[serde(default)]
    pub comorbidities: Option<String>,
    #[serde(default)]
    pub discharge_diagnosis: String,
    #[serde(default)]
    pub complications: Option<String>,
    #[serde(default)]
    pub blood_investigations: Option<String>,
    #[serde(default)]
    pub imaging_investigations: Option<String>,
    #[serde(default)]
    pub other_investigations: Option<String>,
    #[serde(default)]
    pub hospital_course: String,
    #[serde(default)]
    pub discharge_medications: String,
    #[serde(default)]
    pub iv_medications: Option<String>,
    #[serde(default)]
    pub follow_up_plan: String,
    #[serde(default)]
    pub special_instructions: Option<String>,
    pub discharge_condition: Option<DischargeCondition>,
}

/// A validated discharge summary input, ready for prompt building and
/// persistence. Obtained only through [`NewDischargeSummary::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DischargeInput {
    pub patient_name: String,
    pub age: i32,
    pub gender: Gender,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub ip_number: String,
    pub bed_number: Option<String>,
    pub unit_of_admission: AdmissionUnit,
    pub admission_date: String,
    pub discharge_date: String,
    pub consultant_name: String,
    pub admitting_diagnosis: String,
    pub comorbidities: Option<String>,
    pub discharge_diagnosis: String,
    pub complications: Option<String>,
    pub blood_investigations: Option<String>,
    pub imaging_investigations: Option<String>,
    pub other_investigations: Option<String>,
    pub hospital_course: String,
    pub discharge_medications: String,
    pub iv_medications: Option<String>,
    pub follow_up_plan: String,
    pub special_instructions: Option<String>,
    pub discharge_condition: DischargeCondition,
}

/// A stored discharge summary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DischargeSummary {
    pub id: u64,
    pub patient_name: String,
    pub age: i32,
    pub gender: Gender,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub ip_number: String,
    pub bed_number: Option<String>,
    pub unit_of_admission: AdmissionUnit,
    pub admission_date: String,
    pub discharge_date: String,
    pub consultant_name: String,
    pub admitting_diagnosis: String,
    pub comorbidities: Option<String>,
    pub discharge_diagnosis: String,
    pub complications: Option<String>,
    pub blood_investigations: Option<String>,
    pub imaging_investigations: Option<String>,
    pub other_investigations: Option<String>,
    pub hospital_course: String,
    pub discharge_medications: String,
    pub iv_medications: Option<String>,
    pub follow_up_plan: String,
    pub special_instructions: Option<String>,
    pub discharge_condition: DischargeCondition,
    /// Narrative produced once by the completion provider at creation time.
    /// Never regenerated or edited afterwards.
    pub generated_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DischargeSummary {
    /// Assembles a stored row from a validated input plus the
    /// server-assigned identity fields.
    pub fn from_input(
        id: u64,
        input: DischargeInput,
        generated_summary: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            patient_name: input.patient_name,
            age: input.age,
            gender: input.gender,
            father_name: input.father_name,
            mother_name: input.mother_name,
            ip_number: input.ip_number,
            bed_number: input.bed_number,
            unit_of_admission: input.unit_of_admission,
            admission_date: input.admission_date,
            discharge_date: input.discharge_date,
            consultant_name: input.consultant_name,
            admitting_diagnosis: input.admitting_diagnosis,
            comorbidities: input.comorbidities,
            discharge_diagnosis: input.discharge_diagnosis,
            complications: input.complications,
            blood_investigations: input.blood_investigations,
            imaging_investigations: input.imaging_investigations,
            other_investigations: input.other_investigations,
            hospital_course: input.hospital_course,
            discharge_medications: input.discharge_medications,
            iv_medications: input.iv_medications,
            follow_up_plan: input.follow_up_plan,
            special_instructions: input.special_instructions,
            discharge_condition: input.discharge_condition,
            generated_summary,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_names_match_clinical_option_lists() {
        assert_eq!(
            serde_json::to_string(&AdmissionUnit::GeneralPediatrics).unwrap(),
            "\"Unit 1 - General Pediatrics\""
        );
        assert_eq!(serde_json::to_string(&AdmissionUnit::Picu).unwrap(), "\"PICU\"");
        assert_eq!(
            serde_json::to_string(&DischargeCondition::Lama).unwrap(),
            "\"LAMA\""
        );
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"Female\"");
    }

    #[test]
    fn summary_serializes_camel_case() {
        let input = DischargeInput {
            patient_name: "Baby of Priya".into(),
            age: 2,
            gender: Gender::Male,
            father_name: Some("Ramesh".into()),
            mother_name: Some("Priya".into()),
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
            blood_investigations: None,
            imaging_investigations: None,
            other_investigations: None,
            hospital_course: "Admitted with respiratory distress.".into(),
            discharge_medications: "Syp. Ascoril LS".into(),
            iv_medications: None,
            follow_up_plan: "Review in OPD after 1 week".into(),
            special_instructions: None,
            discharge_condition: DischargeCondition::Stable,
        };
        let summary = DischargeSummary::from_input(7, input, Some("text".into()), Utc::now());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["patientName"], "Baby of Priya");
        assert_eq!(json["ipNumber"], "IP123456");
        assert_eq!(json["unitOfAdmission"], "PICU");
        assert_eq!(json["generatedSummary"], "text");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn new_summary_tolerates_missing_fields() {
        let parsed: NewDischargeSummary = serde_json::from_str("{}").unwrap();
        assert!(parsed.patient_name.is_empty());
        assert!(parsed.age.is_none());
        assert!(parsed.gender.is_none());
        assert!(parsed.discharge_condition.is_none());
    }
}
