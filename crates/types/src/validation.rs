//! Input validation shared by every front end.
//!
//! Validation reports the *first* failing field, named by its wire
//! (camelCase) path, so that clients can attach the message to the right
//! form control. Checks run in the order fields appear on the intake form.

use crate::summary::{DischargeInput, NewDischargeSummary};
use chrono::NaiveDate;

/// A validation failure for a single input field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Wire name of the failing field, e.g. `patientName`.
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{} is required", field),
        }
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::required(field));
    }
    Ok(())
}

fn require_iso_date(field: &'static str, value: &str) -> Result<(), FieldError> {
    require_text(field, value)?;
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err(FieldError {
            field,
            message: format!("{} must be an ISO date (YYYY-MM-DD)", field),
        });
    }
    Ok(())
}

impl NewDischargeSummary {
    /// Validates the raw input and produces the fully-typed
    /// [`DischargeInput`].
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] naming the first field that is missing,
    /// empty, or malformed.
    pub fn validate(self) -> Result<DischargeInput, FieldError> {
        require_text("patientName", &self.patient_name)?;
        let age = self.age.ok_or_else(|| FieldError::required("age"))?;
        if !(0..=120).contains(&age) {
            return Err(FieldError {
                field: "age",
                message: "age must be between 0 and 120".into(),
            });
        }
        let gender = self.gender.ok_or_else(|| FieldError::required("gender"))?;
        require_text("ipNumber", &self.ip_number)?;
        let unit_of_admission = self
            .unit_of_admission
            .ok_or_else(|| FieldError::required("unitOfAdmission"))?;
        require_iso_date("admissionDate", &self.admission_date)?;
        require_iso_date("dischargeDate", &self.discharge_date)?;
        require_text("consultantName", &self.consultant_name)?;
        require_text("admittingDiagnosis", &self.admitting_diagnosis)?;
        require_text("dischargeDiagnosis", &self.discharge_diagnosis)?;
        require_text("hospitalCourse", &self.hospital_course)?;
        require_text("dischargeMedications", &self.discharge_medications)?;
        require_text("followUpPlan", &self.follow_up_plan)?;
        let discharge_condition = self
            .discharge_condition
            .ok_or_else(|| FieldError::required("dischargeCondition"))?;

        Ok(DischargeInput {
            patient_name: self.patient_name,
            age,
            gender,
            father_name: self.father_name,
            mother_name: self.mother_name,
            ip_number: self.ip_number,
            bed_number: self.bed_number,
            unit_of_admission,
            admission_date: self.admission_date,
            discharge_date: self.discharge_date,
            consultant_name: self.consultant_name,
            admitting_diagnosis: self.admitting_diagnosis,
            comorbidities: self.comorbidities,
            discharge_diagnosis: self.discharge_diagnosis,
            complications: self.complications,
            blood_investigations: self.blood_investigations,
            imaging_investigations: self.imaging_investigations,
            other_investigations: self.other_investigations,
            hospital_course: self.hospital_course,
            discharge_medications: self.discharge_medications,
            iv_medications: self.iv_medications,
            follow_up_plan: self.follow_up_plan,
            special_instructions: self.special_instructions,
            discharge_condition,
        })
    }
}
