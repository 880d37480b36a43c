//! First-run seed data.

use crate::error::DischargeResult;
use crate::store::DischargeStore;
use dsg_types::{AdmissionUnit, DischargeCondition, DischargeInput, Gender};

fn seed_input() -> DischargeInput {
    DischargeInput {
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
        hospital_course: "Admitted with respiratory distress. Started on O2 support and \
                          nebulization. Gradually weaned off O2. Feeds established. Discharged \
                          in stable condition."
            .into(),
        discharge_medications: "Syp. Ascoril LS 2.5ml TDS x 5 days".into(),
        iv_medications: None,
        follow_up_plan: "Review in OPD after 1 week (12/10/2023)".into(),
        special_instructions: None,
        discharge_condition: DischargeCondition::Stable,
    }
}

const SEED_SUMMARY: &str = "DISCHARGE SUMMARY\n\nPATIENT DETAILS\nName: Baby of Priya\nAge/Sex: \
                            2y/Male\nIP No: IP123456\nUnit: PICU\nConsultant: Dr. S. Kumar\n\n\
                            DIAGNOSIS\nAdmitting: Acute Bronchiolitis\nDischarge: Acute \
                            Bronchiolitis - Resolved\n\nCOURSE IN HOSPITAL\nAdmitted with \
                            respiratory distress. Started on O2 support and nebulization. \
                            Gradually weaned off O2. Feeds established. Discharged in stable \
                            condition.\n\nADVICE ON DISCHARGE\nContinue medications as \
                            prescribed. Review in OPD after 1 week.";

/// Inserts the demonstration record into an empty store. The seed carries a
/// pre-baked narrative, so no provider call is made.
///
/// Returns `true` if a record was inserted.
///
/// # Errors
///
/// Returns a `DischargeError` if the store write fails.
pub fn ensure_seed(store: &DischargeStore) -> DischargeResult<bool> {
    if !store.is_empty() {
        return Ok(false);
    }
    tracing::info!("seeding database");
    store.create(seed_input(), Some(SEED_SUMMARY.to_owned()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_once_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = DischargeStore::open(dir.path().join("db")).expect("open store");
        assert!(ensure_seed(&store).unwrap());
        assert!(!ensure_seed(&store).unwrap());
        let rows = store.list_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ip_number, "IP123456");
        assert!(rows[0].generated_summary.as_deref().unwrap().starts_with("DISCHARGE SUMMARY"));
    }
}
