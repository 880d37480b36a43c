//! Discharge summary service: generation plus persistence.

use crate::error::DischargeResult;
use crate::model::{CompletionRequest, SummaryModel};
use crate::prompt::{build_prompt, EMPTY_RESPONSE_FALLBACK, SYSTEM_INSTRUCTION};
use crate::store::DischargeStore;
use dsg_types::{DischargeInput, DischargeSummary};
use std::sync::Arc;

/// Explicitly constructed, dependency-injected service composing the store
/// and the completion model. The HTTP layer holds one of these and nothing
/// else.
#[derive(Clone)]
pub struct DischargeService {
    store: DischargeStore,
    model: Arc<dyn SummaryModel>,
    max_completion_tokens: u32,
}

impl DischargeService {
    pub fn new(store: DischargeStore, model: Arc<dyn SummaryModel>, max_completion_tokens: u32) -> Self {
        Self {
            store,
            model,
            max_completion_tokens,
        }
    }

    /// Generates a narrative for the input and persists the record with the
    /// generated text already attached.
    ///
    /// An empty completion is downgraded to a literal fallback string and
    /// the record is still created. A hard provider failure aborts the
    /// whole operation; nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns a `DischargeError` on provider or storage failure.
    pub async fn create(&self, input: DischargeInput) -> DischargeResult<DischargeSummary> {
        let request = CompletionRequest {
            system: SYSTEM_INSTRUCTION.to_owned(),
            prompt: build_prompt(&input),
            max_completion_tokens: self.max_completion_tokens,
        };
        let text = self.model.complete(request).await?;
        let generated = if text.trim().is_empty() {
            EMPTY_RESPONSE_FALLBACK.to_owned()
        } else {
            text
        };

        let summary = self.store.create(input, Some(generated))?;
        tracing::info!(id = summary.id, ip_number = %summary.ip_number, "created discharge summary");
        Ok(summary)
    }

    /// Looks up one record; absence is `Ok(None)`.
    pub fn get(&self, id: u64) -> DischargeResult<Option<DischargeSummary>> {
        self.store.get(id)
    }

    /// Every record, newest first.
    pub fn list_all(&self) -> DischargeResult<Vec<DischargeSummary>> {
        self.store.list_all()
    }

    pub fn store(&self) -> &DischargeStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DischargeError;
    use dsg_types::{AdmissionUnit, DischargeCondition, Gender};

    struct FixedModel(String);

    #[async_trait::async_trait]
    impl SummaryModel for FixedModel {
        async fn complete(&self, _request: CompletionRequest) -> DischargeResult<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingModel;

    #[async_trait::async_trait]
    impl SummaryModel for FailingModel {
        async fn complete(&self, _request: CompletionRequest) -> DischargeResult<String> {
            Err(DischargeError::ProviderStatus {
                status: 429,
                body: "rate limited".into(),
            })
        }
    }

    fn sample_input() -> DischargeInput {
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
            blood_investigations: None,
            imaging_investigations: None,
            other_investigations: None,
            hospital_course: "Admitted with respiratory distress.".into(),
            discharge_medications: "Syp. Ascoril LS".into(),
            iv_medications: None,
            follow_up_plan: "Review in OPD".into(),
            special_instructions: None,
            discharge_condition: DischargeCondition::Stable,
        }
    }

    fn service_with(model: Arc<dyn SummaryModel>) -> (tempfile::TempDir, DischargeService) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = DischargeStore::open(dir.path().join("db")).expect("open store");
        (dir, DischargeService::new(store, model, 1500))
    }

    #[tokio::test]
    async fn create_attaches_generated_text() {
        let (_dir, service) = service_with(Arc::new(FixedModel("NARRATIVE".into())));
        let summary = service.create(sample_input()).await.unwrap();
        assert_eq!(summary.generated_summary.as_deref(), Some("NARRATIVE"));
        assert_eq!(summary.id, 1);
    }

    #[tokio::test]
    async fn empty_completion_falls_back_and_still_persists() {
        let (_dir, service) = service_with(Arc::new(FixedModel("   ".into())));
        let summary = service.create(sample_input()).await.unwrap();
        assert_eq!(
            summary.generated_summary.as_deref(),
            Some(EMPTY_RESPONSE_FALLBACK)
        );
        assert_eq!(service.list_all().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn provider_failure_persists_nothing() {
        let (_dir, service) = service_with(Arc::new(FailingModel));
        let err = service.create(sample_input()).await.unwrap_err();
        assert!(matches!(err, DischargeError::ProviderStatus { status: 429, .. }));
        assert!(service.list_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_and_list_delegate_to_store() {
        let (_dir, service) = service_with(Arc::new(FixedModel("text".into())));
        let created = service.create(sample_input()).await.unwrap();
        assert_eq!(service.get(created.id).unwrap(), Some(created));
        assert!(service.get(42).unwrap().is_none());
    }
}
