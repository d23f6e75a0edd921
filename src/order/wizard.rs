use time::Date;

use super::draft::{OrderDraft, OrderPayload};
use super::validation::{validate_all, validate_step, FieldErrors, OrderField, ValidationPolicy};
use crate::config::RuntimeConfig;
use crate::submission::SubmitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Service,
    Project,
    Logistics,
}

impl WizardStep {
    pub const COUNT: u8 = 3;

    pub fn number(self) -> u8 {
        match self {
            WizardStep::Service => 1,
            WizardStep::Project => 2,
            WizardStep::Logistics => 3,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Service => Some(WizardStep::Project),
            WizardStep::Project => Some(WizardStep::Logistics),
            WizardStep::Logistics => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Service => None,
            WizardStep::Project => Some(WizardStep::Service),
            WizardStep::Logistics => Some(WizardStep::Project),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Service => "Select Service",
            WizardStep::Project => "Project Information",
            WizardStep::Logistics => "Budget & Timeline",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WizardStep::Service => "Choose the service you need",
            WizardStep::Project => "Tell us about your project",
            WizardStep::Logistics => "Set your budget and timeline",
        }
    }

    pub fn progress_percent(self) -> f64 {
        f64::from(self.number()) / f64::from(Self::COUNT) * 100.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    /// Last attempt failed; the draft is intact and may be resubmitted.
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderRules {
    pub details_min_len: usize,
    pub require_terms: bool,
}

impl From<&RuntimeConfig> for OrderRules {
    fn from(config: &RuntimeConfig) -> Self {
        Self {
            details_min_len: config.details_min_len,
            require_terms: config.require_terms,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderWizard {
    rules: OrderRules,
    step: WizardStep,
    draft: OrderDraft,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl OrderWizard {
    pub fn new(rules: OrderRules, today: Date) -> Self {
        Self {
            rules,
            step: WizardStep::Service,
            draft: OrderDraft::new(today),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn rules(&self) -> OrderRules {
        self.rules
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: OrderField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn progress_percent(&self) -> f64 {
        self.step.progress_percent()
    }

    fn policy(&self, today: Date) -> ValidationPolicy {
        ValidationPolicy {
            today,
            details_min_len: self.rules.details_min_len,
            require_terms: self.rules.require_terms,
        }
    }

    /// Applies a user edit and clears the stale error on that field.
    pub fn edit(&mut self, field: OrderField, apply: impl FnOnce(&mut OrderDraft)) {
        apply(&mut self.draft);
        self.errors.remove(&field);
    }

    /// The reference file carries no validation rule.
    pub fn set_attachment(&mut self, name: Option<String>) {
        self.draft.attachment = name;
    }

    /// Moves forward if the current step's fields are valid. Returns
    /// whether the step changed.
    pub fn advance(&mut self, today: Date) -> bool {
        let Some(next) = self.step.next() else {
            return false;
        };
        let current = self.step;
        let failures = validate_step(&self.draft, &self.policy(today), current);
        self.errors.retain(|field, _| field.step() != current);
        if !failures.is_empty() {
            tracing::debug!(
                "order: step {} blocked by {} field error(s)",
                current.number(),
                failures.len()
            );
            self.errors.extend(failures);
            return false;
        }
        self.step = next;
        tracing::info!("order: step {} -> {}", current.number(), next.number());
        true
    }

    /// Backward movement is never validated.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                tracing::info!("order: step {} -> {}", self.step.number(), previous.number());
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Validates the whole form and, when it passes, enters the submitting
    /// state and hands back the payload to send.
    pub fn begin_submission(&mut self, today: Date) -> Option<OrderPayload> {
        if self.step != WizardStep::Logistics || self.is_submitting() {
            return None;
        }
        let failures = validate_all(&self.draft, &self.policy(today));
        if !failures.is_empty() {
            tracing::debug!("order: submission blocked by {} field error(s)", failures.len());
            self.errors = failures;
            return None;
        }
        let payload = self.draft.to_payload()?;
        self.errors.clear();
        self.status = SubmissionStatus::Submitting;
        tracing::info!("order: submitting {}", payload.service.value());
        Some(payload)
    }

    pub fn finish_submission(
        &mut self,
        outcome: Result<(), SubmitError>,
        today: Date,
    ) -> Result<(), SubmitError> {
        match &outcome {
            Ok(()) => {
                tracing::info!("order: submission accepted");
                self.reset(today);
            }
            Err(err) => {
                tracing::error!("order: submission failed: {err}");
                if let SubmitError::Rejected { field_errors, .. } = err {
                    for (key, message) in field_errors {
                        if let Some(field) = OrderField::from_key(key) {
                            self.errors.insert(field, message.clone());
                        }
                    }
                }
                if let Some(earliest) = self.errors.keys().map(|field| field.step()).min() {
                    self.step = earliest;
                }
                self.status = SubmissionStatus::Failed(err.to_string());
            }
        }
        outcome
    }

    pub fn reset(&mut self, today: Date) {
        self.step = WizardStep::Service;
        self.draft = OrderDraft::new(today);
        self.errors.clear();
        self.status = SubmissionStatus::Idle;
    }
}
