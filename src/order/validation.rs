//! Field rules for the order form.
//!
//! Rules live in one table of `(field, predicate, message)` rows. A field's
//! first failing row produces its message; later rows for the same field are
//! skipped.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use time::Date;

use super::draft::{OrderDraft, BUDGET_MAX, BUDGET_MIN, BUDGET_STEP};
use super::wizard::WizardStep;
use crate::date::earliest_deadline;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$")
        .expect("email regex should compile")
});

pub const NAME_MIN_LEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    Service,
    Name,
    Email,
    ProjectDetails,
    Budget,
    Deadline,
    ContactMethod,
    ContactDetail,
    Terms,
}

impl OrderField {
    pub fn step(self) -> WizardStep {
        match self {
            OrderField::Service => WizardStep::Service,
            OrderField::Name | OrderField::Email | OrderField::ProjectDetails => {
                WizardStep::Project
            }
            OrderField::Budget
            | OrderField::Deadline
            | OrderField::ContactMethod
            | OrderField::ContactDetail
            | OrderField::Terms => WizardStep::Logistics,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "service" => Some(OrderField::Service),
            "name" => Some(OrderField::Name),
            "email" => Some(OrderField::Email),
            "projectDetails" => Some(OrderField::ProjectDetails),
            "budget" => Some(OrderField::Budget),
            "deadline" => Some(OrderField::Deadline),
            "contactMethod" => Some(OrderField::ContactMethod),
            "contactDetail" => Some(OrderField::ContactDetail),
            "terms" | "termsAccepted" => Some(OrderField::Terms),
            _ => None,
        }
    }
}

pub type FieldErrors = BTreeMap<OrderField, String>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidationPolicy {
    pub today: Date,
    pub details_min_len: usize,
    pub require_terms: bool,
}

struct Rule {
    field: OrderField,
    passes: fn(&OrderDraft, &ValidationPolicy) -> bool,
    message: fn(&ValidationPolicy) -> String,
}

static RULES: &[Rule] = &[
    Rule {
        field: OrderField::Service,
        passes: |draft, _| draft.service.is_some(),
        message: |_| "Please select a service to continue".to_string(),
    },
    Rule {
        field: OrderField::Name,
        passes: |draft, _| char_len(&draft.name) >= NAME_MIN_LEN,
        message: |_| format!("Name must be at least {NAME_MIN_LEN} characters"),
    },
    Rule {
        field: OrderField::Email,
        passes: |draft, _| is_valid_email(&draft.email),
        message: |_| "Please enter a valid email address".to_string(),
    },
    Rule {
        field: OrderField::ProjectDetails,
        passes: |draft, policy| char_len(&draft.project_details) >= policy.details_min_len,
        message: |policy| {
            format!(
                "Project details must be at least {} characters",
                policy.details_min_len
            )
        },
    },
    Rule {
        field: OrderField::Budget,
        passes: |draft, _| (BUDGET_MIN..=BUDGET_MAX).contains(&draft.budget),
        message: |_| format!("Budget must be between ${BUDGET_MIN} and ${BUDGET_MAX}"),
    },
    Rule {
        field: OrderField::Budget,
        passes: |draft, _| draft.budget % BUDGET_STEP == 0,
        message: |_| format!("Budget must be a multiple of ${BUDGET_STEP}"),
    },
    Rule {
        field: OrderField::Deadline,
        passes: |draft, _| draft.deadline.is_some(),
        message: |_| "Please select a deadline".to_string(),
    },
    Rule {
        field: OrderField::Deadline,
        passes: |draft, policy| {
            draft
                .deadline
                .is_some_and(|deadline| deadline >= earliest_deadline(policy.today))
        },
        message: |_| "Please pick a deadline from tomorrow onward".to_string(),
    },
    Rule {
        field: OrderField::ContactMethod,
        passes: |draft, _| draft.contact_method.is_some(),
        message: |_| "Please select a contact method".to_string(),
    },
    Rule {
        field: OrderField::ContactDetail,
        passes: |draft, _| !draft.contact_detail.trim().is_empty(),
        message: |_| "Please provide your contact details".to_string(),
    },
    Rule {
        field: OrderField::Terms,
        passes: |draft, policy| !policy.require_terms || draft.terms_accepted,
        message: |_| "You must accept the terms to continue".to_string(),
    },
];

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.len() <= 254 && EMAIL_REGEX.is_match(value)
}

fn collect<'a>(
    rules: impl Iterator<Item = &'a Rule>,
    draft: &OrderDraft,
    policy: &ValidationPolicy,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in rules {
        if errors.contains_key(&rule.field) {
            continue;
        }
        if !(rule.passes)(draft, policy) {
            errors.insert(rule.field, (rule.message)(policy));
        }
    }
    errors
}

/// Rules gating forward movement out of `step`.
pub fn validate_step(draft: &OrderDraft, policy: &ValidationPolicy, step: WizardStep) -> FieldErrors {
    collect(
        RULES.iter().filter(|rule| rule.field.step() == step),
        draft,
        policy,
    )
}

/// Whole-form check run once before submission.
pub fn validate_all(draft: &OrderDraft, policy: &ValidationPolicy) -> FieldErrors {
    collect(RULES.iter(), draft, policy)
}
