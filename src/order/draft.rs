use serde::{Deserialize, Serialize};
use time::Date;

use crate::date::{default_deadline, format_iso};

pub const BUDGET_MIN: u32 = 100;
pub const BUDGET_MAX: u32 = 5000;
pub const BUDGET_STEP: u32 = 100;
pub const DEFAULT_BUDGET: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    WebDevelopment,
    GraphicDesign,
    Seo,
    ExcelAutomation,
    YoutubeThumbnails,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::WebDevelopment,
        Service::GraphicDesign,
        Service::Seo,
        Service::ExcelAutomation,
        Service::YoutubeThumbnails,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Service::WebDevelopment => "web_development",
            Service::GraphicDesign => "graphic_design",
            Service::Seo => "seo",
            Service::ExcelAutomation => "excel_automation",
            Service::YoutubeThumbnails => "youtube_thumbnails",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::WebDevelopment => "Web Development",
            Service::GraphicDesign => "Graphic Design",
            Service::Seo => "SEO Optimization",
            Service::ExcelAutomation => "Excel Automation",
            Service::YoutubeThumbnails => "YouTube Thumbnails",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
    Whatsapp,
    Both,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 4] = [
        ContactMethod::Email,
        ContactMethod::Phone,
        ContactMethod::Whatsapp,
        ContactMethod::Both,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
            ContactMethod::Whatsapp => "whatsapp",
            ContactMethod::Both => "both",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
            ContactMethod::Whatsapp => "WhatsApp",
            ContactMethod::Both => "Email & Phone",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.value() == value)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactMethod::Email => "youremail@example.com",
            ContactMethod::Phone | ContactMethod::Whatsapp => "Your phone number",
            ContactMethod::Both => "Email and phone number",
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            ContactMethod::Whatsapp => Some("Please include country code"),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderDraft {
    pub service: Option<Service>,
    pub name: String,
    pub email: String,
    pub project_details: String,
    pub budget: u32,
    pub deadline: Option<Date>,
    pub contact_method: Option<ContactMethod>,
    pub contact_detail: String,
    /// Reference file name only; nothing is uploaded.
    pub attachment: Option<String>,
    pub terms_accepted: bool,
}

impl OrderDraft {
    pub fn new(today: Date) -> Self {
        Self {
            service: None,
            name: String::new(),
            email: String::new(),
            project_details: String::new(),
            budget: DEFAULT_BUDGET,
            deadline: Some(default_deadline(today)),
            contact_method: None,
            contact_detail: String::new(),
            attachment: None,
            terms_accepted: false,
        }
    }

    /// Snaps slider input onto the budget grid.
    pub fn set_budget(&mut self, raw: u32) {
        let clamped = raw.clamp(BUDGET_MIN, BUDGET_MAX);
        self.budget = (clamped + BUDGET_STEP / 2) / BUDGET_STEP * BUDGET_STEP;
    }

    /// Builds the wire shape; `None` while a required choice is unset.
    pub fn to_payload(&self) -> Option<OrderPayload> {
        Some(OrderPayload {
            service: self.service?,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            project_details: self.project_details.trim().to_string(),
            budget: self.budget,
            deadline: format_iso(self.deadline?),
            contact_method: self.contact_method?,
            contact_detail: self.contact_detail.trim().to_string(),
            attachment_name: self.attachment.clone(),
            terms_accepted: self.terms_accepted,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub service: Service,
    pub name: String,
    pub email: String,
    pub project_details: String,
    pub budget: u32,
    pub deadline: String,
    pub contact_method: ContactMethod,
    pub contact_detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,
    pub terms_accepted: bool,
}

/// Browsers report file inputs as `C:\fakepath\name.ext`; keep the name.
pub fn file_name_from_input(value: &str) -> Option<String> {
    let name = value.rsplit(['\\', '/']).next()?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::Month;

    fn today() -> Date {
        Date::from_calendar_date(2026, Month::October, 16).unwrap()
    }

    #[test]
    fn new_draft_uses_documented_defaults() {
        let draft = OrderDraft::new(today());
        assert_eq!(draft.service, None);
        assert_eq!(draft.budget, 500);
        assert_eq!(
            draft.deadline,
            Some(Date::from_calendar_date(2026, Month::October, 23).unwrap())
        );
        assert_eq!(draft.contact_method, None);
        assert_eq!(draft.attachment, None);
        assert!(!draft.terms_accepted);
    }

    #[test]
    fn catalog_values_round_trip_through_lookup() {
        for service in Service::ALL {
            assert_eq!(Service::from_value(service.value()), Some(service));
        }
        assert_eq!(Service::from_value(""), None);
        assert_eq!(ContactMethod::from_value("fax"), None);
    }

    #[test]
    fn budget_snaps_to_grid_and_bounds() {
        let mut draft = OrderDraft::new(today());
        draft.set_budget(1249);
        assert_eq!(draft.budget, 1200);
        draft.set_budget(1250);
        assert_eq!(draft.budget, 1300);
        draft.set_budget(0);
        assert_eq!(draft.budget, BUDGET_MIN);
        draft.set_budget(90_000);
        assert_eq!(draft.budget, BUDGET_MAX);
    }

    #[test]
    fn payload_serializes_camel_case() {
        let mut draft = OrderDraft::new(today());
        draft.service = Some(Service::WebDevelopment);
        draft.name = " Jane Doe ".to_string();
        draft.email = "jane@example.com".to_string();
        draft.project_details = "A landing page".to_string();
        draft.contact_method = Some(ContactMethod::Email);
        draft.contact_detail = "jane@example.com".to_string();

        let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert_eq!(json["service"], "web_development");
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["projectDetails"], "A landing page");
        assert_eq!(json["deadline"], "2026-10-23");
        assert_eq!(json["contactMethod"], "email");
        assert!(json.get("attachmentName").is_none());
    }

    #[test]
    fn payload_requires_choices() {
        assert_eq!(OrderDraft::new(today()).to_payload(), None);
    }

    #[test]
    fn file_name_strips_fake_path() {
        assert_eq!(
            file_name_from_input("C:\\fakepath\\brief.pdf").as_deref(),
            Some("brief.pdf")
        );
        assert_eq!(file_name_from_input("mockup.png").as_deref(), Some("mockup.png"));
        assert_eq!(file_name_from_input(""), None);
    }
}
