//! Pesticide application scheduling

use serde::{Deserialize, Serialize};
use shared::models::{ApplicationStatus, PesticideApplication};
use shared::validation::{parse_date_input, validate_required};

use crate::error::{DashboardError, DashboardResult};

/// Element ids of the add-schedule form fields
pub mod fields {
    pub const DATE: &str = "schedule-date";
    pub const PEST: &str = "schedule-pest";
    pub const TREATMENT: &str = "schedule-treatment";
    pub const QUANTITY: &str = "schedule-quantity";
    pub const AREA: &str = "schedule-area";

    pub const ALL: [&str; 5] = [DATE, PEST, TREATMENT, QUANTITY, AREA];
}

/// Raw values of the add-schedule form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleForm {
    pub date: String,
    pub target_pest: String,
    pub treatment: String,
    pub quantity: String,
    pub area: String,
}

impl ScheduleForm {
    /// Check every field is filled in and turn the form into a planned application
    pub fn into_application(self) -> DashboardResult<PesticideApplication> {
        let date = parse_date_input(&self.date).map_err(|msg| validation("date", msg))?;

        for (field, value) in [
            ("targetPest", &self.target_pest),
            ("treatment", &self.treatment),
            ("quantity", &self.quantity),
            ("area", &self.area),
        ] {
            validate_required(value).map_err(|msg| validation(field, msg))?;
        }

        Ok(PesticideApplication {
            date,
            target_pest: self.target_pest.trim().to_string(),
            treatment: self.treatment.trim().to_string(),
            quantity: self.quantity.trim().to_string(),
            area: self.area.trim().to_string(),
            status: ApplicationStatus::Planned,
        })
    }
}

fn validation(field: &str, message: &str) -> DashboardError {
    DashboardError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> ScheduleForm {
        ScheduleForm {
            date: "2024-02-01".to_string(),
            target_pest: "Aphids".to_string(),
            treatment: "Ladybird release".to_string(),
            quantity: "500 units".to_string(),
            area: "Field C".to_string(),
        }
    }

    #[test]
    fn test_complete_form_is_planned() {
        let application = form().into_application().unwrap();
        assert_eq!(application.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(application.status, ApplicationStatus::Planned);
        assert_eq!(application.treatment, "Ladybird release");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut incomplete = form();
        incomplete.area = " ".to_string();
        match incomplete.into_application() {
            Err(DashboardError::Validation { field, .. }) => assert_eq!(field, "area"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let mut incomplete = form();
        incomplete.date = "next week".to_string();
        match incomplete.into_application() {
            Err(DashboardError::Validation { field, .. }) => assert_eq!(field, "date"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
