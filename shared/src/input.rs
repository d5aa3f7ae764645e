//! Collects the prediction inputs from the view

use crate::models::PredictionRequest;
use crate::view::{ids, ViewSurface};

/// Pick the country: free-text entry wins when it has content, else the dropdown.
pub fn resolve_country(manual: Option<&str>, selected: Option<&str>) -> String {
    match manual.map(str::trim) {
        Some(country) if !country.is_empty() => country.to_string(),
        _ => selected.unwrap_or_default().to_string(),
    }
}

/// Build a prediction request from the current form state.
///
/// Empty country or crop values are passed through as-is.
pub fn collect_request<V: ViewSurface + ?Sized>(view: &V) -> PredictionRequest {
    let manual = view.value(ids::COUNTRY_MANUAL);
    let selected = view.value(ids::COUNTRY_SELECT);
    let crop = view.value(ids::CROP_INPUT).unwrap_or_default();

    PredictionRequest {
        country: resolve_country(manual.as_deref(), selected.as_deref()),
        crop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MemorySurface;
    use proptest::prelude::*;

    fn form(manual: &str, selected: &str, crop: &str) -> MemorySurface {
        let mut view = MemorySurface::new();
        view.set_value(ids::COUNTRY_MANUAL, manual);
        view.set_value(ids::COUNTRY_SELECT, selected);
        view.set_value(ids::CROP_INPUT, crop);
        view
    }

    #[test]
    fn test_manual_country_wins() {
        let request = collect_request(&form("Kenya", "Nigeria", "Maize"));
        assert_eq!(request, PredictionRequest::new("Kenya", "Maize"));
    }

    #[test]
    fn test_empty_manual_falls_back_to_select() {
        let request = collect_request(&form("", "Nigeria", "Maize"));
        assert_eq!(request.country, "Nigeria");
    }

    #[test]
    fn test_whitespace_manual_falls_back_to_select() {
        let request = collect_request(&form("   ", "Nigeria", "Wheat"));
        assert_eq!(request.country, "Nigeria");
    }

    #[test]
    fn test_manual_is_trimmed_but_crop_is_verbatim() {
        let request = collect_request(&form("  Kenya ", "Nigeria", " Maize "));
        assert_eq!(request.country, "Kenya");
        assert_eq!(request.crop, " Maize ");
    }

    #[test]
    fn test_missing_controls_pass_empty_values() {
        let request = collect_request(&MemorySurface::new());
        assert_eq!(request, PredictionRequest::new("", ""));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Non-blank manual entry always wins over the dropdown
        #[test]
        fn prop_non_blank_manual_wins(manual in "[A-Za-z ]{0,5}[A-Za-z][A-Za-z ]{0,5}", selected in "[A-Za-z]{0,10}") {
            let country = resolve_country(Some(manual.as_str()), Some(selected.as_str()));
            prop_assert_eq!(country, manual.trim().to_string());
        }

        /// Blank manual entry always yields the dropdown value
        #[test]
        fn prop_blank_manual_uses_select(manual in "[ \t]{0,4}", selected in "[A-Za-z]{0,10}") {
            let country = resolve_country(Some(manual.as_str()), Some(selected.as_str()));
            prop_assert_eq!(country, selected);
        }
    }
}
