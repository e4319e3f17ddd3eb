//! Record entry domain logic: form validation, payload construction, and
//! form state management. The UI only handles presentation; every rule about
//! what makes a submittable record lives here.

use crate::dates;
use crate::models::{
    CreateRecordRequest, RecordFormState, RecordFormValidation, RecordType,
    RecordValidationError, SOURCE_MANUAL,
};

/// Service handling the validation-then-submit pipeline for the record form.
#[derive(Clone, Default)]
pub struct RecordFormService;

impl RecordFormService {
    pub fn new() -> Self {
        Self
    }

    /// Fresh form state: empty fields, expense selected, today's date, first
    /// category.
    pub fn create_form_state(&self) -> RecordFormState {
        RecordFormState {
            description: String::new(),
            amount_input: String::new(),
            record_type: RecordType::Expense,
            date: None,
            category_id: None,
            is_submitting: false,
            error_message: None,
            success_message: None,
        }
    }

    /// Reset the form after a successful submission, keeping any message the
    /// caller wants to show.
    pub fn reset_form(&self, state: &RecordFormState) -> RecordFormState {
        RecordFormState {
            success_message: state.success_message.clone(),
            ..self.create_form_state()
        }
    }

    /// Validate the form input in submission order: description present,
    /// amount present, amount numeric, amount positive.
    ///
    /// Errors are collected in check order; callers surface the first one and
    /// abort, so no partial submission can happen.
    pub fn validate(&self, description: &str, amount_input: &str) -> RecordFormValidation {
        let mut errors = Vec::new();

        if description.trim().is_empty() {
            errors.push(RecordValidationError::EmptyDescription);
        }

        let cleaned_amount = if amount_input.trim().is_empty() {
            errors.push(RecordValidationError::EmptyAmount);
            None
        } else {
            match amount_input.trim().parse::<f64>() {
                Ok(amount) if amount.is_finite() => {
                    if amount <= 0.0 {
                        errors.push(RecordValidationError::AmountNotPositive);
                        None
                    } else {
                        Some(amount)
                    }
                }
                _ => {
                    errors.push(RecordValidationError::InvalidAmountFormat(
                        amount_input.trim().to_string(),
                    ));
                    None
                }
            }
        };

        RecordFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_amount,
        }
    }

    /// User-facing message for a validation error.
    pub fn error_message(&self, error: &RecordValidationError) -> String {
        match error {
            RecordValidationError::EmptyDescription => "Please enter a description".to_string(),
            RecordValidationError::EmptyAmount => "Please enter an amount".to_string(),
            RecordValidationError::InvalidAmountFormat(_) => {
                "Amount must be a valid number".to_string()
            }
            RecordValidationError::AmountNotPositive => {
                "Amount must be greater than 0".to_string()
            }
        }
    }

    /// Message for the first failing check, if any.
    pub fn first_error_message(&self, validation: &RecordFormValidation) -> Option<String> {
        validation.errors.first().map(|e| self.error_message(e))
    }

    /// Build the normalized wire payload from validated input.
    ///
    /// `date` of `None` means today. The description is trimmed and the fixed
    /// manual-entry source tag is stamped on.
    pub fn build_request(
        &self,
        description: &str,
        amount: f64,
        date: Option<&str>,
        category_id: i64,
    ) -> CreateRecordRequest {
        CreateRecordRequest {
            description: description.trim().to_string(),
            amount,
            source: SOURCE_MANUAL.to_string(),
            date: date
                .map(|d| d.to_string())
                .unwrap_or_else(dates::current_date_string),
            category: category_id,
        }
    }

    /// Confirmation text shown after the service accepts a record.
    pub fn success_message(&self, request: &CreateRecordRequest) -> String {
        format!(
            "Record saved: {} (${:.2}) on {}",
            request.description,
            request.amount,
            dates::format_date_for_display(&request.date)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> RecordFormService {
        RecordFormService::new()
    }

    #[test]
    fn test_valid_input_passes() {
        for (description, amount) in [
            ("Coffee", "4.50"),
            ("  Rent  ", "1200"),
            ("Bus ticket", "0.75"),
            ("x", "0.01"),
        ] {
            let validation = service().validate(description, amount);
            assert!(validation.is_valid, "{description}/{amount} should pass");
            assert!(validation.cleaned_amount.is_some());
        }
    }

    #[test]
    fn test_empty_description_fails_first() {
        let validation = service().validate("", "4.50");
        assert!(!validation.is_valid);
        assert_eq!(validation.errors[0], RecordValidationError::EmptyDescription);
        assert_eq!(
            service().first_error_message(&validation),
            Some("Please enter a description".to_string())
        );
    }

    #[test]
    fn test_description_checked_before_amount() {
        // Both fields empty: the description error is the one surfaced.
        let validation = service().validate("   ", "");
        assert_eq!(validation.errors[0], RecordValidationError::EmptyDescription);
        assert!(validation
            .errors
            .contains(&RecordValidationError::EmptyAmount));
    }

    #[test]
    fn test_empty_amount_fails() {
        let validation = service().validate("Coffee", "   ");
        assert!(!validation.is_valid);
        assert_eq!(validation.errors[0], RecordValidationError::EmptyAmount);
        assert_eq!(
            service().first_error_message(&validation),
            Some("Please enter an amount".to_string())
        );
    }

    #[test]
    fn test_non_numeric_amount_fails() {
        for input in ["abc", "4,50", "12.3.4", "NaN", "inf"] {
            let validation = service().validate("Coffee", input);
            assert!(!validation.is_valid, "{input} should fail");
            assert!(matches!(
                validation.errors[0],
                RecordValidationError::InvalidAmountFormat(_)
            ));
            assert_eq!(
                service().first_error_message(&validation),
                Some("Amount must be a valid number".to_string())
            );
        }
    }

    #[test]
    fn test_non_positive_amount_fails() {
        for input in ["0", "0.00", "-4.50"] {
            let validation = service().validate("Coffee", input);
            assert!(!validation.is_valid, "{input} should fail");
            assert_eq!(
                validation.errors[0],
                RecordValidationError::AmountNotPositive
            );
            assert_eq!(
                service().first_error_message(&validation),
                Some("Amount must be greater than 0".to_string())
            );
        }
    }

    #[test]
    fn test_build_request_normalizes_payload() {
        let request = service().build_request("  Coffee  ", 4.5, Some("2024-12-01"), 2);
        assert_eq!(request.description, "Coffee");
        assert_eq!(request.amount, 4.5);
        assert_eq!(request.source, "ingreso manual");
        assert_eq!(request.date, "2024-12-01");
        assert_eq!(request.category, 2);
    }

    #[test]
    fn test_build_request_defaults_to_today() {
        let request = service().build_request("Coffee", 4.5, None, 1);
        assert_eq!(request.date, dates::current_date_string());
    }

    #[test]
    fn test_reset_form_restores_defaults() {
        let dirty = RecordFormState {
            description: "Coffee".to_string(),
            amount_input: "4.50".to_string(),
            record_type: RecordType::Income,
            date: Some("2024-12-01".to_string()),
            category_id: Some(3),
            is_submitting: true,
            error_message: Some("boom".to_string()),
            success_message: Some("Record saved".to_string()),
        };

        let reset = service().reset_form(&dirty);
        assert_eq!(reset.description, "");
        assert_eq!(reset.amount_input, "");
        assert_eq!(reset.record_type, RecordType::Expense);
        assert_eq!(reset.date, None);
        assert_eq!(reset.category_id, None);
        assert!(!reset.is_submitting);
        assert_eq!(reset.error_message, None);
        // The confirmation banner survives the reset.
        assert_eq!(reset.success_message, Some("Record saved".to_string()));
    }

    #[test]
    fn test_success_message_echoes_record() {
        let request = service().build_request("Coffee", 4.5, Some("2024-12-01"), 2);
        assert_eq!(
            service().success_message(&request),
            "Record saved: Coffee ($4.50) on December 1, 2024"
        );
    }
}
