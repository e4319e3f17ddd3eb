use serde::{Deserialize, Serialize};

/// Fixed source tag stamped on every record created from this app.
///
/// The remote service also accepts records from automated ingestion sources;
/// this tag marks ours as manually entered.
pub const SOURCE_MANUAL: &str = "ingreso manual";

/// A classification tag for a record, sourced from the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// English name alongside the service's primary (Spanish) name.
    #[serde(default)]
    pub alt_name: Option<String>,
}

/// Paginated response from `GET /api/categories/`.
///
/// The service paginates in the usual Django REST style. Only `results` is
/// consumed; the envelope fields are tolerated so a non-paginating deployment
/// still parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Category>,
}

/// The local category list used when the remote fetch fails, so the form
/// stays usable offline.
pub fn fallback_categories() -> Vec<Category> {
    [
        (1, "Hogar"),
        (2, "Comidas y bebidas"),
        (3, "Salud y cuidado personal"),
        (4, "Supermercado"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id,
        name: name.to_string(),
        alt_name: None,
    })
    .collect()
}

/// Whether an entry is money going out or coming in.
///
/// This is a UI toggle only: the wire payload carries no type field and the
/// service treats every record the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    Expense,
    Income,
}

impl Default for RecordType {
    fn default() -> Self {
        RecordType::Expense
    }
}

impl RecordType {
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Expense => "Expense",
            RecordType::Income => "Income",
        }
    }
}

/// Body of `POST /api/records/`.
///
/// Field order is the payload order the service documents; serde_json
/// serializes in declaration order, so keep these as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub description: String,
    pub amount: f64,
    pub source: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Category id.
    pub category: i64,
}

/// A record as echoed back by the service after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub source: String,
    pub date: String,
    pub category: i64,
}

/// Errors from talking to the record-keeping service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("server error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Specific validation failures for the record form, in the order the form
/// checks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordValidationError {
    EmptyDescription,
    EmptyAmount,
    InvalidAmountFormat(String),
    AmountNotPositive,
}

/// Result of validating the record form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFormValidation {
    pub is_valid: bool,
    pub errors: Vec<RecordValidationError>,
    /// Parsed amount when the amount field validated.
    pub cleaned_amount: Option<f64>,
}

/// State for the single record entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFormState {
    pub description: String,
    pub amount_input: String,
    pub record_type: RecordType,
    /// Selected date as `YYYY-MM-DD`; `None` means "today".
    pub date: Option<String>,
    /// Selected category id; `None` means the first loaded category.
    pub category_id: Option<i64>,
    pub is_submitting: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

/// Type of calendar day cell for explicit rendering logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalendarDayType {
    /// Blank padding cell before the first of the month.
    PaddingBefore,
    /// Actual day within the month.
    MonthDay,
}

/// A single cell in the date-picker grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells.
    pub day: u32,
    /// `YYYY-MM-DD`, empty for padding cells.
    pub date: String,
    pub day_type: CalendarDayType,
}

/// A month of date-picker cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: u32,
    pub days: Vec<CalendarDay>,
    /// Weekday of the first of the month, 0 = Sunday.
    pub first_day_of_week: u32,
}

/// The month/year the date picker is currently displaying, independent of the
/// selected date until the selection is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: u32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        use chrono::Datelike;
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_categories_are_fixed() {
        let categories = fallback_categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(
            categories.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(categories[0].name, "Hogar");
        assert_eq!(categories[1].name, "Comidas y bebidas");
        assert_eq!(categories[2].name, "Salud y cuidado personal");
        assert_eq!(categories[3].name, "Supermercado");
    }

    #[test]
    fn test_record_type_defaults_to_expense() {
        assert_eq!(RecordType::default(), RecordType::Expense);
    }

    #[test]
    fn test_create_record_request_payload_shape() {
        let request = CreateRecordRequest {
            description: "Coffee".to_string(),
            amount: 4.5,
            source: SOURCE_MANUAL.to_string(),
            date: "2024-12-01".to_string(),
            category: 2,
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"description":"Coffee","amount":4.5,"source":"ingreso manual","date":"2024-12-01","category":2}"#
        );
    }

    #[test]
    fn test_category_list_response_tolerates_missing_pagination() {
        let json = r#"{"results":[{"id":2,"name":"Comidas y bebidas","alt_name":"Food"}]}"#;
        let response: CategoryListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, 2);
        assert_eq!(response.results[0].alt_name.as_deref(), Some("Food"));
        assert_eq!(response.next, None);
    }

    #[test]
    fn test_category_parses_without_alt_name() {
        let json = r#"{"id":1,"name":"Hogar"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.alt_name, None);
    }
}
