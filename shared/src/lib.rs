//! Shared types and domain logic for the Expensy form app.
//!
//! Everything the UI does that isn't presentation lives here: the wire types
//! for the record-keeping API, form validation and payload construction, and
//! the calendar math behind the date picker. The frontend crate should only
//! handle rendering and event plumbing.

pub mod calendar;
pub mod dates;
pub mod models;
pub mod records;

pub use calendar::CalendarService;
pub use models::*;
pub use records::RecordFormService;
