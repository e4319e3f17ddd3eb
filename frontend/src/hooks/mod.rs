pub mod use_categories;
pub mod use_record_form;

pub use use_categories::{use_categories, UseCategoriesResult};
pub use use_record_form::{use_record_form, UseRecordFormActions, UseRecordFormResult};
