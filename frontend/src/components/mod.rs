pub mod date_picker;
pub mod forms;

pub use date_picker::DatePicker;
pub use forms::RecordForm;
