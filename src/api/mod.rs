//! Figure-level surface: the document handed to the charting runtime.

mod figure;
mod json_contract;

pub use figure::Figure;
