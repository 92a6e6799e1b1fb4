mod army;
mod document;
mod status;
mod unit;

pub use army::{Army, UnitEntry};
pub use document::Document;
pub use status::{Status, UnitStatus};
pub use unit::{yes_no, Unit};
