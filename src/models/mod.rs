pub mod activity;
pub mod category;
pub mod palette;

pub use activity::{ActivityLog, ActivityRecord};
pub use category::Category;
pub use palette::Palette;
