mod get_cleaning_enabled;
mod set_cleaning_enabled;

pub use get_cleaning_enabled::GetCleaningEnabled;
pub use set_cleaning_enabled::SetCleaningEnabled;
