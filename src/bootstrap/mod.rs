pub mod run;
pub mod tracing;
pub mod wiring;

pub use run::execute;
pub use wiring::{wire_dependencies, AppDeps};
