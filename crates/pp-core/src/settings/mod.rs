pub mod defaults;
pub mod model;
