pub mod color;
pub mod condition;
pub mod locale;
pub mod notes;
pub mod snapshot;
pub mod tooth;
pub mod tooth_state;
