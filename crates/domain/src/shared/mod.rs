pub mod entity;
pub mod recurrence;
