// Module exports for models

pub mod day;
pub mod plot;
pub mod schedule;
pub mod style;
