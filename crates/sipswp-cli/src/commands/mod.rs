pub mod report;
pub mod schedule;
pub mod words;
