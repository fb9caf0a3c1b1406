pub mod report;
pub mod tone;
