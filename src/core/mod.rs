pub mod clipboard;
pub mod generator;
pub mod seed;
pub mod tailor;
pub mod template;
pub mod twister;
