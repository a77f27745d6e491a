pub mod registry;
pub mod report;
pub mod weather;
