pub mod registry;
pub mod weather;
