pub mod app;
pub mod output;
pub mod probe;
pub mod system;
