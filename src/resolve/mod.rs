pub mod filename;
pub mod semantic;
