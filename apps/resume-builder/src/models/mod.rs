pub mod resume;
pub mod sample;
pub mod validation;
