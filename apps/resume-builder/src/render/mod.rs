pub mod escape;
pub mod latex;
pub mod template;
