//! One-page layout: style knobs, the optimization level table and the build controller.

pub mod levels;
pub mod optimizer;
pub mod style;
