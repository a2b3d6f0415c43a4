//! Command handlers
//!
//! - `init`: write the sample resume description
//! - `build`: load, render, compile and optionally fit a resume onto one page

pub mod build;
pub mod init;
