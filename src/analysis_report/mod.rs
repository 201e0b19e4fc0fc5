//! Analysis report domain
//!
//! Pure model of the report artifact the sandbox backend writes for each
//! execution, plus the classification and transformation services the view
//! model builder relies on. Nothing in this layer touches the filesystem.

pub mod domain;
pub mod samples;
pub mod services;
