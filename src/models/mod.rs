//! Data models for the freelancer portal backend.
//!
//! Wire format is snake_case JSON matching the frontend service contract.

mod application;
mod dashboard;
mod job;
mod notification;
mod profile;

pub use application::*;
pub use dashboard::*;
pub use job::*;
pub use notification::*;
pub use profile::*;
