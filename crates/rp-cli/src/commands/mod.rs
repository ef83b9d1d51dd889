//! CLI command implementations

pub(crate) mod analytics;
pub(crate) mod branches;
pub(crate) mod common;
pub(crate) mod gate;
pub(crate) mod phases;
pub(crate) mod roadmap;
pub(crate) mod serve;
pub(crate) mod subjects;
pub(crate) mod validate;
