pub(crate) mod authoring;
pub(crate) mod config;
pub(crate) mod model;
pub(crate) mod parser;
