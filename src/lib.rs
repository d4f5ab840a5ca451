pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod sources;
