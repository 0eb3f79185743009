//! Service Layer

pub mod definition_generator;

pub use definition_generator::DefinitionGenerator;
