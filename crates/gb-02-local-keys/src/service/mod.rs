//! Service Layer

pub mod materializer;

pub use materializer::LocalKeyMaterializer;
