pub mod entities;
pub mod extractor;
pub mod fallback;
pub mod normalizer;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
