//! Architecture aggregate: the fixed component identifiers, their static
//! descriptors and the single-card selection state machine.

pub mod entities;
pub mod registry;
pub mod value_objects;

pub use entities::*;
pub use registry::*;
pub use value_objects::*;
