//! Shapes supported by planeclip3d.

pub use self::half_space::HalfSpace;
pub use self::plane_definition_error::PlaneDefinitionError;

mod half_space;
mod plane_definition_error;
