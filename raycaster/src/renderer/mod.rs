pub mod camera;
pub mod context;
pub mod shader;
pub mod shape;
