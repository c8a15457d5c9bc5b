//! This module contains the thin OpenGL layer: application setup,
//! shader management and mesh handling.

pub mod app;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use mesh::*;
pub use shader::*;
