//! A minimal SDL2 + OpenGL bootstrap that draws hard-coded triangles.

pub mod abs;
pub mod geometry;
pub mod logger;
pub mod slurp;
pub mod state;

pub use abs::{AppError, WindowConfig};
pub use state::{ApplicationState, ExitCondition};

/// Builds a [`abs::ShaderProgram`] from `shaders/<name>/vert.glsl` and
/// `shaders/<name>/frag.glsl`, relative to `$path_prefix`.
#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {
        $crate::abs::ShaderProgram::from_sources(
            &$gl,
            include_str!(concat!(
                $path_prefix,
                "/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
            include_str!(concat!(
                $path_prefix,
                "/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
    };
}
