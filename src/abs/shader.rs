//! OpenGL Shaders
//!
//! A [`Shader`] is a single compiled stage and only lives until it has been
//! linked into a [`ShaderProgram`].

use std::fmt;
use std::sync::Arc;

use glow::HasContext;

/// The pipeline stages this crate compiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// A compiled shader stage. Deleted on drop.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
    stage: ShaderStage,
}

impl Shader {
    /// Compiles `source` as the given stage, returning the info log on failure.
    pub fn compile(
        gl: &Arc<glow::Context>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, String> {
        let id = unsafe { gl.create_shader(stage.gl_kind()) }
            .map_err(|e| format!("{} shader: {}", stage, e))?;
        // Wrap first so the object is released on every early return.
        let shader = Self {
            gl: Arc::clone(gl),
            id,
            stage,
        };

        let compiled = unsafe {
            gl.shader_source(id, source);
            gl.compile_shader(id);
            gl.get_shader_compile_status(id)
        };
        if !compiled {
            let log = unsafe { gl.get_shader_info_log(id) };
            return Err(format!("{} shader: {}", stage, log.trim_end()));
        }

        log::debug!("Compiled {} shader", stage);
        Ok(shader)
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { self.gl.delete_shader(self.id) }
    }
}

/// A linked shader program. Deleted on drop.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links `stages` into a program and detaches them again afterwards.
    pub fn link(gl: &Arc<glow::Context>, stages: &[&Shader]) -> Result<Self, String> {
        let id = unsafe { gl.create_program() }?;
        let program = Self {
            gl: Arc::clone(gl),
            id,
        };

        let linked = unsafe {
            for shader in stages {
                gl.attach_shader(id, shader.id);
            }
            gl.link_program(id);
            for shader in stages {
                gl.detach_shader(id, shader.id);
            }
            gl.get_program_link_status(id)
        };
        if !linked {
            let log = unsafe { gl.get_program_info_log(id) };
            return Err(format!("link: {}", log.trim_end()));
        }

        Ok(program)
    }

    /// Compiles a vertex and a fragment stage and links them.
    ///
    /// The stage objects are deleted before this returns; only the linked
    /// program is kept.
    pub fn from_sources(gl: &Arc<glow::Context>, vert: &str, frag: &str) -> Result<Self, String> {
        let vert = Shader::compile(gl, ShaderStage::Vertex, vert)?;
        let frag = Shader::compile(gl, ShaderStage::Fragment, frag)?;
        Self::link(gl, &[&vert, &frag])
    }

    /// Makes this the active program.
    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.id)) }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.id) }
    }
}
