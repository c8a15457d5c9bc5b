//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! window and the OpenGL context created for it, along with the
//! [`WindowConfig`] it is built from.

use std::fmt;
use std::sync::Arc;

/// Default window title.
pub const TITLE: &str = "OpenGL 4.6";
/// Default window width in pixels.
pub const SCREEN_WIDTH: u32 = 800;
/// Default window height in pixels.
pub const SCREEN_HEIGHT: u32 = 600;

/// Parameters used to open the window and request the OpenGL context.
///
/// A core profile is always requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL `(major, minor)` version.
    pub gl_version: (u8, u8),
    pub resizable: bool,
    /// Keeps the window hidden until [`App::show`] is called.
    pub hidden: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            gl_version: (4, 6),
            resizable: false,
            hidden: true,
        }
    }
}

/// Failures that can happen while bringing the application up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// SDL or its video subsystem could not be initialized.
    Init(String),
    /// The window could not be created.
    Window(String),
    /// The OpenGL context could not be created or made current.
    Context(String),
    /// OpenGL function pointers could not be loaded.
    Loader(String),
    /// A shader failed to compile or the program failed to link.
    Shader(String),
    /// Vertex buffers could not be created.
    Geometry(String),
    /// The event pump could not be obtained.
    Events(String),
}

impl AppError {
    /// Process exit status for this failure.
    ///
    /// Only the very first setup step, bringing SDL up, exits non-zero.
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::Init(_) => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Init(e) => write!(f, "Failed to initialize SDL: {}", e),
            AppError::Window(e) => write!(f, "Failed to create window: {}", e),
            AppError::Context(e) => write!(f, "Failed to create OpenGL context: {}", e),
            AppError::Loader(e) => write!(f, "Failed to load OpenGL: {}", e),
            AppError::Shader(e) => write!(f, "Failed to build shader program: {}", e),
            AppError::Geometry(e) => write!(f, "Failed to upload geometry: {}", e),
            AppError::Events(e) => write!(f, "Failed to open event pump: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Fields drop in declaration order, so the GL context goes away before
/// the window and the window before SDL itself.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    pub gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl: sdl2::Sdl,
}

impl App {
    /// Creates a new [`App`] instance from the given [`WindowConfig`].
    pub fn new(config: &WindowConfig) -> Result<Self, AppError> {
        let sdl = sdl2::init().map_err(AppError::Init)?;
        let video_subsystem = sdl.video().map_err(AppError::Init)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);
        gl_attr.set_double_buffer(true);

        let mut builder = video_subsystem.window(&config.title, config.width, config.height);
        builder.opengl().position_centered();
        if config.resizable {
            builder.resizable();
        }
        if config.hidden {
            builder.hidden();
        }
        let window = builder
            .build()
            .map_err(|e| AppError::Window(e.to_string()))?;
        log::debug!(
            "Created window \"{}\" ({}x{})",
            config.title,
            config.width,
            config.height
        );

        let gl_context = window.gl_create_context().map_err(AppError::Context)?;
        window
            .gl_make_current(&gl_context)
            .map_err(AppError::Context)?;

        if video_subsystem
            .gl_get_proc_address("glCreateShader")
            .is_null()
        {
            return Err(AppError::Loader(
                "glCreateShader could not be resolved".to_string(),
            ));
        }
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let gl = Arc::new(gl);
        log::info!(
            "OpenGL {}.{} core context ready",
            config.gl_version.0,
            config.gl_version.1
        );

        let event_pump = sdl.event_pump().map_err(AppError::Events)?;

        Ok(Self {
            gl,
            event_pump,
            gl_context,
            window,
            video_subsystem,
            sdl,
        })
    }

    /// Reveals the window. Does nothing if it is already visible.
    pub fn show(&mut self) {
        self.window.show();
    }

    /// Returns the size of the drawable area in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }
}
