//! Application state and the frame loop.

use glam::Vec4;
use glow::HasContext;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::abs::*;
use crate::geometry::Position;

/// Background color the framebuffer is cleared to every frame.
pub const CLEAR_COLOR: Vec4 = Vec4::new(0.2, 0.3, 0.3, 1.0);

/// Decides when the frame loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCondition {
    /// Stop once the window is closed.
    WindowClose,
    /// Stop once the given key is pressed, or the window is closed.
    KeyPress(Keycode),
}

impl ExitCondition {
    /// Returns `true` if `event` ends the frame loop.
    pub fn is_met(&self, event: &Event) -> bool {
        match (self, event) {
            (_, Event::Quit { .. }) => true,
            (
                ExitCondition::KeyPress(key),
                Event::KeyDown {
                    keycode: Some(pressed),
                    ..
                },
            ) => pressed == key,
            _ => false,
        }
    }
}

/// Everything the program owns: the window and context, the linked shader
/// program and the uploaded geometry.
///
/// The GPU objects are declared before [`App`] so they are released while
/// the context still exists.
pub struct ApplicationState {
    pub mesh: Mesh,
    pub program: ShaderProgram,
    pub app: App,
}

impl ApplicationState {
    /// Opens the window, builds the shader program, uploads `vertices` and
    /// finally shows the window.
    pub fn new(config: &WindowConfig, vertices: &[Position]) -> Result<Self, AppError> {
        let mut app = App::new(config)?;

        let program = crate::shader_program!(triangle, app.gl, ".").map_err(AppError::Shader)?;
        log::debug!("Linked triangle shader program");

        let mesh = Mesh::new(&app.gl, vertices, glow::TRIANGLES).map_err(AppError::Geometry)?;
        log::debug!("Uploaded {} vertices", mesh.vertex_count());

        let (width, height) = app.drawable_size();
        unsafe {
            app.gl.viewport(0, 0, width as i32, height as i32);
        }
        app.show();

        Ok(Self { mesh, program, app })
    }

    /// Clears the framebuffer and draws the mesh once.
    pub fn render_frame(&self) {
        unsafe {
            self.app
                .gl
                .clear_color(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, CLEAR_COLOR.w);
            self.app.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.program.bind();
        self.mesh.draw();
    }

    /// Runs the frame loop until `exit` is met and returns the number of
    /// frames presented.
    pub fn run(&mut self, exit: ExitCondition) -> u64 {
        let mut frames = 0;

        'running: loop {
            self.render_frame();
            self.app.window.gl_swap_window();
            frames += 1;

            for event in self.app.event_pump.poll_iter() {
                if exit.is_met(&event) {
                    break 'running;
                }
            }
        }

        log::debug!("Frame loop ended after {} frames", frames);
        frames
    }
}

#[cfg(test)]
mod tests {
    use sdl2::keyboard::{Mod, Scancode};

    use super::*;

    fn key_down(keycode: Keycode, scancode: Scancode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(keycode),
            scancode: Some(scancode),
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_quit_ends_every_variant() {
        let quit = Event::Quit { timestamp: 0 };
        assert!(ExitCondition::WindowClose.is_met(&quit));
        assert!(ExitCondition::KeyPress(Keycode::Escape).is_met(&quit));
    }

    #[test]
    fn test_key_press_only_matches_designated_key() {
        let exit = ExitCondition::KeyPress(Keycode::Escape);
        assert!(exit.is_met(&key_down(Keycode::Escape, Scancode::Escape)));
        assert!(!exit.is_met(&key_down(Keycode::Space, Scancode::Space)));
    }

    #[test]
    fn test_window_close_ignores_keys() {
        let exit = ExitCondition::WindowClose;
        assert!(!exit.is_met(&key_down(Keycode::Escape, Scancode::Escape)));
    }

    #[test]
    fn test_clear_color() {
        assert_eq!(CLEAR_COLOR, Vec4::new(0.2, 0.3, 0.3, 1.0));
    }

    #[test]
    #[ignore = "requires a display and an OpenGL 4.6 driver"]
    fn test_open_and_close() {
        let mut state =
            ApplicationState::new(&WindowConfig::default(), &crate::geometry::TRIANGLE).unwrap();
        assert_eq!(state.mesh.vertex_count(), 3);

        state
            .app
            .sdl
            .event()
            .unwrap()
            .push_event(Event::Quit { timestamp: 0 })
            .unwrap();
        assert_eq!(state.run(ExitCondition::WindowClose), 1);
    }
}
