use glbootstrap::{ApplicationState, ExitCondition, WindowConfig, geometry, logger};
use sdl2::keyboard::Keycode;

fn main() {
    logger::init();

    match ApplicationState::new(&WindowConfig::default(), &geometry::TWO_TRIANGLES) {
        Ok(mut state) => {
            state.run(ExitCondition::KeyPress(Keycode::Escape));
        }
        Err(e) => log::error!("{}", e),
    }
}
