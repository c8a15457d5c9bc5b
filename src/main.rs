use std::process::ExitCode;

use glbootstrap::{ApplicationState, ExitCondition, WindowConfig, geometry, logger};

fn main() -> ExitCode {
    logger::init();

    match ApplicationState::new(&WindowConfig::default(), &geometry::TRIANGLE) {
        Ok(mut state) => {
            state.run(ExitCondition::WindowClose);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_status())
        }
    }
}
