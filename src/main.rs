//! gravsim - 2D gravitational n-body simulator
//!
//! Headless driver: loads a system file, steps it once per frame and logs
//! where every body ends up. A renderer would consume the per-frame
//! `BodyInstance` buffer instead.

use std::process::ExitCode;

use gravsim::config::AppConfig;
use gravsim::systems::SimulationSystem;
use gravsim_core::{ActiveSystem, SystemTemplate};

fn main() -> ExitCode {
    let config = AppConfig::load();

    // Initialize logging (RUST_LOG wins over the configured level)
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting gravsim");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let template = match SystemTemplate::load(&config.simulation.system_path) {
        Ok(template) => template,
        Err(e) => {
            log::error!("Failed to load system '{}': {}", config.simulation.system_path, e);
            return ExitCode::FAILURE;
        }
    };

    let sim_config = config.physics.to_simulation_config(template.simulation_config());
    let mut system = match ActiveSystem::from_template(&template, Some(sim_config)) {
        Ok(system) => system,
        Err(e) => {
            log::error!("Refusing to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut driver = SimulationSystem::new(config.simulation.frame_rate, config.simulation.log_interval);
    let trajectory = driver.run(&mut system, config.simulation.ticks);

    log::info!("Finished '{}' after {} ticks", system.name, system.world.tick());
    for (_, body) in system.world.bodies() {
        let p = body.position();
        let travelled = trajectory.path_length(body.name()).unwrap_or(0.0);
        log::info!(
            "{}: final position ({:.2}, {:.2}), travelled {:.2}",
            body.name(), p.x, p.y, travelled
        );
    }

    ExitCode::SUCCESS
}
