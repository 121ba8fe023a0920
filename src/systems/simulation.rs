//! Simulation driver system
//!
//! Manages the frame loop around the physics:
//! - Frame pacing
//! - One physics step per frame
//! - Periodic position logging
//! - Render instance collection

use std::time::{Duration, Instant};
use gravsim_core::{ActiveSystem, BodyInstance, Trajectory};

/// Result of a simulation frame
pub struct FrameResult {
    /// Ticks completed so far
    pub tick: u64,
    /// Render instances for the frame
    pub instances: Vec<BodyInstance>,
}

/// Drives an [`ActiveSystem`] one tick per frame
pub struct SimulationSystem {
    frame_duration: Option<Duration>,
    log_interval: u64,
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    ///
    /// # Arguments
    /// * `frame_rate` - Target frames per second, 0 for unthrottled
    /// * `log_interval` - Log positions every N ticks, 0 to disable
    pub fn new(frame_rate: u32, log_interval: u64) -> Self {
        let frame_duration = (frame_rate > 0).then(|| Duration::from_secs_f64(1.0 / frame_rate as f64));
        Self {
            frame_duration,
            log_interval,
            last_frame: Instant::now(),
        }
    }

    /// Run one simulation frame
    pub fn update(&mut self, system: &mut ActiveSystem) -> FrameResult {
        // 1. Hold the frame rate
        if let Some(frame) = self.frame_duration {
            let elapsed = self.last_frame.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
        self.last_frame = Instant::now();

        // 2. Step physics exactly once
        system.update();
        let tick = system.world.tick();

        // 3. Report
        if self.log_interval > 0 && tick % self.log_interval == 0 {
            for (_, body) in system.world.bodies() {
                let p = body.position();
                let v = body.velocity();
                log::info!(
                    "[tick {}] {}: pos ({:.2}, {:.2}) vel ({:.3}, {:.3})",
                    tick, body.name(), p.x, p.y, v.x, v.y
                );
            }
            let momentum = system.world.total_momentum();
            log::debug!(
                "[tick {}] momentum ({:.6}, {:.6}), kinetic energy {:.4}",
                tick, momentum.x, momentum.y, system.world.kinetic_energy()
            );
        }

        FrameResult {
            tick,
            instances: system.instances(),
        }
    }

    /// Run `ticks` frames, recording every body's path
    pub fn run(&mut self, system: &mut ActiveSystem, ticks: u64) -> Trajectory {
        let mut trajectory = Trajectory::new(&system.world);
        for _ in 0..ticks {
            self.update(system);
            trajectory.record(&system.world);
        }
        trajectory
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
