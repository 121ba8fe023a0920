//! Per-tick position history

use gravsim_math::Vec2;
use gravsim_physics::GravityWorld;

/// Positions of every body, one sample per recorded tick
///
/// Body order follows the world's iteration order at the time the recorder
/// was created.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    names: Vec<String>,
    samples: Vec<Vec<Vec2>>,
}

impl Trajectory {
    /// Start a recording with the world's current positions as the first sample
    pub fn new(world: &GravityWorld) -> Self {
        let names = world.bodies().map(|(_, b)| b.name().to_string()).collect();
        let mut trajectory = Self {
            names,
            samples: Vec::new(),
        };
        trajectory.record(world);
        trajectory
    }

    /// Step `world` `ticks` times, recording after each step
    pub fn record_run(world: &mut GravityWorld, ticks: u64) -> Self {
        let mut trajectory = Self::new(world);
        for _ in 0..ticks {
            world.step();
            trajectory.record(world);
        }
        trajectory
    }

    /// Append the world's current positions
    pub fn record(&mut self, world: &GravityWorld) {
        self.samples.push(world.bodies().map(|(_, b)| b.position()).collect());
    }

    /// Number of samples recorded
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Names of the recorded bodies
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Every recorded position of one body
    pub fn path(&self, name: &str) -> Option<Vec<Vec2>> {
        let index = self.names.iter().position(|n| n == name)?;
        Some(self.samples.iter().filter_map(|sample| sample.get(index).copied()).collect())
    }

    /// Total distance travelled by one body
    pub fn path_length(&self, name: &str) -> Option<f64> {
        let path = self.path(name)?;
        Some(path.windows(2).map(|w| w[0].distance(w[1])).sum())
    }

    /// Largest position difference between two recordings of the same bodies
    ///
    /// Returns `None` if the recordings differ in bodies or length.
    pub fn max_deviation(&self, other: &Trajectory) -> Option<f64> {
        if self.names != other.names || self.samples.len() != other.samples.len() {
            return None;
        }

        let deviation = self
            .samples
            .iter()
            .zip(&other.samples)
            .flat_map(|(a, b)| a.iter().zip(b).map(|(p, q)| p.distance(*q)))
            .fold(0.0, f64::max);
        Some(deviation)
    }
}
