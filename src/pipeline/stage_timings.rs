use core::fmt;
use core::time::Duration;

/// Wall-clock time spent in each stage of a [`run`](crate::pipeline::run).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StageTimings {
    /// Reading the point file.
    pub load_points: Duration,
    /// Reading the plane-definition file.
    pub load_plane_points: Duration,
    /// Building the half-spaces.
    pub construct_planes: Duration,
    /// Partitioning the points.
    pub classification: Duration,
    /// Writing the accepted points (including their optional downsampling).
    pub save_accepted: Duration,
    /// Writing the rejected points (including their optional downsampling).
    pub save_rejected: Duration,
    /// The whole run.
    pub total: Duration,
}

fn ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

impl fmt::Display for StageTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stages = [
            ("Load points", self.load_points),
            ("Load plane points", self.load_plane_points),
            ("Construct planes", self.construct_planes),
            ("Classification", self.classification),
            ("Save good points", self.save_accepted),
            ("Save bad points", self.save_rejected),
            ("Total elapsed", self.total),
        ];

        writeln!(f, "Timing breakdown:")?;
        for (name, duration) in stages {
            writeln!(f, "  {:<18}: {:>6.2} ms", name, ms(duration))?;
        }

        Ok(())
    }
}
