use crate::config::{ArmConfig, ArmKind};
use crate::driver::AnimationDriver;
use crate::errors::ArmsimErrors;
use crate::presenter::{ChainPanel, PlanarFramesPanel, ReportPanel, SpatialAxesPanel};
use crate::render::{Renderer, TrailHistory};
use kinematics::chain::ChainSolution;
use kinematics::{
    ArmModel, KinematicsErrors, PlanarFrame, Pose2D, SerialChain, SpatialSolution, planar,
    spatial,
};
use kinematics_result::{FrameRecorder, ResultErrors, ResultManager};
use nalgebra::Point3;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use utilities::format_duration;

/// The kinematics engine selected by an [`ArmConfig`].
#[derive(Debug, Clone)]
pub enum Engine {
    Planar,
    Spatial,
    Chain(SerialChain),
}

impl Engine {
    pub fn from_config(config: &ArmConfig) -> Result<Self, ArmsimErrors> {
        config.validate()?;
        let engine = match (config.kind, config.axis_sequence()) {
            (ArmKind::Planar, _) => Engine::Planar,
            (ArmKind::Spatial, None) => Engine::Spatial,
            (ArmKind::Spatial, Some(axes)) => {
                Engine::Chain(SerialChain::new(config.links.clone(), axes)?)
            }
        };
        Ok(engine)
    }

    pub fn solve(&self, arm: &ArmModel) -> Result<FrameSolution, KinematicsErrors> {
        match self {
            Engine::Planar => {
                let (pose, frames) = planar::compute_with_frames(arm.links(), arm.angles())?;
                Ok(FrameSolution::Planar { pose, frames })
            }
            Engine::Spatial => Ok(FrameSolution::Spatial(spatial::compute(
                arm.links(),
                arm.angles(),
            )?)),
            Engine::Chain(chain) => Ok(FrameSolution::Chain(chain.compute(arm.angles())?)),
        }
    }
}

/// Output of one engine evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameSolution {
    Planar {
        pose: Pose2D,
        frames: Vec<PlanarFrame>,
    },
    Spatial(SpatialSolution),
    Chain(ChainSolution),
}

impl FrameSolution {
    /// Joint positions with planar arms lifted into the `z = 0` plane.
    pub fn joints(&self) -> Vec<Point3<f64>> {
        match self {
            FrameSolution::Planar { pose, .. } => pose
                .points()
                .iter()
                .map(|p| Point3::new(p.x, p.y, 0.0))
                .collect(),
            FrameSolution::Spatial(solution) => solution.pose.points().to_vec(),
            FrameSolution::Chain(solution) => solution.pose.points().to_vec(),
        }
    }

    pub fn end_effector(&self) -> Point3<f64> {
        match self {
            FrameSolution::Planar { pose, .. } => {
                let p = pose.end_effector();
                Point3::new(p.x, p.y, 0.0)
            }
            FrameSolution::Spatial(solution) => solution.end_effector(),
            FrameSolution::Chain(solution) => solution.end_effector(),
        }
    }

    pub fn record(
        &self,
        recorder: &mut FrameRecorder,
        results: &mut ResultManager,
        frame: usize,
    ) -> Result<(), ResultErrors> {
        match self {
            FrameSolution::Planar { pose, .. } => recorder.record(results, frame, pose),
            FrameSolution::Spatial(solution) => recorder.record(results, frame, &solution.pose),
            FrameSolution::Chain(solution) => recorder.record(results, frame, &solution.pose),
        }
    }

    /// The diagnostics panel: joint frames for planar arms, axis matrices
    /// and the transform report for spatial arms.
    pub fn panel(&self) -> String {
        match self {
            FrameSolution::Planar { frames, .. } => PlanarFramesPanel(frames).to_string(),
            FrameSolution::Spatial(solution) => format!(
                "{}\n\n{}",
                SpatialAxesPanel(solution),
                ReportPanel(&solution.report())
            ),
            FrameSolution::Chain(solution) => format!(
                "{}\n\n{}",
                ChainPanel(solution),
                ReportPanel(&solution.report())
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory that receives `<name>.csv`, nothing is recorded when absent.
    pub output: Option<PathBuf>,
    pub delay: bool,
}

#[derive(Debug)]
pub struct RunSummary {
    pub frames: usize,
    pub last: Option<FrameSolution>,
    pub elapsed: Duration,
    pub recorded: Option<PathBuf>,
}

/// Drives every frame of the configured animation through the engine and
/// the renderer.
pub fn run_animation<R: Renderer>(
    config: &ArmConfig,
    options: &RunOptions,
    renderer: &mut R,
) -> Result<RunSummary, ArmsimErrors> {
    let engine = Engine::from_config(config)?;
    let mut arm = ArmModel::new(config.links.clone());
    let mut driver = AnimationDriver::new(config.animation.clone(), config.interval());
    let mut trail = TrailHistory::new(config.trail_length);
    let mut results = options.output.clone().map(ResultManager::new);
    let mut recorder = FrameRecorder::new(&config.name);

    info!(
        name = %config.name,
        frames = driver.frame_count(),
        links = config.links.len(),
        "starting animation"
    );

    let start = Instant::now();
    let mut frames = 0;
    let mut last = None;
    while let Some(frame) = driver.advance(&mut arm)? {
        let solution = engine.solve(&arm)?;
        trail.push(solution.end_effector());
        renderer.render(frame, &solution.joints(), &trail)?;
        if let Some(results) = results.as_mut() {
            solution.record(&mut recorder, results, frame)?;
        }
        debug!(frame, end_effector = ?solution.end_effector(), "frame rendered");

        frames += 1;
        last = Some(solution);
        if options.delay && frame + 1 < driver.frame_count() {
            driver.wait();
        }
    }

    let recorded = match results.as_mut() {
        Some(results) => {
            results.flush()?;
            let path = results.file_path(recorder.name());
            info!(path = %path.display(), "poses recorded");
            Some(path)
        }
        None => None,
    };

    let elapsed = start.elapsed();
    info!(frames, elapsed = %format_duration(elapsed), "animation finished");

    Ok(RunSummary {
        frames,
        last,
        elapsed,
        recorded,
    })
}

/// Pull-based diagnostics for a single frame of the animation.
pub fn analyze_frame(config: &ArmConfig, frame: usize) -> Result<FrameSolution, ArmsimErrors> {
    let engine = Engine::from_config(config)?;
    let driver = AnimationDriver::new(config.animation.clone(), config.interval());
    let degrees = driver
        .angles_at(frame)
        .ok_or(ArmsimErrors::FrameOutOfRange {
            frame,
            frames: driver.frame_count(),
        })?;

    let mut arm = ArmModel::new(config.links.clone());
    arm.set_angles_degrees(&degrees)?;
    Ok(engine.solve(&arm)?)
}
