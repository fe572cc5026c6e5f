use kinematics::KinematicsErrors;
use kinematics_result::ResultErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArmsimErrors {
    #[error("frame {frame} is out of range, the animation has {frames} frames")]
    FrameOutOfRange { frame: usize, frames: usize },
    #[error("invalid config '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Kinematics(#[from] KinematicsErrors),
    #[error("one of --preset or --config is required")]
    NoSource,
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to write results: {0}")]
    Result(#[from] ResultErrors),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("unknown preset '{0}', see `armsim presets`")]
    UnknownPreset(String),
}
