use crate::errors::ArmsimErrors;
use kinematics::LinkSet;
use ron::ser::{PrettyConfig, to_string_pretty};
use rotations::{Axis, AxisSequence};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::path::Path;
use std::time::Duration;

/// Built-in configurations, in the order `armsim presets` lists them.
pub const PRESETS: [&str; 3] = ["planar-demo", "planar-panel", "spatial-panel"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmKind {
    Planar,
    Spatial,
}

/// Where the joint angles of every frame come from. All angles are degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimationConfig {
    /// One explicit angle vector per frame.
    Scripted { frames: Vec<Vec<f64>> },
    /// Joint `j` at frame `t` is `amplitudes[j] * sin(t / periods[j] + phases[j])`.
    Sinusoidal {
        frames: usize,
        amplitudes: Vec<f64>,
        periods: Vec<f64>,
        phases: Vec<f64>,
    },
}

impl AnimationConfig {
    pub fn frame_count(&self) -> usize {
        match self {
            AnimationConfig::Scripted { frames } => frames.len(),
            AnimationConfig::Sinusoidal { frames, .. } => *frames,
        }
    }

    /// Angles of one frame in degrees, `None` past the last frame.
    pub fn angles_at(&self, frame: usize) -> Option<Vec<f64>> {
        if frame >= self.frame_count() {
            return None;
        }
        match self {
            AnimationConfig::Scripted { frames } => Some(frames[frame].clone()),
            AnimationConfig::Sinusoidal {
                amplitudes,
                periods,
                phases,
                ..
            } => {
                let t = frame as f64;
                Some(
                    amplitudes
                        .iter()
                        .zip(periods)
                        .zip(phases)
                        .map(|((amplitude, period), phase)| amplitude * (t / period + phase).sin())
                        .collect(),
                )
            }
        }
    }

    fn check(&self, joints: usize) -> Result<(), String> {
        match self {
            AnimationConfig::Scripted { frames } => {
                for (i, frame) in frames.iter().enumerate() {
                    if frame.len() != joints {
                        return Err(format!(
                            "frame {i} has {} angles but the arm has {joints} links",
                            frame.len()
                        ));
                    }
                }
            }
            AnimationConfig::Sinusoidal {
                amplitudes,
                periods,
                phases,
                ..
            } => {
                for (field, values) in [
                    ("amplitudes", amplitudes),
                    ("periods", periods),
                    ("phases", phases),
                ] {
                    if values.len() != joints {
                        return Err(format!(
                            "{field} has {} entries but the arm has {joints} links",
                            values.len()
                        ));
                    }
                }
                if periods.iter().any(|p| !p.is_finite() || *p == 0.0) {
                    return Err("periods must be finite and non-zero".to_string());
                }
            }
        }
        Ok(())
    }
}

/// A complete arm plus its animation, as stored in a RON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmConfig {
    pub name: String,
    pub kind: ArmKind,
    pub links: LinkSet,
    /// One axis per joint. Only meaningful for spatial arms; when absent a
    /// spatial arm is the fixed z-y-x three link arm.
    #[serde(default)]
    pub axes: Option<Vec<Axis>>,
    pub animation: AnimationConfig,
    /// Frame cadence, 0 runs as fast as possible.
    #[serde(default)]
    pub interval_ms: u64,
    /// Number of end effector positions kept by the renderer, the whole run
    /// when absent.
    #[serde(default)]
    pub trail_length: Option<usize>,
}

impl ArmConfig {
    pub fn preset(name: &str) -> Result<Self, ArmsimErrors> {
        let config = match name {
            "planar-demo" => Self {
                name: name.to_string(),
                kind: ArmKind::Planar,
                links: LinkSet::new(vec![3.0, 2.0, 1.0])?,
                axes: None,
                animation: AnimationConfig::Scripted {
                    frames: vec![
                        vec![0.0, 0.0, 0.0],
                        vec![15.0, 10.0, 5.0],
                        vec![30.0, 20.0, 10.0],
                        vec![45.0, 30.0, 15.0],
                        vec![60.0, 45.0, 25.0],
                        vec![75.0, 60.0, 35.0],
                        vec![90.0, 75.0, 45.0],
                    ],
                },
                interval_ms: 300,
                trail_length: None,
            },
            "planar-panel" => Self {
                name: name.to_string(),
                kind: ArmKind::Planar,
                links: LinkSet::new(vec![3.0, 2.0, 1.0])?,
                axes: None,
                animation: AnimationConfig::Sinusoidal {
                    frames: 160,
                    amplitudes: vec![60.0, 45.0, 30.0],
                    periods: vec![20.0, 25.0, 30.0],
                    phases: vec![0.0, FRAC_PI_2, 0.0],
                },
                interval_ms: 90,
                trail_length: None,
            },
            "spatial-panel" => Self {
                name: name.to_string(),
                kind: ArmKind::Spatial,
                links: LinkSet::new(vec![2.5, 2.0, 1.5])?,
                axes: None,
                animation: AnimationConfig::Sinusoidal {
                    frames: 160,
                    amplitudes: vec![90.0, 60.0, 45.0],
                    periods: vec![25.0, 20.0, 30.0],
                    phases: vec![0.0, FRAC_PI_2, 0.0],
                },
                interval_ms: 90,
                trail_length: None,
            },
            _ => return Err(ArmsimErrors::UnknownPreset(name.to_string())),
        };
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ArmsimErrors> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    pub fn from_ron(content: &str) -> Result<Self, ArmsimErrors> {
        let config: ArmConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ArmsimErrors> {
        Ok(to_string_pretty(self, PrettyConfig::new())?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArmsimErrors> {
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn axis_sequence(&self) -> Option<AxisSequence> {
        self.axes.clone().map(AxisSequence::new)
    }

    pub fn validate(&self) -> Result<(), ArmsimErrors> {
        let joints = self.links.len();
        let invalid = |reason: String| ArmsimErrors::InvalidConfig {
            name: self.name.clone(),
            reason,
        };

        match (self.kind, &self.axes) {
            (ArmKind::Planar, Some(_)) => {
                return Err(invalid(
                    "planar arms rotate about z only, remove `axes`".to_string(),
                ));
            }
            (ArmKind::Spatial, None) if joints != 3 => {
                return Err(invalid(format!(
                    "the fixed spatial arm has 3 links, got {joints}; list `axes` for other chains"
                )));
            }
            (ArmKind::Spatial, Some(axes)) if axes.len() != joints => {
                return Err(invalid(format!(
                    "{} axes given for {joints} links",
                    axes.len()
                )));
            }
            _ => {}
        }

        self.animation.check(joints).map_err(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    const TOL: f64 = 1e-12;

    #[test]
    fn test_presets_are_valid() {
        for name in PRESETS {
            let config = ArmConfig::preset(name).unwrap();
            assert_eq!(config.name, name);
            config.validate().unwrap();
        }
        assert!(matches!(
            ArmConfig::preset("scara"),
            Err(ArmsimErrors::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_planar_demo_script() {
        let config = ArmConfig::preset("planar-demo").unwrap();
        assert_eq!(config.animation.frame_count(), 7);
        assert_eq!(config.animation.angles_at(6), Some(vec![90.0, 75.0, 45.0]));
        assert_eq!(config.animation.angles_at(7), None);
        assert_eq!(config.interval(), Duration::from_millis(300));
    }

    #[test]
    fn test_sinusoidal_angles() {
        let config = ArmConfig::preset("planar-panel").unwrap();
        let first = config.animation.angles_at(0).unwrap();
        assert_abs_diff_eq!(first[0], 0.0, epsilon = TOL);
        assert_abs_diff_eq!(first[1], 45.0, epsilon = TOL);
        assert_abs_diff_eq!(first[2], 0.0, epsilon = TOL);

        let t = 37.0_f64;
        let frame = config.animation.angles_at(37).unwrap();
        assert_abs_diff_eq!(frame[0], (t / 20.0).sin() * 60.0, epsilon = TOL);
        assert_abs_diff_eq!(frame[1], (t / 25.0).cos() * 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(frame[2], (t / 30.0).sin() * 30.0, epsilon = TOL);
        assert_eq!(config.animation.angles_at(160), None);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = ArmConfig::preset("spatial-panel").unwrap();
        let text = config.to_ron().unwrap();
        assert_eq!(ArmConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_load_hand_written_config() {
        let text = r#"(
            name: "wrist",
            kind: Spatial,
            links: [1.0, 1.0, 0.5, 0.25],
            axes: Some([Z, Y, Y, X]),
            animation: Scripted(frames: [[0.0, 0.0, 0.0, 0.0], [10.0, 20.0, 30.0, 40.0]]),
            interval_ms: 50,
        )"#;
        let config = ArmConfig::from_ron(text).unwrap();
        assert_eq!(config.axis_sequence().unwrap().len(), 4);
        assert_eq!(config.trail_length, None);
        assert_eq!(config.animation.frame_count(), 2);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let mut config = ArmConfig::preset("planar-demo").unwrap();
        config.axes = Some(vec![Axis::Z; 3]);
        assert!(matches!(
            config.validate(),
            Err(ArmsimErrors::InvalidConfig { .. })
        ));

        let mut config = ArmConfig::preset("planar-demo").unwrap();
        config.animation = AnimationConfig::Scripted {
            frames: vec![vec![0.0, 0.0]],
        };
        assert!(config.validate().is_err());

        let mut config = ArmConfig::preset("spatial-panel").unwrap();
        config.links = LinkSet::new(vec![1.0, 1.0]).unwrap();
        assert!(config.validate().is_err());

        let mut config = ArmConfig::preset("planar-panel").unwrap();
        if let AnimationConfig::Sinusoidal { periods, .. } = &mut config.animation {
            periods[1] = 0.0;
        }
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_link_in_file_is_a_parse_error() {
        let text = r#"(
            name: "bad",
            kind: Planar,
            links: [1.0, -2.0],
            animation: Scripted(frames: []),
        )"#;
        assert!(matches!(
            ArmConfig::from_ron(text),
            Err(ArmsimErrors::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.ron");
        let config = ArmConfig::preset("planar-demo").unwrap();
        config.save(&path).unwrap();
        assert_eq!(ArmConfig::load(&path).unwrap(), config);
    }
}
