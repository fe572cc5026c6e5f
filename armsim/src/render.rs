use crate::config::ArmKind;
use crate::errors::ArmsimErrors;
use crate::presenter::{format_point2, format_point3};
use nalgebra::{Point2, Point3};
use std::collections::VecDeque;
use std::io::Write;

/// Bounded history of end effector positions, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TrailHistory {
    capacity: Option<usize>,
    points: VecDeque<Point3<f64>>,
}

impl TrailHistory {
    /// `None` keeps every position.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            points: VecDeque::new(),
        }
    }

    pub fn push(&mut self, point: Point3<f64>) {
        if self.capacity == Some(0) {
            return;
        }
        if let Some(capacity) = self.capacity {
            while self.points.len() >= capacity {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn oldest(&self) -> Option<&Point3<f64>> {
        self.points.front()
    }
}

/// Consumes one pose per frame. Planar joints arrive with `z = 0`.
pub trait Renderer {
    fn render(
        &mut self,
        frame: usize,
        joints: &[Point3<f64>],
        trail: &TrailHistory,
    ) -> Result<(), ArmsimErrors>;
}

/// Writes every frame as a single line: the joint polyline, the end
/// effector and the trail length.
pub struct TextRenderer<W: Write> {
    writer: W,
    kind: ArmKind,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W, kind: ArmKind) -> Self {
        Self { writer, kind }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn point(&self, p: &Point3<f64>) -> String {
        match self.kind {
            ArmKind::Planar => format_point2(&Point2::new(p.x, p.y)),
            ArmKind::Spatial => format_point3(p),
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(
        &mut self,
        frame: usize,
        joints: &[Point3<f64>],
        trail: &TrailHistory,
    ) -> Result<(), ArmsimErrors> {
        let polyline: Vec<String> = joints.iter().map(|p| self.point(p)).collect();
        let end = self.point(&joints.last().copied().unwrap_or_else(Point3::origin));
        let trail = match trail.oldest() {
            Some(oldest) => format!("trail {} from {}", trail.len(), self.point(oldest)),
            None => "trail 0".to_string(),
        };
        writeln!(
            self.writer,
            "frame {frame:>3}: {} | end effector {end} | {trail}",
            polyline.join(" -> "),
        )?;
        Ok(())
    }
}
