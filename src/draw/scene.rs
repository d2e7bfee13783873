//! Scene store: committed history, preview and the in-flight gesture.

use super::color::Color;
use super::raster::Raster;
use super::render::RenderStyle;
use super::shape::{Shape, ShapeKind, StrokeKind};
use super::DrawError;
use crate::util::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How finished strokes are kept between repaints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackingMode {
    /// Every committed shape is kept and replayed on each repaint.
    Retained,
    /// Strokes are burned into a persistent raster; shapes are still recorded.
    #[default]
    Raster,
}

impl fmt::Display for BackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackingMode::Retained => f.write_str("retained"),
            BackingMode::Raster => f.write_str("raster"),
        }
    }
}

impl FromStr for BackingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "retained" => Ok(BackingMode::Retained),
            "raster" => Ok(BackingMode::Raster),
            other => Err(format!(
                "unknown backing '{other}' (expected raster or retained)"
            )),
        }
    }
}

#[derive(Debug)]
enum Backing {
    Retained,
    Raster(Raster),
}

/// The gesture currently being drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveGesture {
    kind: StrokeKind,
    color: Color,
    anchor: Point,
    cursor: Point,
}

/// Everything the renderer needs to rebuild the canvas.
///
/// Committed shapes are append-only until [`Scene::clear`]. At most one
/// preview exists, and only while a shape gesture is active.
#[derive(Debug)]
pub struct Scene {
    shapes: Vec<Shape>,
    preview: Option<Shape>,
    gesture: Option<ActiveGesture>,
    backing: Backing,
    style: RenderStyle,
    width: i32,
    height: i32,
    repaint_requested: bool,
}

impl Scene {
    /// Creates an empty scene of the given canvas size.
    pub fn new(
        mode: BackingMode,
        width: i32,
        height: i32,
        style: RenderStyle,
    ) -> Result<Self, DrawError> {
        let width = width.max(1);
        let height = height.max(1);
        let backing = match mode {
            BackingMode::Retained => Backing::Retained,
            BackingMode::Raster => Backing::Raster(Raster::new(width, height, style.background)?),
        };

        Ok(Self {
            shapes: Vec::new(),
            preview: None,
            gesture: None,
            backing,
            style,
            width,
            height,
            repaint_requested: true,
        })
    }

    /// Empties the canvas and aborts any gesture in progress.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.preview = None;
        self.gesture = None;
        if let Backing::Raster(raster) = &mut self.backing {
            if let Err(err) = raster.clear() {
                log::warn!("Failed to clear raster: {}", err);
            }
        }
        self.repaint_requested = true;
        log::debug!("Scene cleared");
    }

    /// Starts a gesture at `at`. Shape gestures get a zero-size preview.
    pub fn begin_gesture(&mut self, kind: StrokeKind, color: Color, at: Point) {
        if self.gesture.is_some() {
            log::warn!("Ignoring begin_gesture at {:?}: a gesture is already active", at);
            return;
        }

        self.gesture = Some(ActiveGesture {
            kind,
            color,
            anchor: at,
            cursor: at,
        });
        if let StrokeKind::Shape(shape_kind) = kind {
            self.preview = Some(Shape::preview(shape_kind, at, at, color));
            self.repaint_requested = true;
        }
    }

    /// Moves the gesture to `at`. No-op without an active gesture.
    pub fn update_gesture(&mut self, at: Point) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };

        match gesture.kind {
            StrokeKind::Freehand => {
                let segment = Shape::committed(ShapeKind::Line, gesture.anchor, at, gesture.color);
                gesture.anchor = at;
                gesture.cursor = at;
                self.commit(segment, false);
            }
            StrokeKind::Shape(_) => {
                gesture.cursor = at;
                if let Some(preview) = self.preview.as_mut() {
                    preview.cursor = at;
                }
            }
        }
        self.repaint_requested = true;
    }

    /// Finishes the gesture at `at`. No-op without an active gesture.
    pub fn end_gesture(&mut self, at: Point) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };

        if let StrokeKind::Shape(kind) = gesture.kind {
            let preview = self
                .preview
                .take()
                .unwrap_or_else(|| Shape::preview(kind, gesture.anchor, at, gesture.color));
            let shape = Shape {
                cursor: at,
                ..preview
            }
            .into_committed();
            self.commit(shape, true);
            log::debug!(
                "Committed {} {:?} -> {:?}",
                kind.label(),
                gesture.anchor,
                at
            );
        }
        self.repaint_requested = true;
    }

    /// Drops the gesture and its preview without committing anything.
    ///
    /// Freehand segments committed before the cancel are kept.
    pub fn cancel_gesture(&mut self) {
        if self.gesture.take().is_some() {
            self.preview = None;
            self.repaint_requested = true;
        }
    }

    /// Resizes the visible canvas.
    ///
    /// The raster only ever grows, so strokes hidden by shrinking the canvas
    /// reappear when it grows again, as they do in the retained backing.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), DrawError> {
        let width = width.max(1);
        let height = height.max(1);
        if let Backing::Raster(raster) = &mut self.backing {
            raster.ensure_size(width, height)?;
        }
        self.width = width;
        self.height = height;
        self.repaint_requested = true;
        Ok(())
    }

    /// Records a finished shape: freehand segments only go to the raster in
    /// raster mode, finished shapes are always kept in the history.
    fn commit(&mut self, shape: Shape, record: bool) {
        match &mut self.backing {
            Backing::Retained => self.shapes.push(shape),
            Backing::Raster(raster) => {
                if let Err(err) = raster.burn(&shape, &self.style) {
                    log::warn!("Failed to burn {} into raster: {}", shape.kind.label(), err);
                }
                if record {
                    self.shapes.push(shape);
                }
            }
        }
    }

    /// Committed shapes in z order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    /// The raster layer, present only in raster backing.
    pub fn raster(&self) -> Option<&Raster> {
        match &self.backing {
            Backing::Raster(raster) => Some(raster),
            Backing::Retained => None,
        }
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn backing_mode(&self) -> BackingMode {
        match self.backing {
            Backing::Retained => BackingMode::Retained,
            Backing::Raster(_) => BackingMode::Raster,
        }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns whether a repaint was requested since the last call, and resets it.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Peeks at the repaint flag without consuming it.
    pub fn repaint_requested(&self) -> bool {
        self.repaint_requested
    }
}
