#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use panview_core::canvas::{Canvas, CursorShape};
use panview_core::geometry::Vec2;
use panview_core::io::ImageAsset;
use panview_core::paint::DrawInstruction;

/// Everything a [`RecordingCanvas`] saw. Shared so tests can inspect it after
/// the canvas has been moved into a controller (or dropped with it).
#[derive(Debug, Default)]
pub struct CanvasLog {
    pub viewport: Vec2,
    pub deny_capture: bool,
    pub captured: bool,
    pub captures: usize,
    pub releases: usize,
    pub cursor: CursorShape,
    pub redraws: usize,
    pub draws: Vec<DrawInstruction>,
}

#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    pub log: Rc<RefCell<CanvasLog>>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            log: Rc::new(RefCell::new(CanvasLog {
                viewport: Vec2::new(width, height),
                ..Default::default()
            })),
        }
    }

    pub fn denying_capture(width: f64, height: f64) -> Self {
        let canvas = Self::new(width, height);
        canvas.log.borrow_mut().deny_capture = true;
        canvas
    }

    pub fn redraws(&self) -> usize {
        self.log.borrow().redraws
    }
}

impl Canvas for RecordingCanvas {
    fn viewport_size(&self) -> Vec2 {
        self.log.borrow().viewport
    }

    fn capture_pointer(&mut self) -> bool {
        let mut log = self.log.borrow_mut();
        if log.deny_capture {
            return false;
        }
        log.captured = true;
        log.captures += 1;
        true
    }

    fn release_pointer(&mut self) {
        let mut log = self.log.borrow_mut();
        log.captured = false;
        log.releases += 1;
    }

    fn has_capture(&self) -> bool {
        self.log.borrow().captured
    }

    fn set_cursor(&mut self, shape: CursorShape) {
        self.log.borrow_mut().cursor = shape;
    }

    fn request_redraw(&mut self) {
        self.log.borrow_mut().redraws += 1;
    }

    fn draw_image(&mut self, _asset: &ImageAsset, instruction: &DrawInstruction) {
        self.log.borrow_mut().draws.push(*instruction);
    }
}

/// Solid-color RGBA test image.
pub fn solid_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
}

/// Write a solid test image of the given size and format into `dir`.
///
/// Written as RGB so encoders without alpha support (JPEG) accept it.
pub fn write_test_image(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    format: ImageFormat,
) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::ImageRgba8(solid_image(width, height))
        .to_rgb8()
        .save_with_format(&path, format)
        .expect("write test image");
    path
}

pub fn asset(width: u32, height: u32) -> ImageAsset {
    ImageAsset::new(solid_image(width, height), "memory.png").expect("non-empty image")
}
