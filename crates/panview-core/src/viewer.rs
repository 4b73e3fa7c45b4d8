use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::canvas::Canvas;
use crate::config::ZoomConfig;
use crate::controller::ViewController;
use crate::error::Result;
use crate::event::{InputEvent, ViewerButton};
use crate::io::{load_image, ImageAsset, LoadedImage};
use crate::paint::DrawInstruction;
use crate::view_state::ViewState;

/// One open image: its asset, its view controller, and the temporary file
/// backing the asset when the source had to be converted.
///
/// The temporary file lives exactly as long as the viewer. It is deleted by
/// [`Viewer::close`] or, failing that, when the viewer is dropped.
pub struct Viewer<C: Canvas> {
    controller: ViewController<C>,
    source: PathBuf,
    asset: ImageAsset,
    converted: Option<NamedTempFile>,
    generation: u64,
}

impl<C: Canvas> Viewer<C> {
    /// Load `path` and attach it to `canvas`. A load failure is returned as is.
    pub fn open(path: impl Into<PathBuf>, canvas: C, zoom: ZoomConfig) -> Result<Self> {
        let source = path.into();
        let LoadedImage { asset, converted } = load_image(&source)?;
        Ok(Self {
            controller: ViewController::new(canvas, zoom),
            source,
            asset,
            converted,
            generation: 0,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn asset(&self) -> &ImageAsset {
        &self.asset
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn canvas(&self) -> &C {
        self.controller.canvas()
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        self.controller.canvas_mut()
    }

    /// Path of the temporary conversion file, if the source needed one.
    pub fn converted_path(&self) -> Option<&Path> {
        self.converted.as_ref().map(NamedTempFile::path)
    }

    /// Bumped every time the asset is reloaded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Button(ViewerButton::Reset) => self.reset(),
            other => self.controller.handle_event(other),
        }
    }

    /// Reload the asset from its source and reset the view.
    ///
    /// The view is reset even when reloading fails; the previous asset then
    /// stays in place and the error is returned.
    pub fn reset(&mut self) -> Result<()> {
        let reloaded = self.reload();
        self.controller.reset();
        reloaded
    }

    fn reload(&mut self) -> Result<()> {
        let LoadedImage { asset, converted } = load_image(&self.source).inspect_err(|e| {
            warn!(source = %self.source.display(), error = %e, "Reload failed, keeping previous image");
        })?;
        self.asset = asset;
        // Replacing the handle deletes the previous conversion file.
        self.converted = converted;
        self.generation += 1;
        info!(source = %self.source.display(), generation = self.generation, "Image reloaded");
        Ok(())
    }

    pub fn paint(&mut self) -> DrawInstruction {
        self.controller.paint(&self.asset)
    }

    /// Delete the temporary conversion file, if any, reporting failures.
    pub fn close(mut self) -> Result<()> {
        if let Some(file) = self.converted.take() {
            let path = file.path().to_path_buf();
            file.close()?;
            info!(temp = %path.display(), "Removed temporary conversion file");
        }
        Ok(())
    }
}
