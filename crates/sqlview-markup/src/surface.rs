#![forbid(unsafe_code)]

//! Seam to the panel or webview that displays rendered source.
//!
//! The host owns panel lifecycle, focus and reveal behavior. This crate only
//! hands it a title and a finished HTML document through [`DisplaySurface`].

use std::fmt;

use crate::page::SourcePage;
use crate::render::Renderer;

/// Failure reported by a display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The panel was disposed before the document arrived.
    Closed,
    /// The host refused the document.
    Rejected(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("display surface is closed"),
            Self::Rejected(reason) => write!(f, "display surface rejected document: {reason}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Something that can present an HTML document under a title.
pub trait DisplaySurface {
    fn present(&mut self, title: &str, html: &str) -> Result<(), SurfaceError>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn present(&mut self, title: &str, html: &str) -> Result<(), SurfaceError> {
        (**self).present(title, html)
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn present(&mut self, title: &str, html: &str) -> Result<(), SurfaceError> {
        (**self).present(title, html)
    }
}

/// A presentation recorded by [`CaptureSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presented {
    pub title: String,
    pub html: String,
}

/// In-memory surface that records every document it is given.
#[derive(Debug, Clone, Default)]
pub struct CaptureSurface {
    presented: Vec<Presented>,
    closed: bool,
}

impl CaptureSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the surface as disposed; further presentations fail.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn presented(&self) -> &[Presented] {
        &self.presented
    }

    pub fn last(&self) -> Option<&Presented> {
        self.presented.last()
    }
}

impl DisplaySurface for CaptureSurface {
    fn present(&mut self, title: &str, html: &str) -> Result<(), SurfaceError> {
        if self.closed {
            return Err(SurfaceError::Closed);
        }
        self.presented.push(Presented {
            title: title.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// Renders SQL source and shows it on a display surface.
pub struct SourceViewer<S> {
    renderer: Renderer,
    surface: S,
}

impl<S: DisplaySurface> SourceViewer<S> {
    pub fn new(renderer: Renderer, surface: S) -> Self {
        Self { renderer, surface }
    }

    /// Render `source` into a page titled `title` and present it.
    ///
    /// Returns the page that was shown.
    pub fn show(&mut self, title: &str, source: &str) -> Result<SourcePage, SurfaceError> {
        let page = SourcePage::build(&self.renderer, title, source);
        match self.surface.present(page.title(), page.document()) {
            Ok(()) => {
                tracing::info!(
                    title,
                    source_bytes = source.len(),
                    document_bytes = page.document().len(),
                    "source presented"
                );
                Ok(page)
            }
            Err(error) => {
                tracing::warn!(title, %error, "source presentation failed");
                Err(error)
            }
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
