// File: crates/lumi-core/src/sink.rs
// Summary: Draw-sink trait consuming label placements, plus a recording sink.

use std::convert::Infallible;

use crate::layout::{ImagePlacement, LabelLayout, Placement};

/// Receives placements in draw order; backends implement the actual drawing.
pub trait DrawSink {
    type Error;
    fn draw_text(&mut self, placement: &Placement) -> Result<(), Self::Error>;
    fn draw_image(&mut self, image: &ImagePlacement) -> Result<(), Self::Error>;
}

/// Replay `layout` into `sink`: texts first (secondary, primary, extra), then the logo.
pub fn annotate<S: DrawSink>(layout: &LabelLayout, sink: &mut S) -> Result<(), S::Error> {
    for p in &layout.texts {
        sink.draw_text(p)?;
    }
    if let Some(logo) = &layout.logo {
        sink.draw_image(logo)?;
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Text(Placement),
    Image(ImagePlacement),
}

/// Sink that only records what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSink {
    pub fn new() -> Self { Self::default() }
}

impl DrawSink for RecordingSink {
    type Error = Infallible;

    fn draw_text(&mut self, placement: &Placement) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Text(placement.clone()));
        Ok(())
    }

    fn draw_image(&mut self, image: &ImagePlacement) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Image(*image));
        Ok(())
    }
}
