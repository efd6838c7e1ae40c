use std::io::Write;
use crate::core::error::{Error, ErrorKind, Result};
use crate::visualization::figure::{Figure, LineChart, WordCloud};

/// Rendering backend for figures.
pub trait PlotSurface {
    fn show_word_cloud(&mut self, cloud: &WordCloud) -> Result<()>;

    fn show_line_chart(&mut self, chart: &LineChart) -> Result<()>;
}

/// Writes every figure as one JSON line, for an external plotting frontend.
pub struct JsonFigureSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonFigureSink<W> {
    pub fn new(writer: W) -> Self {
        JsonFigureSink { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_figure(&mut self, figure: &Figure) -> Result<()> {
        serde_json::to_writer(&mut self.writer, figure)
            .map_err(|e| Error::new(ErrorKind::Render, format!("Cannot encode figure: {}", e)))?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }
}

impl<W: Write> PlotSurface for JsonFigureSink<W> {
    fn show_word_cloud(&mut self, cloud: &WordCloud) -> Result<()> {
        self.write_figure(&Figure::WordCloud(cloud.clone()))
    }

    fn show_line_chart(&mut self, chart: &LineChart) -> Result<()> {
        self.write_figure(&Figure::LineChart(chart.clone()))
    }
}
