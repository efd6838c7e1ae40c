pub mod figure;
pub mod surface;

use tracing::debug;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::visualization::figure::{LineChart, WordCloud, COHERENCE_AXIS_LABEL, TOPICS_AXIS_LABEL};
use crate::visualization::surface::PlotSurface;

/// Renders a word cloud of one topic's weighted terms.
pub fn form_wordcloud<S: PlotSurface + ?Sized>(
    surface: &mut S,
    title: &str,
    topic: &[(String, f64)],
    max_words: usize,
) -> Result<()> {
    let cloud = WordCloud::from_weighted_terms(title, topic, max_words)?;
    debug!(title, words = cloud.words.len(), "rendering word cloud");
    surface.show_word_cloud(&cloud)
}

/// `form_wordcloud` capped at `config.wordcloud_max_words`.
pub fn form_wordcloud_with_config<S: PlotSurface + ?Sized>(
    config: &Config,
    surface: &mut S,
    title: &str,
    topic: &[(String, f64)],
) -> Result<()> {
    form_wordcloud(surface, title, topic, config.wordcloud_max_words)
}

/// Plots coherence scores against topic counts. The two slices are
/// index-aligned and must have the same length.
pub fn graph_results<S: PlotSurface + ?Sized>(
    surface: &mut S,
    title: &str,
    num_topics: &[usize],
    coherence_scores: &[f64],
) -> Result<()> {
    let xs: Vec<f64> = num_topics.iter().map(|&n| n as f64).collect();
    let chart = LineChart::from_series(title, TOPICS_AXIS_LABEL, COHERENCE_AXIS_LABEL, &xs, coherence_scores)?;
    debug!(title, points = chart.points.len(), "rendering coherence graph");
    surface.show_line_chart(&chart)
}
