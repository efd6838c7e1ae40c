use topic_modelling::visualization::figure::{LineChart, WordCloud};
use topic_modelling::visualization::surface::{JsonFigureSink, PlotSurface};
use topic_modelling::{form_wordcloud, form_wordcloud_with_config, graph_results, Config, ErrorKind, Result};

#[derive(Default)]
struct RecordingSurface {
    clouds: Vec<WordCloud>,
    charts: Vec<LineChart>,
}

impl PlotSurface for RecordingSurface {
    fn show_word_cloud(&mut self, cloud: &WordCloud) -> Result<()> {
        self.clouds.push(cloud.clone());
        Ok(())
    }

    fn show_line_chart(&mut self, chart: &LineChart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

#[test]
fn graph_renders_aligned_points() {
    let mut surface = RecordingSurface::default();

    graph_results(&mut surface, "Coherence", &[2, 4, 6], &[0.31, 0.42, 0.39]).unwrap();

    let chart = &surface.charts[0];
    assert_eq!(chart.points, vec![(2.0, 0.31), (4.0, 0.42), (6.0, 0.39)]);
    assert_eq!(chart.x_label, "Number of Topics");
    assert_eq!(chart.y_label, "Coherence Score");
    assert_eq!(chart.title, "Coherence");
}

#[test]
fn graph_rejects_mismatched_lengths() {
    let mut surface = RecordingSurface::default();

    let err = graph_results(&mut surface, "Coherence", &[2, 4, 6], &[0.31, 0.42]).unwrap_err();

    assert_eq!(err.kind, ErrorKind::LengthMismatch);
    assert!(surface.charts.is_empty());
}

#[test]
fn wordcloud_reaches_surface() {
    let mut surface = RecordingSurface::default();
    let topic = vec![("bank".to_string(), 0.05), ("rate".to_string(), 0.1)];

    form_wordcloud_with_config(&Config::default(), &mut surface, "Topic 0", &topic).unwrap();

    let cloud = &surface.clouds[0];
    assert_eq!(cloud.title, "Topic 0");
    assert_eq!(cloud.words[0].term, "rate");
    assert_eq!(cloud.words[1].relative_size, 0.5);
}

#[test]
fn wordcloud_is_capped_by_config() {
    let mut surface = RecordingSurface::default();
    let topic = vec![
        ("bank".to_string(), 0.05),
        ("rate".to_string(), 0.1),
        ("loan".to_string(), 0.02),
    ];
    let config = Config::default().with_wordcloud_max_words(1);

    form_wordcloud_with_config(&config, &mut surface, "Topic 0", &topic).unwrap();

    let terms: Vec<&str> = surface.clouds[0].words.iter().map(|w| w.term.as_str()).collect();
    assert_eq!(terms, vec!["rate"]);
}

#[test]
fn json_sink_writes_one_line_per_figure() {
    let mut sink = JsonFigureSink::new(Vec::new());
    let topic = vec![("market".to_string(), 0.3)];

    form_wordcloud(&mut sink, "Business", &topic, 200).unwrap();
    graph_results(&mut sink, "Coherence", &[2, 4], &[0.3, 0.4]).unwrap();
    assert_eq!(sink.written(), 2);

    let output = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = output.lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["kind"], "word_cloud");
    assert_eq!(lines[0]["words"][0]["term"], "market");
    assert_eq!(lines[1]["kind"], "line_chart");
    assert_eq!(lines[1]["points"][1][0], 4.0);
}
