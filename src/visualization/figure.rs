use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

pub const TOPICS_AXIS_LABEL: &str = "Number of Topics";
pub const COHERENCE_AXIS_LABEL: &str = "Coherence Score";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizedWord {
    pub term: String,
    pub weight: f64,
    pub relative_size: f64,     // weight / largest weight, in (0, 1]
}

/// Size-weighted words of one topic, largest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloud {
    pub title: String,
    pub words: Vec<SizedWord>,
}

impl WordCloud {
    /// Later duplicates overwrite earlier weights; words without a positive
    /// weight cannot be drawn and are dropped; at most `max_words` are kept.
    pub fn from_weighted_terms(title: &str, terms: &[(String, f64)], max_words: usize) -> Result<Self> {
        let mut order: Vec<&str> = Vec::new();
        let mut weights: HashMap<&str, f64> = HashMap::new();
        for (term, weight) in terms {
            if weights.insert(term.as_str(), *weight).is_none() {
                order.push(term.as_str());
            }
        }

        let mut ranked: Vec<(&str, f64)> = order.into_iter()
            .map(|term| (term, weights[term]))
            .filter(|(_, weight)| weight.is_finite() && *weight > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(max_words);

        let max_weight = match ranked.first() {
            Some((_, weight)) => *weight,
            None => return Err(Error::invalid_input(format!(
                "Word cloud '{}' needs at least one positively weighted term", title
            ))),
        };

        Ok(WordCloud {
            title: title.to_string(),
            words: ranked.into_iter()
                .map(|(term, weight)| SizedWord {
                    term: term.to_string(),
                    weight,
                    relative_size: weight / max_weight,
                })
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
}

impl LineChart {
    /// Pairs `xs[i]` with `ys[i]`; both slices must have the same length.
    pub fn from_series(title: &str, x_label: &str, y_label: &str, xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::new(
                ErrorKind::LengthMismatch,
                format!("{} x values but {} y values", xs.len(), ys.len()),
            ));
        }

        Ok(LineChart {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    WordCloud(WordCloud),
    LineChart(LineChart),
}
