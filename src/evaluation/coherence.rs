use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::types::BagOfWords;
use crate::corpus::dictionary::Dictionary;
use crate::evaluation::model::TopicModel;

/// Named topic-coherence measures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoherenceMeasure {
    #[serde(rename = "u_mass")]
    UMass,
    #[default]
    #[serde(rename = "c_v")]
    CV,
    #[serde(rename = "c_uci")]
    CUci,
    #[serde(rename = "c_npmi")]
    CNpmi,
}

impl CoherenceMeasure {
    pub fn name(&self) -> &'static str {
        match self {
            CoherenceMeasure::UMass => "u_mass",
            CoherenceMeasure::CV => "c_v",
            CoherenceMeasure::CUci => "c_uci",
            CoherenceMeasure::CNpmi => "c_npmi",
        }
    }

    /// Sliding-window size used when estimating co-occurrence from texts.
    /// `u_mass` works on document co-occurrence and has none.
    pub fn default_window_size(&self) -> Option<usize> {
        match self {
            CoherenceMeasure::UMass => None,
            CoherenceMeasure::CV => Some(110),
            CoherenceMeasure::CUci | CoherenceMeasure::CNpmi => Some(10),
        }
    }
}

impl fmt::Display for CoherenceMeasure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoherenceMeasure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "u_mass" => Ok(CoherenceMeasure::UMass),
            "c_v" => Ok(CoherenceMeasure::CV),
            "c_uci" => Ok(CoherenceMeasure::CUci),
            "c_npmi" => Ok(CoherenceMeasure::CNpmi),
            other => Err(Error::invalid_argument(format!("Unknown coherence measure '{}'", other))),
        }
    }
}

/// Everything a coherence computation needs, already validated.
#[derive(Debug, Clone)]
pub struct CoherenceRequest<'a> {
    pub topics: Vec<Vec<String>>,
    pub texts: &'a [Vec<String>],
    pub corpus: Vec<BagOfWords>,
    pub dictionary: &'a Dictionary,
    pub measure: CoherenceMeasure,
    pub window_size: Option<usize>,
}

/// External coherence computation.
pub trait CoherenceEstimator {
    fn estimate(&self, request: &CoherenceRequest<'_>) -> Result<f64>;
}

/// Marshals a topic model, its texts and dictionary into a
/// `CoherenceRequest` and delegates the score to `estimator`.
pub fn calculate_coherence<M, E>(
    estimator: &E,
    model: &M,
    texts: &[Vec<String>],
    dictionary: &Dictionary,
    measure: CoherenceMeasure,
    topn: usize,
) -> Result<f64>
where
    M: TopicModel + ?Sized,
    E: CoherenceEstimator + ?Sized,
{
    if model.num_topics() == 0 {
        return Err(Error::invalid_input("Topic model has no topics"));
    }

    let topics = model.top_terms(topn);
    for (topic_id, terms) in topics.iter().enumerate() {
        if let Some(missing) = terms.iter().find(|term| !dictionary.contains(term)) {
            return Err(Error::invalid_input(format!(
                "Term '{}' of topic {} is not in the dictionary", missing, topic_id
            )));
        }
    }

    let corpus = texts.iter().map(|text| dictionary.doc2bow(text)).collect();
    let request = CoherenceRequest {
        topics,
        texts,
        corpus,
        dictionary,
        measure,
        window_size: measure.default_window_size(),
    };

    debug!(
        measure = %measure,
        topics = request.topics.len(),
        documents = texts.len(),
        "estimating coherence"
    );

    estimator.estimate(&request)
}

/// `calculate_coherence` with the measure and `topn` taken from `config`.
pub fn calculate_coherence_with_config<M, E>(
    config: &Config,
    estimator: &E,
    model: &M,
    texts: &[Vec<String>],
    dictionary: &Dictionary,
) -> Result<f64>
where
    M: TopicModel + ?Sized,
    E: CoherenceEstimator + ?Sized,
{
    calculate_coherence(estimator, model, texts, dictionary, config.coherence_measure, config.coherence_topn)
}

/// Scores of one model per topic count, index-aligned with the counts and
/// ready for `graph_results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceSweep {
    pub num_topics: Vec<usize>,
    pub scores: Vec<f64>,
}

impl CoherenceSweep {
    /// Topic count with the highest score.
    pub fn best(&self) -> Option<(usize, f64)> {
        self.num_topics
            .iter()
            .copied()
            .zip(self.scores.iter().copied())
            .filter(|(_, score)| score.is_finite())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Trains a model per topic count with `train` and scores each one.
pub fn coherence_sweep<M, E, F>(
    estimator: &E,
    num_topics: &[usize],
    mut train: F,
    texts: &[Vec<String>],
    dictionary: &Dictionary,
    measure: CoherenceMeasure,
    topn: usize,
) -> Result<CoherenceSweep>
where
    M: TopicModel,
    E: CoherenceEstimator + ?Sized,
    F: FnMut(usize) -> Result<M>,
{
    let mut scores = Vec::with_capacity(num_topics.len());

    for &count in num_topics {
        let model = train(count)?;
        let score = calculate_coherence(estimator, &model, texts, dictionary, measure, topn)?;
        info!(num_topics = count, measure = %measure, score, "scored topic model");
        scores.push(score);
    }

    Ok(CoherenceSweep {
        num_topics: num_topics.to_vec(),
        scores,
    })
}
