use std::cell::RefCell;
use topic_modelling::evaluation::coherence::{
    calculate_coherence_with_config, CoherenceEstimator, CoherenceRequest,
};
use topic_modelling::evaluation::model::TopicModel;
use topic_modelling::{
    calculate_coherence, coherence_sweep, CoherenceMeasure, Config, Dictionary, ErrorKind, Result,
    WeightedTerms,
};

struct FixedTopics(Vec<WeightedTerms>);

impl TopicModel for FixedTopics {
    fn num_topics(&self) -> usize {
        self.0.len()
    }

    fn show_topic(&self, topic_id: usize, topn: usize) -> WeightedTerms {
        self.0[topic_id].iter().take(topn).cloned().collect()
    }
}

/// Records what it was asked and answers with a fixed score.
struct RecordingEstimator {
    score: f64,
    seen: RefCell<Vec<(CoherenceMeasure, Option<usize>, usize, usize)>>,
}

impl RecordingEstimator {
    fn new(score: f64) -> Self {
        RecordingEstimator { score, seen: RefCell::new(Vec::new()) }
    }
}

impl CoherenceEstimator for RecordingEstimator {
    fn estimate(&self, request: &CoherenceRequest<'_>) -> Result<f64> {
        self.seen.borrow_mut().push((
            request.measure,
            request.window_size,
            request.topics.len(),
            request.corpus.len(),
        ));
        Ok(self.score)
    }
}

fn texts() -> Vec<Vec<String>> {
    vec![
        vec!["market".to_string(), "stock".to_string(), "market".to_string()],
        vec!["election".to_string(), "vote".to_string()],
    ]
}

fn model() -> FixedTopics {
    FixedTopics(vec![
        vec![("market".to_string(), 0.6), ("stock".to_string(), 0.4)],
        vec![("election".to_string(), 0.7), ("vote".to_string(), 0.3)],
    ])
}

#[test]
fn default_measure_returns_single_score() {
    let texts = texts();
    let dictionary = Dictionary::from_documents(&texts);
    let estimator = RecordingEstimator::new(0.42);
    let config = Config::default();

    let score = calculate_coherence_with_config(&config, &estimator, &model(), &texts, &dictionary).unwrap();

    assert_eq!(score, 0.42);
    let seen = estimator.seen.borrow();
    assert_eq!(seen.as_slice(), &[(CoherenceMeasure::CV, Some(110), 2, 2)]);
}

#[test]
fn request_carries_top_terms_and_bag_of_words() {
    struct Inspect;

    impl CoherenceEstimator for Inspect {
        fn estimate(&self, request: &CoherenceRequest<'_>) -> Result<f64> {
            assert_eq!(request.topics, vec![vec!["market".to_string()], vec!["election".to_string()]]);
            let market = request.dictionary.token_to_id("market").unwrap();
            assert!(request.corpus[0].contains(&(market, 2)));
            assert_eq!(request.texts.len(), 2);
            assert_eq!(request.window_size, None);
            Ok(-1.5)
        }
    }

    let texts = texts();
    let dictionary = Dictionary::from_documents(&texts);

    let score = calculate_coherence(&Inspect, &model(), &texts, &dictionary, CoherenceMeasure::UMass, 1).unwrap();
    assert_eq!(score, -1.5);
}

#[test]
fn configured_topn_limits_topic_terms() {
    struct TopOnly;

    impl CoherenceEstimator for TopOnly {
        fn estimate(&self, request: &CoherenceRequest<'_>) -> Result<f64> {
            assert!(request.topics.iter().all(|topic| topic.len() == 1));
            assert_eq!(request.measure, CoherenceMeasure::CNpmi);
            assert_eq!(request.window_size, Some(10));
            Ok(0.1)
        }
    }

    let texts = texts();
    let dictionary = Dictionary::from_documents(&texts);
    let config = Config::default()
        .with_coherence_measure(CoherenceMeasure::CNpmi)
        .with_coherence_topn(1);

    let score = calculate_coherence_with_config(&config, &TopOnly, &model(), &texts, &dictionary).unwrap();
    assert_eq!(score, 0.1);
}

#[test]
fn unknown_topic_term_is_rejected() {
    let texts = texts();
    let dictionary = Dictionary::from_documents(&texts);
    let model = FixedTopics(vec![vec![("inflation".to_string(), 1.0)]]);
    let estimator = RecordingEstimator::new(0.0);

    let err = calculate_coherence(&estimator, &model, &texts, &dictionary, CoherenceMeasure::CV, 20).unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert!(err.context.contains("inflation"));
    assert!(estimator.seen.borrow().is_empty());
}

#[test]
fn empty_model_is_rejected() {
    let texts = texts();
    let dictionary = Dictionary::from_documents(&texts);

    let err = calculate_coherence(
        &RecordingEstimator::new(0.0),
        &FixedTopics(Vec::new()),
        &texts,
        &dictionary,
        CoherenceMeasure::CV,
        20,
    ).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn measures_parse_by_name() {
    assert_eq!("c_v".parse::<CoherenceMeasure>().unwrap(), CoherenceMeasure::CV);
    assert_eq!("u_mass".parse::<CoherenceMeasure>().unwrap(), CoherenceMeasure::UMass);
    assert_eq!(CoherenceMeasure::CNpmi.to_string(), "c_npmi");
    assert_eq!(CoherenceMeasure::default(), CoherenceMeasure::CV);

    let err = "c_w2v_typo".parse::<CoherenceMeasure>().unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
}

#[test]
fn sweep_trains_and_scores_each_count() {
    struct ByTopicCount;

    impl CoherenceEstimator for ByTopicCount {
        fn estimate(&self, request: &CoherenceRequest<'_>) -> Result<f64> {
            Ok(match request.topics.len() {
                1 => 0.31,
                2 => 0.42,
                _ => 0.39,
            })
        }
    }

    let texts = texts();
    let dictionary = Dictionary::from_documents(&texts);
    let topics = model().0;

    let sweep = coherence_sweep(
        &ByTopicCount,
        &[1, 2, 3],
        |count| Ok(FixedTopics(topics.iter().cycle().take(count).cloned().collect())),
        &texts,
        &dictionary,
        CoherenceMeasure::CV,
        20,
    ).unwrap();

    assert_eq!(sweep.num_topics, vec![1, 2, 3]);
    assert_eq!(sweep.scores, vec![0.31, 0.42, 0.39]);
    assert_eq!(sweep.best(), Some((2, 0.42)));
}

#[test]
fn sweep_stops_on_training_failure() {
    let texts = texts();
    let dictionary = Dictionary::from_documents(&texts);

    let result = coherence_sweep(
        &RecordingEstimator::new(0.5),
        &[2, 4],
        |count| -> Result<FixedTopics> {
            if count == 4 {
                Err(topic_modelling::Error::invalid_argument("diverged"))
            } else {
                Ok(model())
            }
        },
        &texts,
        &dictionary,
        CoherenceMeasure::CV,
        20,
    );

    assert_eq!(result.unwrap_err().context, "diverged");
}
