use crate::core::types::WeightedTerms;

/// A trained topic model, as far as evaluation and plotting need it.
pub trait TopicModel {
    fn num_topics(&self) -> usize;

    /// Top `topn` terms of a topic with their weights, strongest first.
    fn show_topic(&self, topic_id: usize, topn: usize) -> WeightedTerms;

    /// Top terms of every topic, without weights.
    fn top_terms(&self, topn: usize) -> Vec<Vec<String>> {
        (0..self.num_topics())
            .map(|topic_id| {
                self.show_topic(topic_id, topn)
                    .into_iter()
                    .map(|(term, _)| term)
                    .collect()
            })
            .collect()
    }
}
