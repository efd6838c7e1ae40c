use std::collections::HashSet;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// The English stopword list shipped with the usual topic-modelling toolkits.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "all", "six", "just", "less", "being", "indeed", "over", "move", "anyway", "four", "not",
    "own", "through", "using", "fify", "where", "mill", "only", "find", "before", "one", "whose",
    "system", "how", "somewhere", "much", "thick", "show", "had", "enough", "should", "to", "must",
    "whom", "seeming", "yourselves", "under", "ours", "two", "has", "might", "thereafter",
    "latterly", "do", "them", "his", "around", "than", "get", "very", "de", "none", "cannot",
    "every", "un", "they", "front", "during", "thus", "now", "him", "nor", "name", "regarding",
    "several", "hereafter", "did", "always", "who", "didn", "whither", "this", "someone",
    "either", "each", "become", "thereupon", "sometime", "side", "towards", "therein", "twelve",
    "because", "often", "ten", "our", "doing", "km", "eg", "some", "back", "used", "up", "go",
    "namely", "computer", "are", "further", "beyond", "ourselves", "yet", "out", "even", "will",
    "what", "still", "for", "bottom", "mine", "since", "please", "forty", "per", "its",
    "everything", "behind", "does", "various", "above", "between", "it", "neither", "seemed",
    "ever", "across", "she", "somehow", "be", "we", "full", "never", "sixty", "however", "here",
    "otherwise", "were", "whereupon", "nowhere", "although", "found", "alone", "re", "along",
    "quite", "fifteen", "by", "both", "about", "last", "would", "anything", "via", "many",
    "could", "thence", "put", "against", "keep", "etc", "amount", "became", "ltd", "hence",
    "onto", "or", "con", "among", "already", "co", "afterwards", "formerly", "within", "seems",
    "into", "others", "while", "whatever", "except", "down", "hers", "everyone", "done", "least",
    "another", "whoever", "moreover", "couldnt", "throughout", "anyhow", "yourself", "three",
    "from", "her", "few", "together", "top", "there", "due", "been", "next", "anyone", "eleven",
    "cry", "call", "therefore", "interest", "then", "thru", "themselves", "hundred", "really",
    "sincere", "empty", "more", "himself", "elsewhere", "mostly", "on", "fire", "am", "becoming",
    "hereby", "amongst", "else", "part", "everywhere", "too", "kg", "herself", "former", "those",
    "he", "me", "myself", "made", "twenty", "these", "was", "bill", "cant", "us", "until",
    "besides", "nevertheless", "below", "anywhere", "nine", "can", "whether", "of", "your",
    "toward", "my", "say", "something", "and", "whereafter", "whenever", "give", "almost",
    "wherever", "is", "describe", "beforehand", "herein", "doesn", "an", "as", "itself", "at",
    "have", "in", "seem", "whence", "ie", "any", "fill", "again", "hasnt", "inc", "thereby",
    "thin", "no", "perhaps", "latter", "meanwhile", "when", "detail", "same", "wherein", "beside",
    "also", "that", "other", "take", "which", "becomes", "you", "if", "nobody", "unless",
    "whereas", "see", "though", "may", "after", "upon", "most", "hereupon", "eight", "but",
    "serious", "nothing", "such", "why", "off", "a", "don", "whereby", "third", "i", "whole",
    "noone", "sometimes", "well", "amoungst", "yours", "their", "rather", "without", "so", "five",
    "the", "first", "with", "make", "once",
];

pub struct StopWordFilter {
    pub stop_words: HashSet<String>,
}

impl StopWordFilter {
    pub fn new(stop_words: Vec<String>) -> Self {
        StopWordFilter {
            stop_words: stop_words.into_iter().collect(),
        }
    }

    pub fn english() -> Self {
        let words = ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect();

        StopWordFilter::new(words)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl TokenFilter for StopWordFilter {
    // Positions of surviving tokens are left untouched so the gap keeps
    // blocking bigram merges across the removed word.
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| !self.is_stop_word(&token.text))
            .collect()
    }

    fn name(&self) -> &str {
        "stop_words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_stop_words_and_keeps_positions() {
        let filter = StopWordFilter::english();
        let tokens = vec![
            Token::new("bank".to_string(), 0),
            Token::new("of".to_string(), 1),
            Token::new("england".to_string(), 2),
        ];

        let kept = filter.filter(tokens);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].position, 0);
        assert_eq!(kept[1].position, 2);
        assert!(!kept[0].is_adjacent_to(&kept[1]));
    }

    #[test]
    fn test_english_list_size() {
        assert_eq!(StopWordFilter::english().stop_words.len(), 337);
    }
}
