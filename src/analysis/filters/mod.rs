pub mod stopword;
pub mod phrases;
pub mod lemma;
pub mod exclusion;
