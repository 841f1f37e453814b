pub mod answer;
pub mod documents;
