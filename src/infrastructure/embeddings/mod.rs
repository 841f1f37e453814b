pub mod hash;
pub mod openai;
