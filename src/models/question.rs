use serde::Deserialize;

/// Every question offers exactly this many choices.
pub const NUM_OPTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_option: usize,
    pub explanation: String,
    pub tip: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}
