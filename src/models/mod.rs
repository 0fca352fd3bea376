mod challenge;
mod post;
mod question;

pub use challenge::{Challenge, Difficulty};
pub use post::{Post, PostCategory};
pub use question::{Question, NUM_OPTIONS};
