use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Idea,
    Tip,
    Achievement,
}

impl PostCategory {
    pub fn label(self) -> &'static str {
        match self {
            PostCategory::Idea => "idea",
            PostCategory::Tip => "tip",
            PostCategory::Achievement => "achievement",
        }
    }
}

/// A community feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: u32,
    pub author: String,
    /// Initials shown in place of an avatar image.
    pub avatar: String,
    pub badge: String,
    pub time_ago: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub category: PostCategory,
    #[serde(default)]
    pub liked: bool,
}
