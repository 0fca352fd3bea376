//! Community feed: likes, new posts and sharing.

use crate::models::{Post, PostCategory};
use crate::notice::Notice;

const OWN_AUTHOR: &str = "You";
const OWN_AVATAR: &str = "YO";
const OWN_BADGE: &str = "Bronze";

pub struct Feed {
    /// Most recent first, by insertion.
    posts: Vec<Post>,
}

impl Feed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: u32) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn toggle_like(&mut self, id: u32) {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(id, "like ignored, unknown post");
            return;
        };

        if post.liked {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes = post.likes.saturating_add(1);
        }
        post.liked = !post.liked;
        tracing::debug!(id, liked = post.liked, likes = post.likes, "like toggled");
    }

    /// Prepends a post by the local user. Blank content is ignored.
    pub fn create_post(&mut self, content: &str) -> Option<Notice> {
        if content.trim().is_empty() {
            tracing::debug!("empty post ignored");
            return None;
        }

        let Some(id) = self.posts.iter().map(|p| p.id).max().unwrap_or(0).checked_add(1) else {
            tracing::warn!("post ignored, no post ids left");
            return None;
        };
        self.posts.insert(
            0,
            Post {
                id,
                author: OWN_AUTHOR.to_string(),
                avatar: OWN_AVATAR.to_string(),
                badge: OWN_BADGE.to_string(),
                time_ago: "Just now".to_string(),
                content: content.to_string(),
                likes: 0,
                comments: 0,
                category: PostCategory::Idea,
                liked: false,
            },
        );
        tracing::info!(id, "post created");

        Some(Notice::PostShared)
    }

    pub fn share(&self, id: u32) -> Option<Notice> {
        self.post(id).map(|_| Notice::LinkCopied)
    }
}
