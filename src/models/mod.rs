mod post;

pub use post::{Post, PostFilter, SortOrder};
