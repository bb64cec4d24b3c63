pub mod extract;
pub mod models;

pub use extract::CommentedWorkItem;
pub use models::{AdoEvent, WORK_ITEM_COMMENTED};
