mod join_request;
mod post;

pub use join_request::{JoinRequest, JoinRequestBuilder};
pub use post::Post;
