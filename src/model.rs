pub mod activity;
pub mod request;
pub mod simple_response;
pub mod todo;
