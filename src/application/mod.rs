// Application layer - Use cases and session runtime
pub mod news_feed;
pub mod news_gateway;
pub mod page_session;
pub mod scheduler;
