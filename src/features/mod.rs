// URL title pipeline: detection, dispatch, extraction and delivery
pub mod chat_host;
pub mod discord_host;
pub mod fetch_dispatcher;
pub mod message_handler;
pub mod registry;
pub mod result_dispatcher;
pub mod title_extractor;
pub mod url_detector;

#[cfg(test)]
pub mod test_support;
