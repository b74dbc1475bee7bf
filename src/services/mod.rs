pub mod bridge;
pub mod chatbot;
pub mod session_manager;
