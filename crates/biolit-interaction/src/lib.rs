//! The model gateway: system-instruction templates, per-mode request
//! shaping, and the Gemini REST client.

pub mod gateway;
pub mod gemini;
pub mod instructions;
pub mod request;

pub use gateway::{GatewayResponse, ResearchGateway};
pub use gemini::GeminiClient;
pub use request::{ImageAttachment, ModeRequest};
