//! OpenAI provider implementation
//!
//! This module provides a client for the OpenAI chat completions API and any
//! server exposing the same endpoint shape.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::OpenAiClient;
