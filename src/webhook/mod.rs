//! Webhook layer for the raffle service integration.
//!
//! This module provides:
//! - HTTP request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The HTTP client abstraction ([`HttpClient`]) and its production
//!   implementation ([`ReqwestClient`])
//! - The ticket request dispatcher ([`TicketDispatcher`])
//! - Response interpretation into user feedback ([`interpret_response`],
//!   [`Feedback`])

mod client;
mod dispatch;
mod error;
mod http;
mod outcome;

#[cfg(test)]
mod http_tests;

pub use client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, ReqwestClient};
pub use dispatch::TicketDispatcher;
pub use error::{DispatchError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use outcome::{Feedback, Severity, interpret_response};
