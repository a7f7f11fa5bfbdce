//! Raffle Relay: invoice-validation webhook notifier
//!
//! A library for relaying validated customer invoices from an ERP to an
//! external raffle ticketing service, and for interpreting the service's
//! answer into user-facing feedback.

pub mod config;
pub mod event;
pub mod notify;
pub mod payload;
pub mod webhook;
