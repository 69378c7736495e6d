//! Shared models and fee rendering logic for the driving school directory.
//!
//! `model` holds the records exchanged between the backend and the frontend,
//! `fees` holds the pure classification and rendering functions both sides use,
//! and `requests` holds the HTTP payloads of the fee endpoints.

pub mod fees;
pub mod model;
pub mod requests;
