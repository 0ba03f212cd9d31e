#![deny(unreachable_pub)]

//! Client for the Simwood wholesale telephony REST API.
//!
//! Build a [`RequestBatch`], then hand it to [`SimwoodClient::run`]: the
//! client authenticates once per session (caching the token in its
//! [`SessionStore`]) and executes the batch sequentially, returning decoded
//! bodies keyed by request mode.
//!
//! ```no_run
//! use std::collections::HashMap;
//! use simwood::{ClientConfig, OutputFormat, RequestBatch, SimwoodClient};
//!
//! # async fn example() -> Result<(), simwood::Error> {
//! let mut client = SimwoodClient::new(ClientConfig {
//!     user: Some("account".to_string()),
//!     password: Some("secret".to_string()),
//!     output_format: OutputFormat::Json,
//!     ..ClientConfig::default()
//! });
//!
//! let batch = RequestBatch::new()
//!     .enqueue("BALANCE", HashMap::new())
//!     .enqueue("MYIP", HashMap::new());
//! let responses = client.run(batch).await?;
//! println!("{:?}", responses.get("BALANCE"));
//! # Ok(())
//! # }
//! ```

mod batch;
mod client;
mod consts;
mod errors;
mod prelude;
mod req;
mod response;
mod session;
mod signing;

pub use batch::{QueuedRequest, RequestBatch};
pub use client::{ClientConfig, OutputFormat, SimwoodClient};
pub use consts::{DEFAULT_API_URL, DEFAULT_TOKEN_THRESHOLD_SECS};
pub use errors::Error;
pub use response::{Payload, ResponseMap};
pub use session::{MemorySession, SessionStore};
