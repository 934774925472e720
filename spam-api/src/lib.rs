//! spam-api: HTTP front end for spam-rs
//!
//! Trains the detector once per process and serves the scored test set
//! and its metrics as JSON.
//!
//! # Endpoints
//!
//! - `GET /health`
//! - `GET /api/spam` - `[{ "file", "spamProbability", "actualClass" }]`
//! - `GET /api/spam/accuracy` - `{ "val": ... }`
//! - `GET /api/spam/precision` - `{ "val": ... }`
//! - `GET /api/spam/report`
//! - `POST /api/spam/classify` - `{ "text": ... }`
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "127.0.0.1:8080"
//! allowed_origin = "http://localhost:63342"
//! train_on_startup = true
//!
//! [corpus]
//! data_dir = "data"
//! train_ham = ["train/ham", "train/ham2"]
//! train_spam = ["train/spam"]
//! test_ham = "test/ham"
//! test_spam = "test/spam"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use config::ApiConfig;
pub use error::{Result, ServiceError};
pub use server::{build_router, ApiServer};
pub use state::AppState;
