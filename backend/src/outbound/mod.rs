//! Outbound adapters translating external data into domain types.
//!
//! - **demo_dataset**: maps the static fixture loaded by the `demo-data`
//!   crate onto the validated marketplace snapshot.
//!
//! Adapters are thin translators. They contain no business logic.

pub mod demo_dataset;
