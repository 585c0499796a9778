//! Client adapters.
//!
//! - `DecisionClient` - reqwest client for `POST /api/decide`, able to drive a `DecisionView`

mod decision_client;

pub use decision_client::{ClientError, DecisionClient, DecisionClientConfig};
