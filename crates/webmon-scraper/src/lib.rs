pub mod client;
pub mod error;
pub mod evaluate;
pub mod extract;

pub use client::PageClient;
pub use error::{EvalError, FetchError};
pub use evaluate::{evaluate, read_price, Outcome};
pub use extract::extract_single_text;
