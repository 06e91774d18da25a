//! Monitor records, price parsing and configuration loading for `webmon`.

pub mod app_config;
pub mod error;
pub mod ini;
pub mod loader;
pub mod price;
pub mod record;

pub use app_config::{load_app_config_from_env, AppConfig};
pub use error::{ConfigError, RecordError};
pub use loader::{parse_cookies, parse_records, ConfigLoader, LoadedConfig};
pub use price::{format_price, parse_price, PriceError};
pub use record::{AuthContext, Record};
