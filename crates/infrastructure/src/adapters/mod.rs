//! Infrastructure adapters

mod record_source;
mod reqwest_client;
mod system_clock;

pub use record_source::{RecordSource, RecordSourceError};
pub use reqwest_client::{ClientSetupError, ReqwestClinicalClient};
pub use system_clock::SystemClock;
