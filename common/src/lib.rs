//! CarOnline Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod endpoints;
pub mod format;
pub mod normalizer;
pub mod parser;
pub mod validation;
pub mod listing;

pub use types::{AnalysisResult, CreatedRecord, Vehicle, VehicleAnalysis, VehiclePayload};
pub use error::{Error, Result};
pub use endpoints::{Endpoints, DEFAULT_BASE_URL, UPLOAD_FIELD};
pub use format::format_price;
pub use normalizer::{normalize_collection, normalize_response, parse_collection, parse_created, parse_vehicle};
pub use parser::{error_detail, interpret_upload_response, parse_analysis, strip_code_fences};
pub use validation::{parse_number, EditDraft, VehicleForm};
pub use listing::{ListState, Notice, FEATURED_LIMIT};
