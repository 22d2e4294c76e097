//! Excel Sum Common Library
//!
//! CLI와 데스크톱에서 공유되는 타입과 계산 로직

pub mod aggregate;
pub mod calculator;
pub mod category;
pub mod classifier;
pub mod error;
pub mod export;
pub mod header;
pub mod normalize;
pub mod report;
pub mod types;

#[cfg(feature = "xlsx")]
pub mod session;
#[cfg(feature = "xlsx")]
pub mod workbook;

pub use calculator::calculate;
pub use category::Category;
pub use classifier::MatchRule;
pub use error::{Error, Result};
pub use types::{
    Calculation, ClassifiedRow, DataRow, HeaderLocation, HeaderMatch, MatchReason, RawGrid,
    ResultSummary,
};

#[cfg(feature = "xlsx")]
pub use session::Session;
#[cfg(feature = "xlsx")]
pub use workbook::load_grid;
