//! Validation of the application form.
//!
//! [`validate`] maps a [`FormRecord`](crate::model::FormRecord) to an
//! [`ErrorSet`] holding one message per failing field. It is pure and cheap,
//! so callers re-run it after every edit instead of tracking what changed.
//!
//! # Example
//!
//! ```
//! use applyform_lib::model::{Field, FormRecord, Position};
//! use applyform_lib::validation::validate;
//!
//! let mut record = FormRecord::new();
//! record.position = Position::Developer;
//! record.relevant_experience = "0".to_string();
//!
//! let errors = validate(&record);
//! assert!(errors.contains(Field::RelevantExperience));
//! assert!(!errors.contains(Field::PortfolioUrl));
//! ```

mod error_set;
mod number;
mod rules;
mod validator;

pub use error_set::ErrorSet;
pub use number::parse_number;
pub use validator::validate;
