//! # enkf-gen-data
//!
//! Configuration for generic ("gen_data") ensemble data series: a named
//! vector whose length is only known once a forward model has produced it.
//!
//! A [`GenDataConfig`] records
//!
//! - the element type (`f32` / `f64`),
//! - the input and output [`FileFormat`]s,
//! - an optional [`TemplateBinding`] used when writing `ASCII_TEMPLATE` files,
//! - an optional init-file pattern expanded per ensemble member,
//! - the [`SizeLedger`] holding the element count for each report step.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use enkf_gen_data::{GenDataConfig, GenDataOptions, VarType};
//!
//! let mut config = GenDataConfig::new("PORO");
//! let options = GenDataOptions::from_options(["INPUT_FORMAT:ASCII", "OUTPUT_FORMAT:ASCII"])?;
//! config.reconfigure(&options.to_update(VarType::DynamicState)?)?;
//!
//! // From worker threads, once configuration is done:
//! config.assert_size(3, 120)?;
//! let bytes = config.byte_size(3)?;
//! ```

pub mod active_list;
pub mod config;
pub mod error;
pub mod format;
pub mod ledger;
pub mod options;
pub mod template;
pub mod types;
pub mod update;

pub use active_list::{ActiveList, ActiveMode};
pub use config::GenDataConfig;
pub use error::{GenDataError, Result};
pub use format::FileFormat;
pub use ledger::SizeLedger;
pub use options::GenDataOptions;
pub use template::{TemplateBinding, TemplateData};
pub use types::{ElementType, VarType};
pub use update::GenDataUpdate;
