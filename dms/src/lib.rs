//! Conversions between the degree-minute-second (DMS) triplets
//! and the decimal degrees.
//!
//! ```
//! use geo_dms::{deg_to_dms, dms_to_deg, Dms};
//!
//! assert_eq!(dms_to_deg(&[10, 30, 0]).unwrap(), 10.5);
//! assert_eq!(deg_to_dms(10.5).unwrap(), Dms::new(10.0, 30.0, 0.0));
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    deg_to_dms,
    dms::Dms,
    dms_to_deg,
    errors::{DegreeNotRepresentable, DmsArityError},
};

mod angle;

// dev-dependencies used by the benchmarks and the `serde` feature tests only
#[cfg(test)]
use criterion as _;
#[cfg(test)]
use serde_json as _;
