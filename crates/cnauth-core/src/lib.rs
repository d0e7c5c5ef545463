//! Authentication-override parameters for TeamForge credential forms.
//!
//! Job configuration pages render, per credential "prefix", an optional
//! `override_auth` checkbox and the url/username/password fields. Before a
//! page asks the server to validate a connection or fill a combo box, it
//! encodes that form state as a query fragment. This crate builds that
//! fragment from any [`FormFields`] implementation.
//!
//! # Quick Start
//!
//! ```
//! use cnauth_core::{build_auth_param_str, FormSnapshot};
//!
//! let form = FormSnapshot::new()
//!     .with_checkbox("myrepo.override_auth", false)
//!     .with_value("myrepo.collabneturl", "https://forge.example.com");
//!
//! let params = build_auth_param_str(&form, "myrepo").unwrap();
//! assert_eq!(params, "override_auth=false");
//! ```

pub mod error;
pub mod escape;
pub mod form;
pub mod params;

pub use error::{AuthParamError, AuthParamResult};
pub use escape::escape_value;
pub use form::{Field, FieldPrefix, FormElement, FormFields, FormSnapshot};
pub use params::{build_auth_param_str, override_requested, AuthOverride, Credentials};
