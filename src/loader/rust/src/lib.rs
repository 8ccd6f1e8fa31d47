/* src/loader/rust/src/lib.rs */

//! Ordered script-module loader for the MCAT tuning panel.
//!
//! A [`Manifest`] lists the panel's auxiliary scripts. [`Manifest::load_all`]
//! hands each one to the [`Injector`], which turns it into a script include
//! and appends it to a [`LoadStream`] before returning, so modules are
//! requested in manifest order and globals defined by earlier modules exist
//! when later ones run.

pub mod document;
pub mod errors;
pub mod escape;
pub mod ident;
pub mod injector;
pub mod manifest;
mod order;
pub mod stream;

// Public API re-exports
pub use document::{render_includes, wrap_document};
pub use errors::{LoaderError, Result};
pub use escape::{escape_html, escape_js_string};
pub use ident::{LoadReference, ModuleId};
pub use injector::{DEFAULT_BASE_DIR, DEFAULT_SCRIPT_TYPE, EmitMode, Injector};
pub use manifest::{Manifest, ModuleEntry};
pub use stream::{LoadStream, Sequential};
