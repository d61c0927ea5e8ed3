// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert with unwrap and wildcard-import their parent module.
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::wildcard_imports, clippy::float_cmp)
)]

//! Procedural 3D scenes for VSEPR molecular geometries.
//!
//! Every catalogued electron-domain arrangement (2-6 domains with their
//! lone-pair variants) is drawn as a central atom surrounded by teardrop
//! lobes: bonded lobes end in a ligand atom, lone-pair lobes carry two
//! electron dots. All-bonded shapes can be annotated with their bond angles.
//!
//! # Key entry points
//!
//! - [`catalog::Catalog`] - the fixed table of shapes, addressed by
//!   [`catalog::ShapeKey`] (`"4_1"` etc.)
//! - [`scene::SceneGenerator`] - turns a shape into primitives and a camera
//!   orientation
//! - [`surface::DrawingSurface`] - the emission boundary; [`surface::Scene`]
//!   is the recorded result
//! - [`export`] - JSON and embeddable HTML output
//! - [`options::Options`] - colors, sizes and viewer settings, loadable
//!   from TOML
//!
//! # Example
//!
//! ```
//! use vsepr::catalog::Catalog;
//! use vsepr::scene::generate_scene;
//!
//! let shape = Catalog::global().lookup("2_0".parse()?)?;
//! let scene = generate_scene(shape, true);
//! assert_eq!(scene.labels().next().map(|l| l.text.as_str()), Some("180.0°"));
//! # Ok::<(), vsepr::error::VseprError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod options;
pub mod primitives;
pub mod scene;
pub mod surface;
