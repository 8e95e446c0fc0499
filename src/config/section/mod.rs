//! Configuration section definitions.
//!
//! Each module corresponds to a section in `stuff.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `site`  | `[site]`     | Channel metadata and link base URL       |
//! | `index` | `[index]`    | Text and links of the HTML index page    |
//! | `build` | `[build]`    | Output paths, reserved names, draft mark |

pub mod build;
pub mod index;
pub mod site;

pub use build::BuildConfig;
pub use index::IndexConfig;
pub use site::SiteInfoConfig;
