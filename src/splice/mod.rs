//! Text splicing primitives.
//!
//! | Module    | Purpose                                              |
//! |-----------|------------------------------------------------------|
//! | `body`    | Cut the `<body>` interior out of a page, fill a template |
//! | `section` | Replace `<!-- NAME -->...<!-- /NAME -->` interiors     |
//! | `error`   | `SpliceError`                                        |
//!
//! Nothing here touches the filesystem.

mod body;
mod error;
mod section;

pub use body::{extract_body, inject_body};
pub use error::SpliceError;
pub use section::{Section, apply_sections};
