//! Template system for bridge-kit project scaffolding.
//!
//! The demo web app shipped by `bridge-kit new` is embedded into the binary
//! at compile time via [`include_str!`] in the [`embedded`] module, then
//! written out at scaffold time. Only files that carry template slots
//! (`package.json`, `index.html`) go through Handlebars; application sources
//! are written verbatim so their JSX braces never meet the template engine.
//!
//! ## Template variables
//!
//! - `{{project_name}}`: the scaffolded directory name
//!
//! ## Adding a new template
//!
//! 1. Create the file under `templates/webapp/`
//! 2. Add a manifest entry with `include_str!` in [`embedded`]
//! 3. Run `cargo build` to verify the path resolves
//!
//! **Warning**: files in `templates/webapp/` and the manifest in [`embedded`]
//! must stay in sync. The `include_str!` paths are relative to that source
//! file and checked at compile time.

pub mod embedded;
pub mod renderer;
