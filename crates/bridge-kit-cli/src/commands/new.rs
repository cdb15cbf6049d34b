use std::path::Path;

use anyhow::Result;

use bridge_kit_core::scaffold;
use bridge_kit_core::version::{detect_version, tool_available, MIN_NODE_MAJOR};

use crate::output;

/// Scaffold a new bridge demo project.
///
/// Refuses to touch an existing directory, then either copies a user-supplied
/// template root or writes the embedded template set, and finishes with a
/// toolchain check and a next-steps summary. A failure mid-copy leaves a
/// partially populated directory behind.
pub fn run(name: &str, template: Option<&Path>) -> Result<()> {
    output::print_header(&format!("bridge-kit new: {name}"));

    let project_dir = Path::new(name);

    output::print_step(1, 3, &format!("Creating project directory: {name}/"));
    scaffold::create_project(project_dir)?;

    output::print_step(2, 3, "Copying template files");
    match template {
        Some(template_root) => {
            tracing::info!(template = %template_root.display(), "copying on-disk template");
            scaffold::copy_tree(template_root, project_dir)?;
        }
        None => {
            let data = serde_json::json!({ "project_name": name });
            scaffold::write_embedded(project_dir, &data)?;
        }
    }

    output::print_step(3, 3, "Checking toolchain");
    check_node_toolchain();

    output::print_success(&format!("Project '{name}' scaffolded"));
    println!();
    println!("  Next steps:");
    println!("    cd {name}");
    println!("    npm install");
    println!("    npm run dev");
    println!();
    println!("  The bridge modal lives at src/components/BridgeModal.tsx");
    println!();

    Ok(())
}

/// Advisory node/npm check; the scaffold succeeds either way.
fn check_node_toolchain() {
    if !tool_available("node") {
        output::print_warning("node not found — install Node.js to run the scaffolded app");
        return;
    }
    match detect_version("node") {
        Some(version) if version.major < MIN_NODE_MAJOR => {
            output::print_warning(&format!(
                "node {version} found; the template expects {MIN_NODE_MAJOR}+"
            ));
        }
        Some(version) => {
            output::print_success(&format!("node {version} found"));
        }
        None => {}
    }
    if !tool_available("npm") {
        output::print_warning("npm not found on PATH");
    }
}
