//! Project directory creation and template copying for the generator.
//!
//! The generator either recursively copies a user-supplied template root or
//! writes the compile-time embedded template set (see [`crate::templates`]).
//! There is no transactional rollback: a failure mid-copy leaves a partially
//! populated directory, which is acceptable for a dev-tool scaffold.

use std::path::Path;

use serde_json::Value;

use crate::error::{BridgeKitError, Result};
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Create the project directory, refusing to touch an existing path.
pub fn create_project(project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        return Err(BridgeKitError::ProjectExists(project_dir.to_path_buf()));
    }
    std::fs::create_dir_all(project_dir)?;
    Ok(())
}

/// Recursively copy every file and subdirectory from `src` into `dest`,
/// preserving relative structure and creating intermediate directories.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    if !src.is_dir() {
        return Err(BridgeKitError::TemplateNotFound(src.to_path_buf()));
    }
    std::fs::create_dir_all(dest)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_tree(&src_path, &dest_path)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(&src_path, &dest_path)?;
        }
    }

    Ok(())
}

/// Render the embedded template set into `dest`.
///
/// Each manifest entry is rendered through the strict Handlebars renderer
/// (files without template slots pass through unchanged) and written at its
/// relative path.
pub fn write_embedded(dest: &Path, data: &Value) -> Result<()> {
    let renderer = TemplateRenderer::new();

    for entry in embedded::MANIFEST {
        let target = dest.join(entry.relative_path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = if entry.rendered {
            renderer.render(entry.content, data)?
        } else {
            entry.content.to_string()
        };
        std::fs::write(&target, content)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_project_refuses_existing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("app");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("keep.txt"), "untouched").unwrap();

        let err = create_project(&dir).unwrap_err();
        assert!(matches!(err, BridgeKitError::ProjectExists(_)));
        // Nothing was changed in the pre-existing directory.
        assert_eq!(std::fs::read_to_string(dir.join("keep.txt")).unwrap(), "untouched");
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
    }

    #[test]
    fn test_copy_tree_preserves_structure_and_content() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("template");
        std::fs::create_dir_all(src.join("src/components")).unwrap();
        std::fs::write(src.join("package.json"), "{\"name\":\"t\"}").unwrap();
        std::fs::write(src.join("src/main.tsx"), "render()").unwrap();
        std::fs::write(src.join("src/components/Modal.tsx"), "modal").unwrap();

        let dest = tmp.path().join("app");
        copy_tree(&src, &dest).unwrap();

        for rel in ["package.json", "src/main.tsx", "src/components/Modal.tsx"] {
            assert_eq!(
                std::fs::read(src.join(rel)).unwrap(),
                std::fs::read(dest.join(rel)).unwrap(),
                "{rel} differs"
            );
        }
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let err = copy_tree(&tmp.path().join("nope"), &tmp.path().join("out")).unwrap_err();
        assert!(matches!(err, BridgeKitError::TemplateNotFound(_)));
    }

    #[test]
    fn test_write_embedded_renders_project_name() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("my-bridge-app");
        create_project(&dest).unwrap();
        write_embedded(&dest, &json!({ "project_name": "my-bridge-app" })).unwrap();

        let package = std::fs::read_to_string(dest.join("package.json")).unwrap();
        assert!(package.contains("\"name\": \"my-bridge-app\""));
        assert!(dest.join("src/hooks/useBridge.ts").exists());
        assert!(dest.join("src/components/BridgeModal.tsx").exists());
        assert!(dest.join("index.html").exists());
    }
}
