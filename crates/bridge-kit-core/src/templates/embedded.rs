//! Compile-time embedded web-app templates for project scaffolding.
//!
//! Each manifest entry loads a file from `templates/webapp/` via
//! [`include_str!`]; the paths are relative to this source file. Entries with
//! `rendered: true` go through the strict Handlebars renderer at scaffold
//! time; everything else is written verbatim.
//!
//! Do NOT rename or move template files without updating the paths here, and
//! keep `rendered` false for JSX/TS sources: their brace syntax must never
//! reach the template engine.

/// One file of the embedded template set.
pub struct TemplateEntry {
    /// Path relative to the scaffolded project root.
    pub relative_path: &'static str,
    /// Embedded file content.
    pub content: &'static str,
    /// Whether the content carries Handlebars slots.
    pub rendered: bool,
}

/// The full template set written by `bridge-kit new`.
pub const MANIFEST: &[TemplateEntry] = &[
    TemplateEntry {
        relative_path: "package.json",
        content: include_str!("../../../../templates/webapp/package.json"),
        rendered: true,
    },
    TemplateEntry {
        relative_path: "index.html",
        content: include_str!("../../../../templates/webapp/index.html"),
        rendered: true,
    },
    TemplateEntry {
        relative_path: "vite.config.ts",
        content: include_str!("../../../../templates/webapp/vite.config.ts"),
        rendered: false,
    },
    TemplateEntry {
        relative_path: "tsconfig.json",
        content: include_str!("../../../../templates/webapp/tsconfig.json"),
        rendered: false,
    },
    TemplateEntry {
        relative_path: "src/main.tsx",
        content: include_str!("../../../../templates/webapp/src/main.tsx"),
        rendered: false,
    },
    TemplateEntry {
        relative_path: "src/App.tsx",
        content: include_str!("../../../../templates/webapp/src/App.tsx"),
        rendered: false,
    },
    TemplateEntry {
        relative_path: "src/config/wagmi.ts",
        content: include_str!("../../../../templates/webapp/src/config/wagmi.ts"),
        rendered: false,
    },
    TemplateEntry {
        relative_path: "src/hooks/useBridge.ts",
        content: include_str!("../../../../templates/webapp/src/hooks/useBridge.ts"),
        rendered: false,
    },
    TemplateEntry {
        relative_path: "src/components/BridgeModal.tsx",
        content: include_str!("../../../../templates/webapp/src/components/BridgeModal.tsx"),
        rendered: false,
    },
];
