//! Keeps the booking state machines and workflow free of rendering and
//! transport crates, so they stay testable without a browser or server.

use std::path::{Path, PathBuf};

use syn::visit::Visit;

const FORBIDDEN: &[&str] = &["dioxus", "reqwest", "axum", "web_sys", "wasm_bindgen", "js_sys"];

#[derive(Default)]
struct CrateRoots(Vec<String>);

impl<'ast> Visit<'ast> for CrateRoots {
    fn visit_use_tree(&mut self, tree: &'ast syn::UseTree) {
        match tree {
            syn::UseTree::Path(p) => self.0.push(p.ident.to_string()),
            syn::UseTree::Name(n) => self.0.push(n.ident.to_string()),
            syn::UseTree::Rename(r) => self.0.push(r.ident.to_string()),
            syn::UseTree::Group(g) => g.items.iter().for_each(|t| self.visit_use_tree(t)),
            syn::UseTree::Glob(_) => {}
        }
    }

    fn visit_path(&mut self, path: &'ast syn::Path) {
        if let Some(first) = path.segments.first() {
            self.0.push(first.ident.to_string());
        }
        syn::visit::visit_path(self, path);
    }
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

fn violations(layer: &str) -> Vec<String> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src").join(layer);
    let files = rust_files(&root);
    assert!(!files.is_empty(), "no sources found under {}", root.display());

    let mut found = Vec::new();
    for path in files {
        let text = std::fs::read_to_string(&path).expect("read rust file");
        let file = syn::parse_file(&text).expect("parse rust file");
        let mut roots = CrateRoots::default();
        roots.visit_file(&file);
        for name in roots.0 {
            if FORBIDDEN.contains(&name.as_str()) {
                found.push(format!("{}: {}", path.display(), name));
            }
        }
    }
    found.sort();
    found.dedup();
    found
}

#[test]
fn booking_state_has_no_ui_or_transport_dependencies() {
    assert_eq!(violations("booking"), Vec::<String>::new());
}

#[test]
fn workflow_has_no_ui_or_transport_dependencies() {
    assert_eq!(violations("workflow"), Vec::<String>::new());
}
