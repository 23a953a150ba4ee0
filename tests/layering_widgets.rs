use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| panic!("read_dir({}): {err}", dir.display()));
    for entry in entries {
        let entry = entry.unwrap_or_else(|err| panic!("read_dir entry ({}): {err}", dir.display()));
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

/// Files under `src/<layer>` whose library code mentions any of `layers`.
fn offenders(layer: &str, layers: &[&str]) -> Vec<String> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let layer_dir = manifest_dir.join("src").join(layer);

    let mut files = Vec::new();
    collect_rs_files(&layer_dir, &mut files);
    files.sort();

    let mut found = Vec::new();
    for file in files {
        let contents = fs::read_to_string(&file).unwrap_or_else(|err| panic!("read_to_string({}): {err}", file.display()));
        // Unit tests may draw into a `CellGrid`.
        let library_code = contents.split("#[cfg(test)]").next().unwrap_or("");
        let imports_layer = layers.iter().any(|other| {
            library_code.contains(&format!("crate::{other}::"))
                || library_code.contains(&format!("use crate::{other}"))
                || library_code.contains(&format!("inputbar::{other}::"))
        });
        if imports_layer {
            found.push(
                file.strip_prefix(&manifest_dir)
                    .unwrap_or(file.as_path())
                    .display()
                    .to_string(),
            );
        }
    }
    found
}

#[test]
fn widgets_do_not_depend_on_render_layer() {
    let found = offenders("widgets", &["render"]);
    assert!(
        found.is_empty(),
        "widgets must depend on `core` only, but found render-layer imports in:\n{}",
        found.join("\n")
    );
}

#[test]
fn core_does_not_depend_on_outer_layers() {
    let found = offenders("core", &["render", "widgets"]);
    assert!(
        found.is_empty(),
        "core must not import widgets or render, but found imports in:\n{}",
        found.join("\n")
    );
}
