use std::env;
use std::fs;
use std::path::PathBuf;

use closed_union_codegen::codegen::marker;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let path = out_dir.join(marker::MARKER_FILE_NAME);

    fs::write(&path, marker::source())
        .unwrap_or_else(|err| panic!("failed to write {}: {}", path.display(), err));
}
