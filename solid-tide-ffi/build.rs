use std::env;
use std::path::{Path, PathBuf};

const HEADER: &str = "solid_tide_ffi.h";

fn main() {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))
        .expect("Unable to read cbindgen.toml");
    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
        .expect("Unable to generate C bindings");

    // OUT_DIR for dependants, include/ for C callers of the legacy `solid` symbol
    for dir in [out_dir, crate_dir.join("include")] {
        write_header(&bindings, &dir);
    }
}

fn write_header(bindings: &cbindgen::Bindings, dir: &Path) {
    std::fs::create_dir_all(dir).expect("Unable to create header directory");
    bindings.write_to_file(dir.join(HEADER));
}
