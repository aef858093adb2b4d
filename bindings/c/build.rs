use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Regenerate `include/numerix.h` from the exported `extern "C"` items.
fn generate_header(crate_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let include_dir = crate_dir.join("include");
    fs::create_dir_all(&include_dir)?;

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))?;
    let header = include_dir.join("numerix.h");

    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_config(config)
        .generate()?
        .write_to_file(&header);

    Ok(header)
}

fn main() {
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let crate_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR unavailable ({e}); header not generated");
            return;
        }
    };

    // A stale header must not block building the library itself.
    if let Err(e) = generate_header(&crate_dir) {
        println!("cargo:warning=numerix.h not regenerated: {e}");
    }
}
