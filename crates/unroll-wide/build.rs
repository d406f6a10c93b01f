//! Build script for unroll-wide

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // for_each! reads these during expansion; cargo does not track them otherwise
    println!("cargo:rerun-if-changed=unroll.toml");
    println!("cargo:rerun-if-changed=unroll.yaml");
    println!("cargo:rerun-if-changed=unroll.yml");
}
