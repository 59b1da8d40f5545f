use std::fs;
use std::process::Command;

const WASM_MANIFEST_PATH: &str = "./wasm/Cargo.toml";
const WASM_FILE_NAME: &str = "wasm_patrimonio.wasm";
const COMPILATION_PATH: &str = "target-wasm";
const PKG_PATH: &str = "public/static/pkg";

/// Compile the `wasm` crate and generate its JS bindings into the static files.
/// A missing toolchain only yields a warning, so the server can still be built and tested.
fn main() {
    println!("cargo::rerun-if-changed=wasm/src");
    println!("cargo::rerun-if-changed=dto/src");

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_owned());
    let wasm_file_path = format!(
        "{COMPILATION_PATH}/wasm32-unknown-unknown/{profile}/{WASM_FILE_NAME}"
    );

    if let Err(error) = compile_wasm(&profile) {
        println!("cargo::warning=WebAssembly bundle not compiled: {error}");
        return;
    }
    delete_entity(PKG_PATH);
    if let Err(error) = generate_bindings(&wasm_file_path) {
        println!("cargo::warning=JS bindings not generated: {error}");
    }
}

fn compile_wasm(profile: &str) -> Result<(), String> {
    let target_dir = format!("--target-dir={COMPILATION_PATH}");
    let manifest_path = format!("--manifest-path={WASM_MANIFEST_PATH}");
    let mut build_args = vec![
        "build",
        "--target=wasm32-unknown-unknown",
        target_dir.as_str(),
        manifest_path.as_str(),
    ];
    if profile == "release" {
        build_args.push("--release");
    }

    let output = Command::new("cargo")
        .args(build_args)
        .output()
        .map_err(|error| error.to_string())?;
    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}

fn generate_bindings(wasm_file_path: &str) -> Result<(), String> {
    let out_dir_param = format!("--out-dir={PKG_PATH}");
    let output = Command::new("wasm-bindgen")
        .args(["--target=web", out_dir_param.as_str(), wasm_file_path])
        .output()
        .map_err(|error| error.to_string())?;
    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}

fn delete_entity(path: &str) {
    let result = match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(_) => Ok(()),
    };
    if let Err(error) = result {
        println!("cargo::warning=Couldn't delete {path}: {error}");
    }
}
