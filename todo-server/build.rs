use std::path::Path;
use std::process::Command;
use std::{env, fs};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let frontend_dir = Path::new(&manifest_dir).join("../todo-frontend");
    let dist_dir = frontend_dir.join("dist");

    // Tell cargo to rerun if frontend sources change
    println!("cargo:rerun-if-changed=../todo-frontend/src");
    println!("cargo:rerun-if-changed=../todo-frontend/Cargo.toml");
    println!("cargo:rerun-if-changed=../todo-frontend/index.html");
    println!("cargo:rerun-if-env-changed=TODO_BUILD_FRONTEND");

    fs::create_dir_all(&dist_dir).expect("Failed to create dist directory");

    // Step 1: Copy HTML template to dist (always, so the host can embed it)
    let html_src = frontend_dir.join("index.html");
    let html_dst = dist_dir.join("index.html");
    fs::copy(&html_src, &html_dst).expect("Failed to copy index.html");

    // The WASM build needs the wasm32 target and wasm-bindgen-cli, so it is opt-in.
    if env::var("TODO_BUILD_FRONTEND").as_deref() != Ok("1") {
        println!(
            "cargo:warning=Skipping frontend WASM build (set TODO_BUILD_FRONTEND=1 to enable)"
        );
        return;
    }

    // Step 2: Build frontend to WASM. A separate target dir keeps this from
    // blocking on the outer build's lock.
    println!("cargo:warning=Building frontend WASM...");

    let wasm_target_dir = Path::new(&env::var("OUT_DIR").unwrap()).join("wasm-target");
    let status = Command::new(env::var("CARGO").unwrap_or_else(|_| "cargo".into()))
        .current_dir(&frontend_dir)
        .args([
            "build",
            "--target",
            "wasm32-unknown-unknown",
            "--release",
            "--lib",
            "--features",
            "hydrate",
        ])
        .arg("--target-dir")
        .arg(&wasm_target_dir)
        .status()
        .expect("Failed to run cargo build for frontend");

    if !status.success() {
        panic!("Frontend WASM build failed");
    }

    // Step 3: Run wasm-bindgen to generate JS bindings
    println!("cargo:warning=Running wasm-bindgen...");

    let wasm_file = wasm_target_dir.join("wasm32-unknown-unknown/release/todo_frontend.wasm");

    if !wasm_file.exists() {
        panic!(
            "WASM file not found at {:?}. Frontend build may have failed.",
            wasm_file
        );
    }

    let status = Command::new("wasm-bindgen")
        .arg(&wasm_file)
        .arg("--out-dir")
        .arg(&dist_dir)
        .args(["--target", "web", "--no-typescript"])
        .status()
        .expect("Failed to run wasm-bindgen. Is it installed? Run: cargo install wasm-bindgen-cli");

    if !status.success() {
        panic!("wasm-bindgen failed");
    }

    let count = fs::read_dir(&dist_dir)
        .map(|entries| entries.count())
        .unwrap_or(0);
    println!(
        "cargo:warning=Frontend build complete! {} files in dist/",
        count
    );
}
