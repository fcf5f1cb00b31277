const DEFAULT_BACKEND_URL: &str = "https://generateur-backend.onrender.com/api/generate-image";

fn main() {
    // Bake the image-generation endpoint into the binary
    let backend_url = match std::env::var("PORTRAIT_BACKEND_URL") {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    };
    println!("cargo:rustc-env=PORTRAIT_BACKEND_URL={}", backend_url);

    // Re-run build script if PORTRAIT_BACKEND_URL changes
    println!("cargo:rerun-if-env-changed=PORTRAIT_BACKEND_URL");

    #[cfg(feature = "desktop")]
    tauri_build::build();
}
