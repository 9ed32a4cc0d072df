#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This site is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    corporate_site::frontend::run();
}
