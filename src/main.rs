//! Trunk entry point. Build with `--features csr`.

fn main() {
    #[cfg(feature = "csr")]
    storefront::mount();
}
