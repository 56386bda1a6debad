//! Entry point for the WASM application

pub fn main() {
    ticket_updater::start();
}
