//! Outfit Creator Frontend Entry Point

fn main() {
    outfit_creator_ui::run();
}
