//! Overlay listing command

use lamina_pipeline::DirectoryRegistry;

pub fn run(registry: &DirectoryRegistry) {
    println!("Overlay search paths:");
    for path in registry.search_paths() {
        println!("  - {}", path.display());
    }

    println!();

    let found = registry.scan();
    if found.is_empty() {
        println!("No overlays found.");
        return;
    }

    println!("Found {} overlay(s):", found.len());
    for name in found {
        println!("  - {}", name);
    }
}
