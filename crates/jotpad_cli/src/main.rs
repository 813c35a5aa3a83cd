//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotpad_core` linkage.
//! - Print the seeded note list, optionally filtered by the first argument.
//!
//! Usage: `jotpad_cli [query]`

use jotpad_core::{app_config, core_version, ping, NoteService};

fn main() {
    let query = std::env::args().nth(1).unwrap_or_default();

    println!("jotpad_core ping={}", ping());
    println!("jotpad_core version={}", core_version());
    println!("api_base_url={}", app_config().api_base_url());

    let service = NoteService::with_welcome_notes();
    let listed = service.list_notes(&query);
    println!(
        "notes query=`{}` hits={} total={}",
        listed.query,
        listed.items.len(),
        listed.total
    );
    for note in &listed.items {
        println!("#{} {} | {}", note.id, note.title, note.content);
    }
}
