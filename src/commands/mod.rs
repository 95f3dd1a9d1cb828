//! Subcommand handlers for the aex binary.

pub mod config;
pub mod extract;
pub mod summary;

use aex::merge::Summary;

/// Render the summary block shared by the extract and summary commands.
fn print_summary(summary: &Summary) {
    println!("Total events: {}", summary.total_events);
    println!("Unique signatures: {}", summary.unique_signatures);
    println!();
    println!("Event names:");
    for (i, name) in summary.event_names.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
}
