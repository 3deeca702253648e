//! quizdoc - assessment export toolkit
//!
//! ```bash
//! # Export a saved assessment
//! quizdoc export record.json --format docx --output biology-quiz
//!
//! # Show the exported content as plain text
//! quizdoc preview record.json
//!
//! # Browse saved assessments
//! quizdoc history records.json --search photo --sort oldest
//! ```

mod commands;

#[tokio::main]
async fn main() {
    if let Err(err) = commands::run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
