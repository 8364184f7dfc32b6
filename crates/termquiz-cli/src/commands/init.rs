//! The `termquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("termquiz.toml").exists() {
        println!("termquiz.toml already exists, skipping.");
    } else {
        std::fs::write("termquiz.toml", SAMPLE_CONFIG)?;
        println!("Created termquiz.toml");
    }

    std::fs::create_dir_all("decks")?;
    let example_path = std::path::Path::new("decks/example.txt");
    if example_path.exists() {
        println!("decks/example.txt already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_DECK)?;
        println!("Created decks/example.txt");
    }

    println!("\nNext steps:");
    println!("  1. Add your own term/definition pairs to decks/example.txt");
    println!("  2. Run: termquiz validate --deck decks/example.txt");
    println!("  3. Run: termquiz run --deck decks/example.txt");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# termquiz configuration

question_count = 10
# deck = "decks/example.txt"
record_delimiter = "{-line_break-}"
field_delimiter = "{-tab-}"
label_style = "numeric"
distractor_source = "whole_pool"

[probe]
enabled = true
url = "https://www.google.com"
timeout_ms = 3000
"#;

const EXAMPLE_DECK: &str = "\
What does CPU stand for?{-tab-}Central processing unit{-line_break-}
What does RAM stand for?{-tab-}Random access memory{-line_break-}
What does SSD stand for?{-tab-}Solid state drive{-line_break-}
What does GPU stand for?{-tab-}Graphics processing unit{-line_break-}
What does NIC stand for?{-tab-}Network interface controller{-line_break-}
What does BIOS stand for?{-tab-}Basic input/output system{-line_break-}
";
