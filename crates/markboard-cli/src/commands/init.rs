//! The `markboard init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("markboard.toml").exists() {
        println!("markboard.toml already exists, skipping.");
    } else {
        std::fs::write("markboard.toml", SAMPLE_CONFIG)?;
        println!("Created markboard.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit markboard.toml with your API key (or set MARKBOARD_GEMINI_KEY)");
    println!("  2. Run: markboard analyze --scores \"85+90.5+77\"");
    println!("  3. Run: markboard advise --scores \"85+90.5+77\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# markboard configuration

default_advisor = "gemini"
default_model = "gemini-3-flash-preview"
output_dir = "./markboard-exports"

[advisors.gemini]
type = "gemini"
api_key = "${GEMINI_API_KEY}"

[thresholds]
passing = 60.0
excellent = 85.0
max_score = 100.0
"#;
