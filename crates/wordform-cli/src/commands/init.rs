//! The `wordform init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create wordform.toml
    if std::path::Path::new("wordform.toml").exists() {
        println!("wordform.toml already exists, skipping.");
    } else {
        std::fs::write("wordform.toml", SAMPLE_CONFIG)?;
        println!("Created wordform.toml");
    }

    // Create example catalog
    let catalog_path = std::path::Path::new("words.toml");
    if catalog_path.exists() {
        println!("words.toml already exists, skipping.");
    } else {
        std::fs::write(catalog_path, EXAMPLE_CATALOG)?;
        println!("Created words.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your own words to words.toml");
    println!("  2. Run: wordform validate --catalog words.toml");
    println!("  3. Run: wordform quiz");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wordform configuration

# Catalog file; remove to use the built-in word list
catalog = "words.toml"

# Words per quiz page
page_size = 10

# "priority" asks the same forms on every retry, "rotating" asks different ones
selection = "priority"
"#;

const EXAMPLE_CATALOG: &str = r#"[catalog]
name = "My Word Forms"

# Forms: verb, noun_thing, noun_person, adjective, adverb.
# Give at least two per word; use a list when several spellings are correct.

[[words]]
word = "run"
verb = "run"
noun_thing = ["run", "running"]
noun_person = "runner"

[[words]]
word = "act"
verb = "act"
noun_thing = ["act", "action"]
noun_person = ["actor", "actress"]
adjective = "active"
adverb = "actively"

[[words]]
word = "create"
verb = "create"
noun_thing = "creation"
noun_person = "creator"
adjective = "creative"
adverb = "creatively"
"#;
