//! Command-line interface for animdex.
//!
//! Provides commands for browsing categories, listing examples, showing
//! the latest additions, picking a random spotlight, inspecting a single
//! example, searching, and exporting or validating catalog documents.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha12Rng;
use uuid::Uuid;

use crate::catalog::{Catalog, Category, Example, ExampleId};
use crate::config::CatalogSource;

/// animdex - browsable catalog of UI animation techniques
#[derive(Parser, Debug)]
#[command(name = "animdex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to an external catalog document (overrides ANIMDEX_CATALOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all categories with their example counts
    Categories,

    /// List examples, optionally restricted to one category
    List {
        /// Category id (e.g. "basic", "spring")
        category: Option<String>,

        /// Maximum number of examples to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the newest examples in the catalog
    Latest {
        /// Number of examples to show
        #[arg(short, long, default_value = "4")]
        limit: usize,
    },

    /// Pick one random example across all categories
    Spotlight {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show full detail for one example
    Show {
        /// Example id (UUID) or exact title
        example: String,

        /// Include the code preview and usage snippet
        #[arg(short, long)]
        code: bool,
    },

    /// Search titles, descriptions, and tips
    Search {
        /// Search query (case-insensitive substring)
        query: String,
    },

    /// Write the catalog as a JSON interchange document
    Export {
        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a catalog document loads cleanly
    Validate {
        /// Path to the document
        path: PathBuf,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let source = CatalogSource::resolve(self.catalog);

        match self.command {
            Commands::Categories => {
                let catalog = source.load().await?;
                show_categories(&catalog)
            }
            Commands::List { category, limit } => {
                let catalog = source.load().await?;
                list_examples(&catalog, category.as_deref(), limit)
            }
            Commands::Latest { limit } => {
                let catalog = source.load().await?;
                show_latest(&catalog, limit)
            }
            Commands::Spotlight { seed } => {
                let catalog = source.load().await?;
                show_spotlight(&catalog, seed)
            }
            Commands::Show { example, code } => {
                let catalog = source.load().await?;
                show_example(&catalog, &example, code)
            }
            Commands::Search { query } => {
                let catalog = source.load().await?;
                search_examples(&catalog, &query)
            }
            Commands::Export { output } => {
                let catalog = source.load().await?;
                export_catalog(&catalog, output).await
            }
            Commands::Validate { path } => validate_document(&path).await,
        }
    }
}

/// Show the category registry with per-category counts
fn show_categories(catalog: &Catalog) -> Result<()> {
    println!("{:<12} {:<12} {:>8}  {}", "ID", "TITLE", "EXAMPLES", "DESCRIPTION");
    println!("{}", "-".repeat(96));

    for category in Category::ALL {
        println!(
            "{:<12} {:<12} {:>8}  {}",
            category.id(),
            category.title(),
            catalog.count_in(category),
            category.description()
        );
    }

    println!("\nTotal: {} examples", catalog.len());

    Ok(())
}

/// List examples, all or for one category
fn list_examples(catalog: &Catalog, category: Option<&str>, limit: Option<usize>) -> Result<()> {
    let examples: Vec<&Example> = match category {
        Some(id) => catalog.filter_by_category_id(id)?,
        None => catalog.examples().iter().collect(),
    };

    if examples.is_empty() {
        match category {
            Some(id) => println!("No examples in category: {}", id),
            None => println!("Catalog is empty."),
        }
        return Ok(());
    }

    let shown = limit.unwrap_or(examples.len()).min(examples.len());
    print_example_table(&examples[..shown]);

    if shown < examples.len() {
        println!("\nShowing {} of {} examples", shown, examples.len());
    } else {
        println!("\nTotal: {} examples", examples.len());
    }

    Ok(())
}

/// Show the newest slice of the catalog
fn show_latest(catalog: &Catalog, limit: usize) -> Result<()> {
    let latest = catalog.latest(limit);

    if latest.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    let refs: Vec<&Example> = latest.iter().collect();
    print_example_table(&refs);

    Ok(())
}

/// Pick and print one random example
fn show_spotlight(catalog: &Catalog, seed: Option<u64>) -> Result<()> {
    let example = match seed {
        Some(seed) => {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            catalog.spotlight_with(&mut rng)?
        }
        None => catalog.spotlight()?,
    };

    println!("Spotlight: {}", example.title);
    println!("Category:  {}", example.category.title());
    println!("Preview:   {}", example.preview_key);
    println!("\n{}", example.description);
    if !example.explanation.overview.is_empty() {
        println!("\n{}", example.explanation.overview);
    }
    println!("\nSee more: animdex show {}", example.id);

    Ok(())
}

/// Show full detail for one example, resolved by id or title
fn show_example(catalog: &Catalog, wanted: &str, code: bool) -> Result<()> {
    let example = resolve_example(catalog, wanted)
        .ok_or_else(|| anyhow::anyhow!("Example not found: {} (try 'animdex search')", wanted))?;

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("  {}", example.title);
    println!("  {}", example.description);
    println!();
    println!("  ID:       {}", example.id);
    println!(
        "  Category: {} ({})",
        example.category.title(),
        example.category.id()
    );
    println!("  Preview:  {}", example.preview_key);
    println!("╚══════════════════════════════════════════════════════════════╝");

    if !example.explanation.overview.is_empty() {
        println!("\n{}", example.explanation.overview);
    }

    if !example.explanation.key_concepts.is_empty() {
        println!("\nKey Concepts:");
        for concept in &example.explanation.key_concepts {
            println!("  • {}: {}", concept.title, concept.description);
        }
    }

    if !example.explanation.tips.is_empty() {
        println!("\nTips & Best Practices:");
        for tip in &example.explanation.tips {
            println!("  • {}", tip);
        }
    }

    if code {
        if !example.code_preview.is_empty() {
            println!("\n═══ CODE PREVIEW ═══\n");
            println!("{}", example.code_preview);
        }
        if !example.usage_example.is_empty() {
            println!("\n═══ USAGE ═══\n");
            println!("{}", example.usage_example);
        }
    } else {
        println!("\nUse --code to show the snippets");
    }

    Ok(())
}

/// Search the catalog
fn search_examples(catalog: &Catalog, query: &str) -> Result<()> {
    let results = catalog.search(query);

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    print_example_table(&results);

    Ok(())
}

/// Export the catalog as a JSON document
async fn export_catalog(catalog: &Catalog, output: Option<PathBuf>) -> Result<()> {
    let mut document = catalog.to_document();
    document.exported_at = Some(Utc::now());

    let json = serde_json::to_string_pretty(&document).context("Failed to serialize catalog")?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, &json)
                .await
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            eprintln!("Exported {} examples to {}", catalog.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Validate an external catalog document
async fn validate_document(path: &Path) -> Result<()> {
    let catalog = CatalogSource::File(path.to_path_buf()).load().await?;

    println!("OK: {} ({} examples)", path.display(), catalog.len());
    println!();
    for category in Category::ALL {
        let count = catalog.count_in(category);
        if count > 0 {
            println!("  {:<12} {}", category.id(), count);
        }
    }

    Ok(())
}

/// Resolve an example by UUID first, then by exact title
fn resolve_example<'a>(catalog: &'a Catalog, wanted: &str) -> Option<&'a Example> {
    if let Ok(uuid) = wanted.parse::<Uuid>() {
        return catalog.get(ExampleId::from(uuid));
    }
    catalog.find_by_title(wanted)
}

fn print_example_table(examples: &[&Example]) {
    println!("{:<38} {:<12} {:<44}", "ID", "CATEGORY", "TITLE");
    println!("{}", "-".repeat(96));

    for example in examples {
        println!(
            "{:<38} {:<12} {:<44}",
            example.id,
            example.category.id(),
            truncate(&example.title, 44)
        );
    }
}

/// Cut `text` down to at most `max` bytes, never splitting a character.
fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut cut = max - 3;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_title_and_id() {
        let catalog = Catalog::builtin();

        let by_title = resolve_example(&catalog, "Pulse Effect").unwrap();
        assert_eq!(by_title.title, "Pulse Effect");

        let by_id = resolve_example(&catalog, &by_title.id.to_string()).unwrap();
        assert_eq!(by_id.id, by_title.id);

        assert!(resolve_example(&catalog, "No Such Example").is_none());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Pulse", 44), "Pulse");
        let long = "x".repeat(60);
        let cut = truncate(&long, 44);
        assert_eq!(cut.len(), 44);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_titles() {
        // External catalogs carry non-ASCII titles; the cut must land on a
        // character boundary, not a raw byte offset.
        let accented = "é".repeat(30);
        let cut = truncate(&accented, 44);
        assert_eq!(cut, format!("{}...", "é".repeat(20)));
        assert!(cut.len() <= 44);

        let emoji = "🎈".repeat(15);
        let cut = truncate(&emoji, 44);
        assert_eq!(cut, format!("{}...", "🎈".repeat(10)));

        assert_eq!(truncate("résumé", 44), "résumé");
    }
}
