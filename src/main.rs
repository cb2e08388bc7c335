use clap::Parser;
use std::error::Error;
use std::fs;

use docmatch::{Document, SearchOptions, SearchService};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            input,
            query,
            limit,
            no_content,
            no_metadata,
            json,
        } => {
            let options = SearchOptions {
                include_content: !no_content,
                include_metadata: !no_metadata,
                limit,
            };
            run_search(&input, &query, &options, json)
        }
        Commands::Inspect { input } => run_inspect(&input),
    };

    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load_corpus(path: &str) -> Result<Vec<Document>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let documents: Vec<Document> = serde_json::from_str(&raw)?;
    Ok(documents)
}

fn run_search(
    input: &str,
    query: &str,
    options: &SearchOptions,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let service = SearchService::new(load_corpus(input)?);
    let results = service.search(query, options);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("no results for \"{}\"", query);
        return Ok(());
    }

    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>3}. {}  (relevance {:.1})",
            rank + 1,
            result.document.title,
            result.relevance
        );
        for field_match in &result.matches {
            for context in &field_match.contexts {
                println!("       [{}] {}", field_match.field, context);
            }
        }
    }
    Ok(())
}

fn run_inspect(input: &str) -> Result<(), Box<dyn Error>> {
    let documents = load_corpus(input)?;

    let with_description = documents.iter().filter(|d| d.description.is_some()).count();
    let with_content = documents.iter().filter(|d| d.content.is_some()).count();
    let total_tags: usize = documents.iter().map(|d| d.tags.len()).sum();
    let content_bytes: usize = documents
        .iter()
        .map(|d| d.content_text().len())
        .sum();

    println!("documents:        {}", documents.len());
    println!("with description: {}", with_description);
    println!("with content:     {}", with_content);
    println!("tags total:       {}", total_tags);
    println!("content bytes:    {}", content_bytes);
    Ok(())
}
