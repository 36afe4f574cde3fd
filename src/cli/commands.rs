use crate::resolver::{classify, ImageResolver};
use crate::Result;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Resolve a single reference and print the result
pub fn resolve(resolver: &ImageResolver, reference: &str, as_json: bool) -> Result<()> {
    debug!("Resolving {} against {}", reference, resolver.base_url());

    let resolved = resolver.resolve(Some(reference));

    if as_json {
        let body = json!({
            "reference": reference,
            "kind": classify(reference),
            "resolved": resolved,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{resolved}");
    }

    Ok(())
}

/// Print the classification of a reference
pub fn classify_reference(reference: &str) {
    println!("{}", classify(reference).as_str());
}

/// Resolve every non-empty line of a file
pub fn resolve_file(resolver: &ImageResolver, path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let resolved = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| resolver.resolve(Some(line)))
        .collect();

    Ok(resolved)
}

/// Resolve references from a file and print them, one per line
pub fn batch(resolver: &ImageResolver, input: &str) -> Result<()> {
    let resolved = resolve_file(resolver, Path::new(input))?;

    for url in &resolved {
        println!("{url}");
    }

    debug!("Resolved {} references from {}", resolved.len(), input);

    Ok(())
}
