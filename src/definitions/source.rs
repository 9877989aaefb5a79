//! Definition source collection.
//!
//! Reads raw definition documents from a directory for the binary. The core
//! pipeline itself only consumes the `(identifier, contents)` pairs.

use std::error::Error;
use std::path::Path;

/// Read every `*.yaml` / `*.yml` document under `dir` into `(stem, contents)`
/// pairs, sorted by stem. File stems are unique within a directory, so the
/// returned identifiers carry no duplicates.
///
/// # Arguments
/// * `dir` - Directory holding one definition document per subscription
///
/// # Returns
/// * `Ok(Vec)` - Sorted `(identifier, contents)` pairs
/// * `Err` - If the directory cannot be read
pub fn read_definition_dir(dir: &str) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    if !Path::new(dir).is_dir() {
        return Err(format!("Definition directory does not exist: {dir}").into());
    }

    let mut docs: Vec<(String, String)> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| format!("Error reading {dir}: {e}"))? {
        let path = entry.map_err(|e| format!("Error reading {dir}: {e}"))?.path();

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if !path.is_file() || !is_yaml {
            log::debug!("skipping non-definition entry: {}", path.display());
            continue;
        }

        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| format!("Error reading definition file {}: {e}", path.display()))?;
        docs.push((stem, contents));
    }

    docs.sort_by(|a, b| a.0.cmp(&b.0));
    log::info!("found {} definition documents in {dir}", docs.len());
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_definition_dir() {
        let docs = read_definition_dir("src/tests/test_data").expect("Error reading test data");
        assert!(!docs.is_empty(), "Test data should not be empty");
        let stems: Vec<&str> = docs.iter().map(|(s, _)| s.as_str()).collect();
        let mut sorted = stems.clone();
        sorted.sort();
        assert_eq!(stems, sorted, "Documents must be sorted by stem");
    }

    #[test]
    fn test_read_missing_dir_fails() {
        read_definition_dir("src/tests/no_such_dir").expect_err("Missing dir must fail");
    }
}
