//! Rendering a `ColList` to JSON, either on stdout or to a file.

use std::path::Path;

use range_comine::ColList;

/// Serializes `result` as pretty JSON and writes it to `path`, or to
/// stdout if `path` is `None`.
pub fn write_result(result: &ColList, path: Option<&Path>) -> Result<(), String> {
    let json = serde_json::to_string_pretty(result).map_err(|e| format!("failed to serialize result: {e}"))?;
    match path {
        Some(path) => std::fs::write(path, json).map_err(|e| format!("failed to write {}: {e}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use range_comine::Pattern;

    #[test]
    fn writes_to_a_file_when_given_a_path() {
        let mut result = ColList::new();
        result.insert(1.0, Pattern::singleton("A"));

        let path = std::env::temp_dir().join(format!("range-comine-cli-output-test-{}.json", std::process::id()));
        write_result(&result, Some(&path)).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"1\""));
        std::fs::remove_file(&path).ok();
    }
}
