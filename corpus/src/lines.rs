//! Line-by-line streaming across several files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CorpusError, Result};

/// Calls `callback` once per line of every file, in file order.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Reading stops at the
/// first I/O error, including lines that are not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use wordlist_corpus::lines::for_each_line;
///
/// let mut count = 0;
/// for_each_line(&["words/a.txt", "words/b.txt"], |_line| count += 1).unwrap();
/// println!("{count} lines");
/// ```
pub fn for_each_line<P, F>(paths: &[P], mut callback: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&str),
{
    for path in paths {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| CorpusError::io(path, e))?;
            callback(&line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_for_each_line_visits_files_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "alpha\r\nbeta\n").expect("write");
        fs::write(&second, "gamma").expect("write");

        let mut seen = Vec::new();
        for_each_line(&[&second, &first], |line| seen.push(line.to_string())).unwrap();
        assert_eq!(seen, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_for_each_line_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut calls = 0;
        let result = for_each_line(&[dir.path().join("missing.txt")], |_| calls += 1);
        assert!(matches!(result, Err(CorpusError::IoError { .. })));
        assert_eq!(calls, 0);
    }
}
