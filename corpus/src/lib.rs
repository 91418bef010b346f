//! Word-file processing for the `words` command.
//!
//! - [`paths`] expands file and directory arguments into file lists.
//! - [`lines`] streams lines across several files in order.
//! - [`exclude`] builds the exclusion predicate from exclude-word files.
//! - [`wordlist`] ties them together into a length-grouped word list.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use wordlist_corpus::{GenerateOptions, generate};
//!
//! let options = GenerateOptions {
//!     words: vec![PathBuf::from("dict")],
//!     exclude: vec![PathBuf::from("stopwords.txt")],
//!     out: PathBuf::from("words.json"),
//! };
//! let list = generate(&options)?;
//! list.write_json(&options.out)?;
//! # Ok::<(), wordlist_corpus::CorpusError>(())
//! ```

mod error;
pub mod exclude;
pub mod lines;
pub mod paths;
pub mod wordlist;

pub use error::{CorpusError, Result};
pub use exclude::ExcludeFilter;
pub use wordlist::{GenerateOptions, WordList, generate};
