//! Lexical import recovery for files that fail to parse.
//!
//! Only used when unparseable files are not being skipped. Recovers import
//! facts line by line so a file with one syntax slip still contributes the
//! libraries it uses.

use crate::core::{FactKind, FileFacts, StructuralFact};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static IMPORT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:from\s+([A-Za-z_][\w.]*)\s+import\b|import\s+([A-Za-z_][\w.]*))")
        .expect("import pattern is valid")
});

pub fn recover_imports(path: &Path, content: &str) -> FileFacts {
    let facts = content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let captures = IMPORT_LINE.captures(line)?;
            let module = captures.get(1).or_else(|| captures.get(2))?;
            let top_level = module.as_str().split('.').next()?.to_string();
            Some(
                StructuralFact::new(FactKind::Import, top_level, path)
                    .at(index + 1, module.start() + 1),
            )
        })
        .collect();

    FileFacts {
        path: path.to_path_buf(),
        facts,
        degraded: true,
    }
}
