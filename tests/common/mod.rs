//! Common test utilities and helpers
//!
//! Fixture trees shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Five-line C file with tags on lines 1 and 3
pub const EXAMPLE_C: &str = "// SPDX-FileType: DOCUMENTATION\n\
#include <stdio.h>\n\
# SPDX-FileCopyrightText: 2019 Jane Doe <jane@example.com>\n\
int main(void) { return 0; }\n\
/* end */\n";

/// Create a temporary directory populated with `(relative path, content)` files
pub fn create_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, content) in files {
        write_file(dir.path(), relative, content);
    }
    dir
}

pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A small project tree where every file carries a disjoint set of tags
pub fn licensed_project() -> TempDir {
    create_tree(&[
        (
            "src/main.rs",
            "// SPDX-License-Identifier: Apache-2.0\n// SPDX-FileCopyrightText: 2024 Example Org\nfn main() {}\n",
        ),
        ("src/util/helpers.py", "#!/usr/bin/env python3\n# SPDX-License-Identifier: MIT\n"),
        ("include/api.h", "/*\n * SPDX-License-Identifier: BSD-3-Clause\n */\n"),
        ("README.md", "# Project\n\nNo tags in here.\n"),
        ("docs/example.c", EXAMPLE_C),
    ])
}
