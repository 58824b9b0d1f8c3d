// SPDX-License-Identifier: MPL-2.0
//! Tree file loading.
//!
//! A tree file is a TOML document with a `[tree]` metadata table and one
//! array of tables per record kind:
//!
//! ```toml
//! [tree]
//! name = "Boldt family"
//! media_base = "media"
//!
//! [[people]]
//! handle = "P1"
//! media = ["M1"]
//!
//! [[media]]
//! handle = "M1"
//! description = "Wedding portrait"
//! path = "wedding.jpg"
//! mime = "image/jpeg"
//! ```
//!
//! `media_base` may be relative; it is resolved against the tree file's
//! directory. Reference lists are not validated on load, matching the
//! assumption that the producer keeps the tree internally consistent.

use crate::db::MemoryTree;
use crate::domain::{Citation, Event, Family, Media, Person};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
struct TreeMeta {
    #[serde(default)]
    name: String,
    #[serde(default)]
    media_base: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct TreeFile {
    #[serde(default)]
    tree: TreeMeta,
    #[serde(default)]
    people: Vec<Person>,
    #[serde(default)]
    families: Vec<Family>,
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    citations: Vec<Citation>,
    #[serde(default)]
    media: Vec<Media>,
}

/// Loads a tree file from disk.
pub fn load(path: &Path) -> Result<MemoryTree> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    from_toml(&content, base_dir)
}

/// Parses a tree file from TOML text, resolving a relative `media_base`
/// against `base_dir`.
pub fn from_toml(content: &str, base_dir: &Path) -> Result<MemoryTree> {
    let file: TreeFile = toml::from_str(content)?;

    let media_base = if file.tree.media_base.is_absolute() {
        file.tree.media_base
    } else {
        base_dir.join(&file.tree.media_base)
    };

    let mut tree = MemoryTree::new(file.tree.name, media_base);
    for person in file.people {
        tree.insert_person(person);
    }
    for family in file.families {
        tree.insert_family(family);
    }
    for event in file.events {
        tree.insert_event(event);
    }
    for citation in file.citations {
        tree.insert_citation(citation);
    }
    for media in file.media {
        tree.insert_media(media);
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::TreeRead;
    use crate::domain::{MediaHandle, PersonHandle};
    use crate::error::Error;
    use std::io::Write;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
        [tree]
        name = "Sample"
        media_base = "media"

        [[people]]
        handle = "P1"
        media = ["M1"]
        citations = ["C1"]

        [people.primary_name]
        given = "Hans"
        surname = "Boldt"

        [[citations]]
        handle = "C1"
        media = ["M2"]

        [[media]]
        handle = "M1"
        description = "Portrait"
        path = "portrait.jpg"
        mime = "image/jpeg"

        [[media]]
        handle = "M2"
        description = "Birth register"
        path = "register.png"
        mime = "image/png"
    "#;

    #[test]
    fn from_toml_builds_a_readable_tree() {
        let tree = from_toml(SAMPLE, Path::new("/trees")).expect("valid tree file");

        assert_eq!(tree.name(), "Sample");
        let person = tree.person(&PersonHandle::from("P1")).unwrap();
        assert_eq!(person.display_name(), "Hans Boldt");

        let portrait = tree.media(&MediaHandle::from("M1")).unwrap();
        assert_eq!(
            tree.media_full_path(portrait),
            PathBuf::from("/trees/media/portrait.jpg")
        );
    }

    #[test]
    fn load_resolves_media_base_against_file_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("sample.toml");
        let mut file = fs::File::create(&path).expect("failed to create tree file");
        file.write_all(SAMPLE.as_bytes())
            .expect("failed to write tree file");

        let tree = load(&path).expect("failed to load tree file");
        assert!(tree.media_base().starts_with(dir.path()));
        assert!(tree.media_base().ends_with("media"));
    }

    #[test]
    fn invalid_toml_is_a_tree_file_error() {
        let err = from_toml("people = \"oops\"", Path::new(".")).unwrap_err();
        assert!(matches!(err, Error::TreeFile(_)));
    }

    #[test]
    fn empty_document_is_an_empty_tree() {
        let tree = from_toml("", Path::new(".")).expect("empty tree file is valid");
        assert_eq!(tree.people().count(), 0);
    }
}
