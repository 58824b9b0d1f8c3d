// SPDX-License-Identifier: MPL-2.0
use kin_gallery::collector::collect_person_media;
use kin_gallery::config::{self, Config, DEFAULT_HOVER_SIZE, DEFAULT_THUMBNAIL_SIZE};
use kin_gallery::db::{tree_file, Change, TreeRead};
use kin_gallery::domain::{
    Citation, CitationHandle, Event, EventHandle, Family, FamilyHandle, Media, MediaHandle,
    Person, PersonHandle,
};
use kin_gallery::gallery::Gallery;
use kin_gallery::i18n::fluent::I18n;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const TREE: &str = r#"
[tree]
name = "Boldt family"
media_base = "media"

[[people]]
handle = "P_hans"
media = ["M_portrait"]
citations = ["C_birth"]
events = ["E_marriage"]
families = ["F_boldt"]

[people.primary_name]
given = "Hans"
surname = "Boldt"
citations = ["C_name"]

[[people]]
handle = "P_greta"

[people.primary_name]
given = "Greta"
surname = "Boldt"

[[families]]
handle = "F_boldt"
media = ["M_house"]
events = ["E_census"]

[[events]]
handle = "E_marriage"
description = "Marriage"
citations = ["C_marriage"]

[[events]]
handle = "E_census"
description = "Census"
citations = ["C_census"]

[[citations]]
handle = "C_birth"
media = ["M_register"]

[[citations]]
handle = "C_name"
media = ["M_register"]

[[citations]]
handle = "C_marriage"
media = ["M_certificate"]

[[citations]]
handle = "C_census"
media = ["M_census_page"]

[[media]]
handle = "M_portrait"
description = "Wedding portrait"
path = "portrait.jpg"
mime = "image/jpeg"

[[media]]
handle = "M_register"
description = "Birth register"
path = "register.png"
mime = "image/png"

[[media]]
handle = "M_certificate"
description = "Marriage certificate"
path = "certificate.png"
mime = "image/png"

[[media]]
handle = "M_house"
description = "Family house"
path = "house.jpg"
mime = "image/jpeg"

[[media]]
handle = "M_census_page"
description = "Census page"
path = "census.png"
mime = "image/png"
"#;

#[test]
fn loading_a_tree_file_and_collecting_yields_sorted_unique_media() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("boldt.toml");
    fs::write(&path, TREE).expect("failed to write tree file");

    let tree = tree_file::load(&path).expect("failed to load tree file");
    assert_eq!(tree.name(), "Boldt family");

    let active = PersonHandle::from("P_hans");
    let result = collect_person_media(&tree, Some(&active)).expect("collection failed");

    // M_register is reachable via both C_birth and C_name but appears once.
    let descriptions: Vec<&str> = result.iter().map(|s| s.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Birth register",
            "Census page",
            "Family house",
            "Marriage certificate",
            "Wedding portrait",
        ]
    );
}

#[test]
fn gallery_entries_resolve_against_the_tree_file_directory() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("boldt.toml");
    fs::write(&path, TREE).expect("failed to write tree file");

    let tree = tree_file::load(&path).expect("failed to load tree file");
    let mut gallery = Gallery::new();
    gallery.set_active(Some(PersonHandle::from("P_hans")));
    gallery.rebuild(&tree).expect("rebuild failed");

    let expected_base = dir.path().join("media");
    for entry in gallery.entries() {
        assert!(entry.full_path.starts_with(&expected_base));
        assert_eq!(entry.folder, expected_base);
        assert!(entry.is_image());
    }
}

#[test]
fn every_mutation_category_triggers_a_refresh() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("boldt.toml");
    fs::write(&path, TREE).expect("failed to write tree file");

    let mut tree = tree_file::load(&path).expect("failed to load tree file");
    let mut gallery = Gallery::new();
    gallery.watch(&mut tree);
    gallery.set_active(Some(PersonHandle::from("P_hans")));
    gallery.rebuild(&tree).expect("rebuild failed");
    assert!(!gallery.needs_refresh());

    let mutations: Vec<(Change, Box<dyn FnOnce(&mut kin_gallery::db::MemoryTree)>)> = vec![
        (
            Change::PersonUpdate,
            Box::new(|t| {
                let person = t.person(&PersonHandle::from("P_greta")).unwrap().clone();
                t.update_person(person);
            }),
        ),
        (
            Change::FamilyAdd,
            Box::new(|t| {
                t.insert_family(Family {
                    handle: FamilyHandle::from("F_new"),
                    ..Family::default()
                });
            }),
        ),
        (
            Change::FamilyUpdate,
            Box::new(|t| {
                let family = t.family(&FamilyHandle::from("F_boldt")).unwrap().clone();
                t.update_family(family);
            }),
        ),
        (
            Change::FamilyDelete,
            Box::new(|t| t.remove_family(&FamilyHandle::from("F_new"))),
        ),
        (
            Change::EventAdd,
            Box::new(|t| {
                t.insert_event(Event {
                    handle: EventHandle::from("E_new"),
                    ..Event::default()
                });
            }),
        ),
        (
            Change::EventUpdate,
            Box::new(|t| {
                let event = t.event(&EventHandle::from("E_new")).unwrap().clone();
                t.update_event(event);
            }),
        ),
        (
            Change::EventDelete,
            Box::new(|t| t.remove_event(&EventHandle::from("E_new"))),
        ),
        (
            Change::CitationAdd,
            Box::new(|t| {
                t.insert_citation(Citation {
                    handle: CitationHandle::from("C_new"),
                    ..Citation::default()
                });
            }),
        ),
        (
            Change::CitationUpdate,
            Box::new(|t| {
                let citation = t.citation(&CitationHandle::from("C_new")).unwrap().clone();
                t.update_citation(citation);
            }),
        ),
        (
            Change::CitationDelete,
            Box::new(|t| t.remove_citation(&CitationHandle::from("C_new"))),
        ),
        (
            Change::MediaAdd,
            Box::new(|t| {
                t.insert_media(Media {
                    handle: MediaHandle::from("M_new"),
                    description: "New".into(),
                    path: PathBuf::from("new.jpg"),
                    mime: Some("image/jpeg".into()),
                });
            }),
        ),
        (
            Change::MediaUpdate,
            Box::new(|t| {
                let media = t.media(&MediaHandle::from("M_new")).unwrap().clone();
                t.update_media(media);
            }),
        ),
        (
            Change::MediaDelete,
            Box::new(|t| t.remove_media(&MediaHandle::from("M_new"))),
        ),
    ];

    for (change, mutate) in mutations {
        mutate(&mut tree);
        assert!(gallery.needs_refresh(), "no refresh after {change}");
        gallery.rebuild(&tree).expect("rebuild failed");
        assert!(!gallery.needs_refresh());
    }
}

#[test]
fn adding_a_person_does_not_trigger_a_refresh() {
    let mut tree = kin_gallery::db::MemoryTree::default();
    let mut gallery = Gallery::new();
    gallery.watch(&mut tree);

    tree.insert_person(Person {
        handle: PersonHandle::from("P_new"),
        ..Person::default()
    });
    assert!(!gallery.needs_refresh());
}

#[test]
fn editing_a_description_reorders_the_gallery() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("boldt.toml");
    fs::write(&path, TREE).expect("failed to write tree file");

    let mut tree = tree_file::load(&path).expect("failed to load tree file");
    let mut gallery = Gallery::new();
    gallery.watch(&mut tree);
    gallery.set_active(Some(PersonHandle::from("P_hans")));
    gallery.rebuild(&tree).expect("rebuild failed");
    assert_eq!(gallery.entries()[0].description, "Birth register");

    let mut portrait = tree.media(&MediaHandle::from("M_portrait")).unwrap().clone();
    portrait.description = "A wedding portrait".into();
    tree.update_media(portrait);

    assert!(gallery.needs_refresh());
    gallery.rebuild(&tree).expect("rebuild failed");
    assert_eq!(gallery.entries()[0].description, "A wedding portrait");
    assert_eq!(gallery.entries()[0].handle, MediaHandle::from("M_portrait"));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        language: Some("en-US".to_string()),
        thumbnail_size: Some(DEFAULT_THUMBNAIL_SIZE),
        hover_size: Some(DEFAULT_HOVER_SIZE),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("failed to write french config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("failed to close temporary directory");
}
