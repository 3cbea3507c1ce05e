use content_finder::provider::{Catalog, CatalogFilter};
use content_finder::{Config, FinderError};
use std::fs;

#[test]
fn loads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finder.toml");
    fs::write(
        &path,
        r#"
base_url = "/shop"
page_size = 12
heading_template = "{color} Shoes"
trace_level = "debug"
trace_file = "/tmp/content-finder.log"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.base_url, "/shop");
    assert_eq!(config.pagination().default_limit, 12);
    assert_eq!(config.pagination().increment, 24);
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert!(config.description_template.is_empty());
}

#[test]
fn empty_config_is_default() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn zero_page_size_is_rejected() {
    assert!(matches!(
        Config::from_toml_str("page_size = 0"),
        Err(FinderError::Config(_))
    ));
    assert!(matches!(
        Config::from_toml_str("page_increment = 0"),
        Err(FinderError::Config(_))
    ));
}

#[test]
fn malformed_config_is_a_toml_error() {
    assert!(matches!(
        Config::from_toml_str("page_size = \"many\""),
        Err(FinderError::Toml(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::from_file(&dir.path().join("absent.toml")),
        Err(FinderError::Io(_))
    ));
}

#[test]
fn loads_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, include_str!("common_catalog.toml")).unwrap();

    let catalog = Catalog::from_file(&path).unwrap();

    assert_eq!(catalog.dropdowns.len(), 2);
    assert_eq!(catalog.filters.len(), 3);
    assert_eq!(catalog.items.len(), 3);
    assert_eq!(catalog.resolve("large").unwrap().display_name, "Large");
}

#[test]
fn duplicate_url_titles_are_rejected() {
    let mut catalog = Catalog::from_toml_str(include_str!("common_catalog.toml")).unwrap();
    catalog.filters.push(CatalogFilter {
        url_title: "red".to_string(),
        display_name: "Crimson".to_string(),
        dropdown: "color".to_string(),
    });
    assert!(matches!(catalog.validate(), Err(FinderError::Catalog(_))));
}
