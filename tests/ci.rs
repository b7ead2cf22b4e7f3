use regex::Regex;
use std::{fs::read_to_string, path::Path};

fn manifest(relative_path: &str) -> toml::Table {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative_path);
    let contents = read_to_string(&path).unwrap();
    toml::from_str::<toml::Table>(&contents).unwrap()
}

#[test]
fn doctests_are_disabled() {
    let table = manifest("Cargo.toml");
    let doctest = table
        .get("lib")
        .and_then(toml::Value::as_table)
        .and_then(|table| table.get("doctest"))
        .and_then(toml::Value::as_bool);
    assert_eq!(Some(false), doctest);
}

#[test]
fn runner_is_unpublishable() {
    let table = manifest("runner/Cargo.toml");
    let publish = table
        .get("package")
        .and_then(toml::Value::as_table)
        .and_then(|package| package.get("publish"))
        .and_then(toml::Value::as_bool);
    assert_eq!(Some(false), publish);
}

#[test]
fn runner_is_a_workspace_member() {
    let table = manifest("Cargo.toml");
    let members = table
        .get("workspace")
        .and_then(toml::Value::as_table)
        .and_then(|workspace| workspace.get("members"))
        .and_then(toml::Value::as_array)
        .unwrap();
    assert!(
        members.iter().any(|member| member.as_str() == Some("runner")),
        "{members:?}"
    );
}

#[test]
fn readme_reference_links_are_sorted() {
    let re = Regex::new(r"^\[[^^\]]*\]:").unwrap();
    let readme = read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("README.md")).unwrap();
    let links = readme
        .lines()
        .filter(|line| re.is_match(line))
        .collect::<Vec<_>>();
    let mut links_sorted = links.clone();
    links_sorted.sort_unstable();
    assert!(
        links_sorted == links,
        "contents of README.md are not what was expected:\n{}",
        links_sorted.join("\n")
    );
}
