#![allow(dead_code)]

use git2::{Repository, Signature};
use std::fs;
use std::path::Path;

/// Write a CMakeLists.txt declaring `version` into `dir`
pub fn write_cmake(dir: &Path, version: &str) {
    fs::write(
        dir.join("CMakeLists.txt"),
        format!(
            "cmake_minimum_required(VERSION 3.14)\nproject(Widgets VERSION {} LANGUAGES CXX)\n",
            version
        ),
    )
    .expect("Could not write CMakeLists.txt");
}

/// Write a CMakeLists.txt declaring `version` and a `VERSION_CPPFIX` fix revision
pub fn write_cmake_with_fix(dir: &Path, version: &str, fix: &str) {
    write_cmake(dir, version);
    let path = dir.join("CMakeLists.txt");
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str(&format!("SET(VERSION_CPPFIX \"{}\")\n", fix));
    fs::write(path, content).expect("Could not write CMakeLists.txt");
}

/// Create fake generated documentation under `dir/.github/doxygen/out/html`
pub fn write_generated_docs(dir: &Path) {
    let html = dir.join(".github/doxygen/out/html");
    fs::create_dir_all(html.join("search")).expect("Could not create docs dir");
    fs::write(html.join("index.html"), "<html>new docs</html>").unwrap();
    fs::write(html.join("search/all.js"), "var searchData=[];").unwrap();
}

/// Commit every file of the work tree on the current branch
pub fn commit_all(repo: &Repository, message: &str) -> git2::Oid {
    let mut index = repo.index().expect("Could not get index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Could not add files to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let sig = Signature::now("Test User", "test@example.com").unwrap();

    let parents = match repo.head().ok().and_then(|h| h.target()) {
        Some(oid) => vec![repo.find_commit(oid).unwrap()],
        None => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("Could not create commit")
}

/// Initialize a repository with one commit
pub fn init_repo(dir: &Path) -> Repository {
    let repo = Repository::init(dir).expect("Could not init git repo");
    fs::write(dir.join("README.md"), "Initial content\n").unwrap();
    commit_all(&repo, "Initial commit");
    repo
}

/// Add a lightweight tag on HEAD
pub fn tag_head(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().target().unwrap();
    repo.tag_lightweight(name, &repo.find_object(head, None).unwrap(), false)
        .expect("Could not create tag");
}
