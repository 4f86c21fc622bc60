use std::fs;
use std::io::{Cursor, Read};
use std::path::PathBuf;

use padlink::archive;
use padlink::config::Limits;
use padlink::Project;
use zip::ZipArchive;

fn project_dir(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("padlink-export-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&path);
    fs::create_dir_all(&path).expect("create project dir");
    path
}

#[test]
fn exported_archive_contains_the_loaded_files() {
    let root = project_dir("archive");
    fs::create_dir_all(root.join("src")).expect("create src");
    fs::write(root.join("index.html"), "<main></main>").expect("write index");
    fs::write(root.join("src/app.ts"), "export const n = 1;").expect("write app");

    let project = Project::load_dir(&root, &Limits::default()).expect("load project");
    let target = root.join("demo.zip");
    archive::write_archive(&project, &target).expect("write archive");

    let bytes = fs::read(&target).expect("read archive");
    let mut opened = ZipArchive::new(Cursor::new(bytes)).expect("open archive");
    assert_eq!(opened.len(), 2);

    let mut app = String::new();
    opened
        .by_name("src/app.ts")
        .expect("entry")
        .read_to_string(&mut app)
        .expect("read entry");
    assert_eq!(app, "export const n = 1;");

    let _ = fs::remove_dir_all(root);
}
