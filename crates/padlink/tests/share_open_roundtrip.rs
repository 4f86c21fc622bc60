use std::fs;
use std::path::PathBuf;

use padlink::config::PadlinkConfig;
use padlink::project::ProjectError;
use padlink::{link, Project, ResolvedState};

fn project_dir(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("padlink-share-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&path);
    fs::create_dir_all(&path).expect("create project dir");
    path
}

fn write_file(root: &std::path::Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write file");
}

#[test]
fn share_and_open_round_trip_through_a_directory() {
    let root = project_dir("roundtrip");
    write_file(&root, "index.html", "<script type=\"module\" src=\"app.js\"></script>\n");
    write_file(&root, "src/app.js", "console.log('😃 a+b/c');\n");
    write_file(&root, ".env", "SECRET=1\n");
    write_file(
        &root,
        "padlink.toml",
        "[share]\nbase_url = \"https://docs.example.com/playground\"\n",
    );

    let config = PadlinkConfig::discover(&root).expect("discover config");
    let project = Project::load_dir(&root, &config.limits).expect("load project");

    // Hidden entries and the tool config stay out of the share.
    assert_eq!(
        project.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        vec!["index.html", "src/app.js"]
    );

    let url = link::compose(&config.share.base_url, &project).expect("compose");
    assert!(url.starts_with("https://docs.example.com/playground#project="));

    let resolved = link::resolve(link::extract_fragment(&url), &config.default_sample());
    let ResolvedState::Files(shared) = resolved else {
        panic!("share link must resolve to files");
    };
    assert_eq!(shared, project);

    let out = project_dir("roundtrip-out");
    shared.write_dir(&out).expect("write shared project");
    assert_eq!(
        fs::read_to_string(out.join("src/app.js")).expect("read back"),
        "console.log('😃 a+b/c');\n"
    );

    let _ = fs::remove_dir_all(root);
    let _ = fs::remove_dir_all(out);
}

#[test]
fn configured_limits_are_enforced_on_load() {
    let root = project_dir("limits");
    write_file(&root, "big.txt", &"x".repeat(64));
    write_file(
        &root,
        "padlink.toml",
        "[limits]\nmax_file_bytes = 16\n",
    );

    let config = PadlinkConfig::discover(&root).expect("discover config");
    let err = Project::load_dir(&root, &config.limits).expect_err("file over limit");
    assert!(matches!(err, ProjectError::TooLarge { .. }));

    write_file(
        &root,
        "padlink.toml",
        "[limits]\nmax_files = 1\n",
    );
    write_file(&root, "second.txt", "y");
    let config = PadlinkConfig::discover(&root).expect("discover config");
    let err = Project::load_dir(&root, &config.limits).expect_err("too many files");
    assert!(matches!(err, ProjectError::TooManyFiles(1)));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn decoded_shares_cannot_write_outside_the_target() {
    let out = project_dir("escape-out");

    let mut project = Project::new();
    project.insert("../escape.txt", "nope");
    let err = project.write_dir(&out).expect_err("traversal must fail");
    assert!(matches!(err, ProjectError::InvalidPath(_)));
    assert!(!out.parent().expect("parent").join("escape.txt").exists());

    let _ = fs::remove_dir_all(out);
}
