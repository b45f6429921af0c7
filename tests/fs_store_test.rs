use postboard::model::{Post, PostInput};
use postboard::query;
use postboard::store::fs_backend::FsBackend;
use postboard::store::{PostStore, StorageBackend};
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir) -> PostStore<FsBackend> {
    PostStore::load(FsBackend::new(dir.path().to_path_buf()), "posts")
}

#[test]
fn test_persisted_state_survives_reload() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let a = store.create(PostInput::new("Hello", "World", "Bob")).unwrap();
    let b = store.create(PostInput::new("Second", "Post", "Amy")).unwrap();
    store
        .update(&a.id, PostInput::new("Hello", "Everyone", "Bob"))
        .unwrap();

    let reloaded = open(&dir);
    assert_eq!(reloaded.all(), store.all());
    assert_eq!(reloaded.all()[0].id, b.id);
    assert_eq!(reloaded.all()[1].content, "Everyone");
    assert_eq!(reloaded.all()[1].created_at, a.created_at);
}

#[test]
fn test_every_mutation_is_flushed() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let path = store.backend().slot_path("posts").unwrap();

    let a = store.create(PostInput::new("A", "a", "a")).unwrap();
    let on_disk: Vec<Post> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.len(), 1);

    store.delete(&a.id).unwrap();
    let on_disk: Vec<Post> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(on_disk.is_empty());
}

#[test]
fn test_reads_records_written_by_hand() {
    let dir = TempDir::new().unwrap();
    let raw = r#"[
        {
            "id": "6f1c7a52-3b0e-4d55-9a57-0d1bd6a5e7a1",
            "title": "Hand written",
            "content": "Typed into the slot",
            "author": "alice",
            "createdAt": "2024-01-02T03:04:05.000Z"
        }
    ]"#;
    fs::write(dir.path().join("posts.json"), raw).unwrap();

    let store = open(&dir);
    assert_eq!(store.all().len(), 1);
    assert_eq!(query::filter(store.all(), "ALICE").len(), 1);
}

#[test]
fn test_wrong_shape_loads_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("posts.json"), r#"{"posts": []}"#).unwrap();
    assert!(open(&dir).all().is_empty());
}
