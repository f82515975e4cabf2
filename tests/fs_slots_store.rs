use recipebook::error::RecipeError;
use recipebook::model::{NewRecipe, RecipePatch};
use recipebook::store::fs_backend::FsSlots;
use recipebook::store::{LoadStatus, RecipeStore, SlotStore};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsSlots) {
    let dir = TempDir::new().unwrap();
    let slots = FsSlots::new(dir.path().join("book"));
    (dir, slots)
}

#[test]
fn test_slot_set_and_get() {
    let (_dir, slots) = setup();

    assert_eq!(slots.get("@recipes").unwrap(), None);
    slots.set("@recipes", "[]").unwrap();
    assert_eq!(slots.get("@recipes").unwrap(), Some("[]".to_string()));

    // Overwrite replaces the whole value
    slots.set("@recipes", "[1]").unwrap();
    assert_eq!(slots.get("@recipes").unwrap(), Some("[1]".to_string()));
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (_dir, slots) = setup();
    slots.set("@recipes", "[]").unwrap();
    slots.set("@recipes", "[]").unwrap();

    let entries = fs::read_dir(slots.root()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert!(slots.slot_path("@recipes").ends_with("slot-_40recipes.json"));
}

#[test]
fn test_store_survives_reopen() {
    let (dir, slots) = setup();
    let mut store = RecipeStore::open(slots);
    let bolo = store
        .add(NewRecipe::new("Bolo").with_ingredients("farinha, ovos"))
        .unwrap()
        .into_result()
        .unwrap();
    store
        .add(NewRecipe::new("Pão").with_preparation("Sovar e assar"))
        .unwrap()
        .into_result()
        .unwrap();
    store
        .update(&bolo.id, &RecipePatch::new().preparation("Misturar e assar"))
        .unwrap()
        .into_result()
        .unwrap();
    let expected = store.list().to_vec();
    drop(store);

    let reopened = RecipeStore::open(FsSlots::new(dir.path().join("book")));
    assert!(matches!(
        reopened.load_status(),
        LoadStatus::Loaded {
            count: 2,
            dropped: 0
        }
    ));
    assert_eq!(reopened.list(), expected.as_slice());
}

#[test]
fn test_reads_slot_written_by_mobile_client() {
    let (dir, slots) = setup();
    fs::create_dir_all(slots.root()).unwrap();
    fs::write(
        slots.slot_path("@recipes"),
        r#"[{"id":"1718000000000","title":"Bolo","ingredients":"farinha"}]"#,
    )
    .unwrap();

    let mut store = RecipeStore::open(FsSlots::new(dir.path().join("book")));
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].preparation, "");

    // Editing keeps the foreign id
    let updated = store
        .update("1718000000000", &RecipePatch::new().preparation("Assar"))
        .unwrap()
        .value;
    assert_eq!(updated.id, "1718000000000");
}

#[test]
fn test_corrupt_file_degrades_to_empty() {
    let (dir, slots) = setup();
    fs::create_dir_all(slots.root()).unwrap();
    fs::write(slots.slot_path("@recipes"), "not json at all").unwrap();

    let mut store = RecipeStore::open(FsSlots::new(dir.path().join("book")));
    assert!(store.is_empty());
    assert!(matches!(store.load_status(), LoadStatus::Discarded(_)));

    // The next successful mutation rewrites the slot with valid content
    store.add(NewRecipe::new("Bolo")).unwrap();
    let reopened = RecipeStore::open(FsSlots::new(dir.path().join("book")));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_write_failure_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    // A regular file where the slot directory should be makes every write fail
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "").unwrap();

    let mut store = RecipeStore::open(FsSlots::new(&blocked));
    let mutation = store.add(NewRecipe::new("Bolo")).unwrap();

    assert!(!mutation.is_durable());
    assert!(matches!(
        mutation.persist_error,
        Some(RecipeError::Persistence(_))
    ));
    assert_eq!(store.len(), 1);
}
