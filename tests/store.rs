use std::io::Cursor;

use wallet_addressbook::prelude::*;

#[test]
fn concrete_first_comma_scenario() -> Result<(), AppError> {
    let store = ContactStore::load(Cursor::new("1A2b3C,Alice\n4D5e6F,Bob, Jr.\n"))?;

    assert_eq!(store.count(), 2);
    assert_eq!(store.get(0)?, &Contact::new("Alice", "1A2b3C"));
    assert_eq!(store.get(1)?, &Contact::new("Bob, Jr.", "4D5e6F"));
    Ok(())
}

#[test]
fn file_round_trip_keeps_order() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(dir.path().join("addressBook.csv"));

    let mut store = ContactStore::new();
    for i in (0..200).rev() {
        assert!(store.add(format!("Name {i}, the {i}th"), format!("ADDR{i:04}")));
    }
    storage.save(store.contacts())?;

    let reloaded = storage.load()?;
    assert_eq!(reloaded.count(), 200);
    assert_eq!(reloaded.contacts(), store.contacts());
    assert_eq!(reloaded.get(0)?.name(), "Name 199, the 199th");
    Ok(())
}

#[test]
fn duplicate_add_leaves_everything_unchanged() -> Result<(), AppError> {
    let mut store = ContactStore::new();
    store.add("Alice", "AAA");
    store.add("Bob", "BBB");
    let before = store.snapshot();

    assert!(!store.add("Bob", "CCC"));
    assert_eq!(store.snapshot(), before);
    Ok(())
}

#[test]
fn corrupt_load_produces_no_store() {
    let result = ContactStore::load(Cursor::new("AAA,Alice\nBBB\n"));

    match result {
        Err(err) => assert_eq!(err.kind(), ErrorKind::CorruptData),
        Ok(store) => panic!("loaded {} contacts from corrupt data", store.count()),
    }
}

#[test]
fn deferred_saves_follow_mutations() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("addressBook.csv");
    let saver = AutoSaver::spawn(Box::new(FileStorage::new(&path)))?;

    let mut store = ContactStore::new();
    store.add("Alice", "AAA");
    saver.schedule(store.snapshot())?;
    store.add("Bob", "BBB");
    saver.schedule(store.snapshot())?;
    store.remove(0)?;
    saver.schedule(store.snapshot())?;
    saver.flush()?;

    let reloaded = FileStorage::new(&path).load()?;
    assert_eq!(reloaded.contacts(), &[Contact::new("Bob", "BBB")]);
    Ok(())
}
