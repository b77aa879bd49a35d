use std::cell::RefCell;
use std::rc::Rc;

use rhrh_core::EntityKind;
use rhrh_events::ListChange;
use rhrh_logic::{
    CommandError, DefaultParser, JsonFileStore, LogicError, LogicManager, SnapshotStore,
    UiDirective,
};
use rhrh_model::{Customer, Reservation, Snapshot};

fn fresh(dir: &tempfile::TempDir) -> LogicManager<DefaultParser, JsonFileStore> {
    let store = JsonFileStore::new(dir.path().join("rhrh.json"));
    store.save(&Snapshot::default()).unwrap();
    LogicManager::open(DefaultParser, store).unwrap()
}

fn names(logic: &LogicManager<DefaultParser, JsonFileStore>) -> Vec<String> {
    logic
        .filtered::<Customer>()
        .to_vec()
        .iter()
        .map(|c| c.name().to_string())
        .collect()
}

#[test]
fn add_find_edit_delete_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = fresh(&dir);

    logic
        .execute("addc n/Bob Choo p/222 e/bob@example.com a/Bishan t/regular")
        .unwrap();
    logic
        .execute("addc n/Amy Bee p/111 e/amy@example.com a/Geylang")
        .unwrap();
    assert_eq!(names(&logic), ["Amy Bee", "Bob Choo"]);

    let found = logic.execute("findc REGULAR").unwrap();
    assert_eq!(found.feedback, "1 customers listed!");
    assert_eq!(names(&logic), ["Bob Choo"]);

    // Index 1 is Bob in the filtered view, not Amy in the store.
    logic.execute("editc 1 n/Bobby Choo").unwrap();
    assert_eq!(names(&logic), ["Amy Bee", "Bobby Choo"]);

    logic.execute("delc 1").unwrap();
    assert_eq!(names(&logic), ["Bobby Choo"]);

    let store = JsonFileStore::new(dir.path().join("rhrh.json"));
    let reopened = LogicManager::open(DefaultParser, store).unwrap();
    assert_eq!(reopened.model(), logic.model());
}

#[test]
fn rejected_commands_leave_model_and_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = fresh(&dir);
    logic
        .execute("addc n/Amy Bee p/111 e/amy@example.com a/Geylang")
        .unwrap();
    let before = logic.model().snapshot();

    let err = logic
        .execute("addc n/Amy Twin p/111 e/twin@example.com a/Elsewhere")
        .unwrap_err();
    assert!(matches!(
        err,
        LogicError::Command(CommandError::Duplicate(EntityKind::Customer))
    ));

    let err = logic.execute("delc 5").unwrap_err();
    assert_eq!(err.to_string(), "The customer index provided is invalid");

    let err = logic
        .execute("addr p/999 np/2 dt/2021-12-24 2000")
        .unwrap_err();
    assert!(matches!(err, LogicError::Command(CommandError::Rejected(_))));

    assert_eq!(logic.model().snapshot(), before);
    assert_eq!(logic.store().load().unwrap(), Some(before));
}

#[test]
fn reservations_follow_customers_and_sort_by_time() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = fresh(&dir);
    logic
        .execute("addc n/Amy Bee p/111 e/amy@example.com a/Geylang")
        .unwrap();
    logic.execute("addr p/111 np/2 dt/2021-12-25 1930").unwrap();
    logic.execute("addr p/111 np/6 dt/2021-12-24 2000").unwrap();

    let times: Vec<String> = logic
        .filtered::<Reservation>()
        .to_vec()
        .iter()
        .map(|r| r.date_time().format("%d %H%M").to_string())
        .collect();
    assert_eq!(times, ["24 2000", "25 1930"]);

    logic.execute("sortr by/np o/a").unwrap();
    let people: Vec<u32> = logic
        .filtered::<Reservation>()
        .to_vec()
        .iter()
        .map(Reservation::number_of_people)
        .collect();
    assert_eq!(people, [2, 6]);

    logic.execute("listr").unwrap();
    let first = logic.filtered::<Reservation>().to_vec()[0].number_of_people();
    assert_eq!(first, 6);
}

#[test]
fn view_listeners_see_command_effects() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = fresh(&dir);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _subscription = logic
        .filtered::<Customer>()
        .subscribe(move |change| sink.borrow_mut().push(*change));

    logic
        .execute("addc n/Amy Bee p/111 e/amy@example.com a/Geylang")
        .unwrap();
    logic.execute("findc nobody").unwrap();
    logic.execute("clear").unwrap();

    assert_eq!(
        *seen.borrow(),
        [ListChange::Added, ListChange::Refiltered, ListChange::Reset]
    );
}

#[test]
fn help_and_exit_are_directives() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = fresh(&dir);
    assert_eq!(
        logic.execute("help").unwrap().directive,
        Some(UiDirective::ShowHelp)
    );
    assert_eq!(
        logic.execute("exit").unwrap().directive,
        Some(UiDirective::Exit)
    );
}
