//! Profile persistence across independent store handles (a "reload").

use current_user::profile::decode_basic_authorization;
use current_user::{CurrentUser, JsonFileStore, KeyValueStore, Profile, USER_KEY, config};
use serde_json::json;

fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("local_storage.json"))
}

#[test]
fn empty_store_yields_logged_out_profile() {
    let dir = tempfile::tempdir().unwrap();
    let user = CurrentUser::initialize(store_in(&dir)).unwrap();

    assert_eq!(user.profile(), &Profile::logged_out());
    assert!(!user.is_logged_in());
}

#[test]
fn stored_record_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    store
        .add(
            USER_KEY,
            json!({ "username": "al", "password": "x", "authorizationEncoded": "tok123" }),
        )
        .unwrap();

    let user = CurrentUser::initialize(store_in(&dir)).unwrap();
    assert!(user.is_logged_in());
    assert_eq!(user.profile(), &Profile::new("al", "x", "tok123"));
}

#[test]
fn save_round_trips_after_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = CurrentUser::initialize(store_in(&dir)).unwrap();
    first.set_profile(Profile::new("al", "x", "tok123"));
    first.save().unwrap();

    let second = CurrentUser::initialize(store_in(&dir)).unwrap();
    assert_eq!(second.profile(), first.profile());
    assert!(second.is_logged_in());
}

#[test]
fn unusual_profiles_round_trip_exactly() {
    let profiles = [
        Profile::new("åsa", "pässwörd ✓", "dG9rZW4g8J+UkQ=="),
        Profile::new("al", "pa:ss:word", "tok:with:colons"),
        Profile::new("", "", "tok123"),
        Profile::new("  spaced  ", " ", "\"quoted\" \\ token"),
    ];

    for profile in profiles {
        let dir = tempfile::tempdir().unwrap();

        let mut first = CurrentUser::initialize(store_in(&dir)).unwrap();
        first.set_profile(profile.clone());
        first.save().unwrap();

        let second = CurrentUser::initialize(store_in(&dir)).unwrap();
        assert_eq!(second.profile(), &profile);
        assert!(second.is_logged_in());
    }
}

#[test]
fn login_token_round_trips_unicode_credentials() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = CurrentUser::initialize(store_in(&dir)).unwrap();
    first.login("åsa", "pa:ss ✓");
    first.save().unwrap();

    let second = CurrentUser::initialize(store_in(&dir)).unwrap();
    let (user, pass) =
        decode_basic_authorization(&second.profile().authorization_encoded).unwrap();
    assert_eq!(user, "åsa");
    assert_eq!(pass, "pa:ss ✓");
    assert_eq!(second.profile().password, "pa:ss ✓");
}

#[test]
fn remove_round_trips_after_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = CurrentUser::initialize(store_in(&dir)).unwrap();
    first.login("al", "x");
    first.save().unwrap();
    first.remove().unwrap();

    let second = CurrentUser::initialize(store_in(&dir)).unwrap();
    assert_eq!(second.profile(), &Profile::logged_out());
    assert!(!second.is_logged_in());
}

#[test]
fn other_keys_survive_save_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    store.add("theme", json!("dark")).unwrap();

    let mut user = CurrentUser::initialize(store).unwrap();
    user.login("al", "x");
    user.save().unwrap();
    user.remove().unwrap();

    assert_eq!(store_in(&dir).get("theme").unwrap(), Some(json!("dark")));
}

#[test]
fn settings_point_at_store_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let store_path = dir.path().join("profiles.json");
    std::fs::write(
        &config_path,
        json!({ "storage_key": "civUser", "store_path": store_path }).to_string(),
    )
    .unwrap();

    let settings = config::load_config_from(&config_path).unwrap();
    let mut user =
        CurrentUser::with_key(settings.open_store().unwrap(), settings.storage_key.clone())
            .unwrap();
    user.login("al", "x");
    user.save().unwrap();

    let raw = JsonFileStore::new(&store_path).get("civUser").unwrap().unwrap();
    assert_eq!(raw["username"], "al");
    assert_eq!(raw["authorizationEncoded"], "YWw6eA==");
}
