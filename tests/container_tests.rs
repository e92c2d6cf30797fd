use maybe::{EmptyValueError, Maybe};

#[test]
fn test_create_empty() {
    let m: Maybe<i32> = Maybe::empty();

    assert!(m.is_empty());
    assert!(!m.is_present());
}

#[test]
fn test_create_from_value() {
    let m = Maybe::new(10);

    assert!(!m.is_empty());
    assert!(m.is_present());
    assert_eq!(m.value().unwrap(), &10);
}

#[test]
fn test_default_is_empty() {
    let m: Maybe<String> = Maybe::default();
    assert!(m.is_empty());
}

#[test]
fn test_clone_is_independent() {
    let src = Maybe::new(String::from("ten"));
    let mut copy = src.clone();

    assert!(copy.is_present());
    assert_eq!(copy.value().unwrap(), "ten");

    copy.value_mut().unwrap().push('!');
    assert_eq!(copy.value().unwrap(), "ten!");
    assert_eq!(src.value().unwrap(), "ten");
}

#[test]
fn test_clone_of_empty_is_empty() {
    let src: Maybe<String> = Maybe::empty();
    assert!(src.clone().is_empty());
}

#[test]
fn test_clone_from_present_and_empty() {
    let present = Maybe::new(9);
    let empty: Maybe<i32> = Maybe::empty();
    let mut target = Maybe::empty();

    target.clone_from(&present);
    assert!(target.is_present());
    assert_eq!(target.value().unwrap(), &9);

    // Source is unchanged.
    assert!(present.is_present());
    assert_eq!(present.value().unwrap(), &9);

    target.clone_from(&empty);
    assert!(target.is_empty());
    assert!(empty.is_empty());
}

#[test]
fn test_convert_to_other_payload_type() {
    let m = Maybe::new(22u16);
    let converted: Maybe<u64> = m.convert();

    assert!(converted.is_present());
    assert_eq!(converted.value().unwrap(), &22u64);

    let empty: Maybe<u16> = Maybe::empty();
    let converted: Maybe<u64> = empty.convert();
    assert!(converted.is_empty());
}

#[test]
fn test_assign_from_other_payload_type() {
    let src = Maybe::new(11u16);
    let empty: Maybe<u16> = Maybe::empty();
    let mut target: Maybe<u64> = Maybe::empty();

    target.assign_from(&src);
    assert!(target.is_present());
    assert_eq!(target.value().unwrap(), &11u64);

    // Source is unchanged.
    assert!(src.is_present());
    assert_eq!(src.value().unwrap(), &11u16);

    target.assign_from(&empty);
    assert!(target.is_empty());
}

#[test]
fn test_take_moves_and_empties_source() {
    let mut src = Maybe::new(8);

    let moved = src.take();
    assert!(src.is_empty());
    assert!(moved.is_present());
    assert_eq!(moved.value().unwrap(), &8);

    // Taking from an emptied container yields empty again.
    assert!(src.take().is_empty());
}

#[test]
fn test_value_access_on_empty_fails() {
    let mut empty: Maybe<i32> = Maybe::empty();

    assert!(empty.value().is_err());
    assert!(empty.value_mut().is_err());
    assert!(empty.into_value().is_err());

    let mut present = Maybe::new(5);
    assert_eq!(present.value().unwrap(), &5);
    assert_eq!(present.value_mut().unwrap(), &5);
    assert_eq!(present.into_value().unwrap(), 5);
}

#[test]
fn test_error_reports_call_site() {
    let empty: Maybe<i32> = Maybe::empty();

    let err: EmptyValueError = empty.value().unwrap_err();
    assert!(err.location().file().ends_with("container_tests.rs"));

    let rendered = err.to_string();
    assert!(rendered.contains("empty container"));
    assert!(rendered.contains("container_tests.rs"));
}

#[test]
fn test_value_or() {
    let empty: Maybe<i32> = Maybe::empty();
    let present = Maybe::new(6);

    assert_eq!(present.value_or(10), 6);
    assert_eq!(empty.value_or(10), 10);
}

#[test]
fn test_value_or_else_is_lazy() {
    let empty: Maybe<i32> = Maybe::empty();
    let present = Maybe::new(6);

    assert_eq!(present.value_or_else(|| unreachable!()), 6);
    assert_eq!(empty.value_or_else(|| -1), -1);
}

#[test]
fn test_set_overwrites() {
    let mut m = Maybe::new(1);
    m.set(2);
    assert_eq!(m.value().unwrap(), &2);

    let mut empty = Maybe::empty();
    empty.set(3);
    assert_eq!(empty.value().unwrap(), &3);
}

#[test]
fn test_clear_is_idempotent() {
    let mut m = Maybe::new(21);

    m.clear();
    assert!(m.is_empty());

    m.clear();
    assert!(m.is_empty());
}

#[test]
fn test_equality() {
    let empty: Maybe<i32> = Maybe::empty();
    let also_empty: Maybe<i32> = Maybe::empty();
    let five = Maybe::new(5);
    let also_five = Maybe::new(5);
    let seven = Maybe::new(7);

    assert!(empty == also_empty);
    assert!(five == also_five);
    assert!(empty != five);
    assert!(five != empty);
    assert!(five != seven);
}

#[test]
fn test_cross_type_equality() {
    // String and &str are cross-comparable payload types.
    let owned = Maybe::new(String::from("five"));
    let borrowed = Maybe::new("five");
    let other = Maybe::new("seven");

    assert!(owned == borrowed);
    assert!(owned != other);
}

#[test]
fn test_option_interop() {
    let present = Maybe::from_option(Some(4));
    assert_eq!(present.as_option(), Some(&4));
    assert_eq!(present.into_option(), Some(4));

    let empty: Maybe<i32> = Maybe::from_option(None);
    assert_eq!(empty.as_option(), None);
    assert_eq!(empty.into_option(), None);

    let from_value: Maybe<i32> = 9.into();
    assert_eq!(from_value.as_option(), Some(&9));
}

#[test]
fn test_debug_and_display() {
    let present = Maybe::new(21);
    let empty: Maybe<i32> = Maybe::empty();

    assert_eq!(format!("{present:?}"), "Maybe(21)");
    assert_eq!(format!("{empty:?}"), "Maybe::empty");

    // Display renders the value when present and nothing when empty.
    assert_eq!(present.to_string(), "21");
    assert_eq!(empty.to_string(), "");
}

#[test]
fn test_hash_distinguishes_presence() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let empty: Maybe<i32> = Maybe::empty();
    let present = Maybe::new(0);

    assert_ne!(hash_of(&empty), hash_of(&present));
    assert_eq!(hash_of(&present), hash_of(&Maybe::new(0)));
}
