use just_locals::{LocalItem, LocalVariable, LocalsError, Type, Utf8};

fn local(
    start_pc: u32,
    length: u32,
    name: &str,
    descriptor: Option<&str>,
    signature: Option<&str>,
    index: u16,
) -> just_locals::Result<LocalVariable> {
    LocalVariable::new(
        start_pc,
        length,
        name.into(),
        descriptor.map(Utf8::from),
        signature.map(Utf8::from),
        index,
    )
}

#[test]
fn test_new_without_descriptor_or_signature() {
    assert!(matches!(
        local(0, 10, "x", None, None, 1),
        Err(LocalsError::InvalidArgument(_))
    ));
}

#[test]
fn test_new_with_descriptor_or_signature() {
    assert!(local(0, 10, "x", Some("I"), None, 1).is_ok());
    assert!(local(0, 10, "x", None, Some("TT;"), 1).is_ok());
    assert!(local(0, 10, "x", Some("Ljava/util/List;"), Some("Ljava/util/List<TT;>;"), 1).is_ok());
}

#[test]
fn test_new_with_overflowing_range() {
    assert!(matches!(
        local(u32::MAX, 1, "x", Some("I"), None, 1),
        Err(LocalsError::InvalidArgument(_))
    ));
    assert!(local(u32::MAX - 1, 1, "x", Some("I"), None, 1).is_ok());
}

#[test]
fn test_accessors() {
    let x = local(4, 6, "x", Some("J"), None, 2).unwrap();

    assert_eq!(4, x.start_pc());
    assert_eq!(6, x.length());
    assert_eq!(10, x.end_pc());
    assert_eq!("x", x.name().as_str());
    assert_eq!(Some(&Utf8::from("J")), x.descriptor());
    assert_eq!(None, x.signature());
    assert_eq!(2, x.index());
}

#[test]
fn test_with_signature() {
    let x = local(0, 10, "x", Some("Ljava/util/List;"), None, 1).unwrap();
    let y = x.with_signature("Ljava/util/List<Ljava/lang/String;>;".into());

    assert_eq!(
        Some(&Utf8::from("Ljava/util/List<Ljava/lang/String;>;")),
        y.signature()
    );
    assert_eq!(x.descriptor(), y.descriptor());
    assert!(x.matches_all_but_type(&y));
    assert_ne!(x, y);
    assert_eq!(None, x.signature());
}

#[test]
fn test_matches_all_but_type_ignores_types() {
    let x = local(0, 10, "x", Some("Ljava/lang/Object;"), None, 1).unwrap();
    let y = local(0, 10, "x", None, Some("TT;"), 1).unwrap();

    assert!(x.matches_all_but_type(&y));
    assert!(y.matches_all_but_type(&x));
}

#[test]
fn test_matches_all_but_type_compares_range_index_and_name() {
    let x = local(0, 10, "x", Some("I"), None, 1).unwrap();

    assert!(!x.matches_all_but_type(&local(1, 10, "x", Some("I"), None, 1).unwrap()));
    assert!(!x.matches_all_but_type(&local(0, 9, "x", Some("I"), None, 1).unwrap()));
    assert!(!x.matches_all_but_type(&local(0, 10, "y", Some("I"), None, 1).unwrap()));
    assert!(!x.matches_all_but_type(&local(0, 10, "x", Some("I"), None, 2).unwrap()));
}

#[test]
fn test_matches_pc_and_index() {
    let x = local(2, 8, "x", Some("I"), None, 1).unwrap();

    assert!(!x.matches_pc_and_index(1, 1));
    assert!(x.matches_pc_and_index(2, 1));
    assert!(x.matches_pc_and_index(9, 1));
    assert!(!x.matches_pc_and_index(10, 1));
    assert!(!x.matches_pc_and_index(5, 2));
}

#[test]
fn test_matches_pc_and_index_empty_range() {
    let x = local(2, 0, "x", Some("I"), None, 1).unwrap();

    assert!(!x.matches_pc_and_index(2, 1));
}

#[test]
fn test_ty() {
    let x = local(0, 10, "x", Some("[Ljava/lang/String;"), None, 1).unwrap();

    assert_eq!(
        Type::Array(Box::new(Type::Object("java/lang/String".into()))),
        x.ty().unwrap()
    );
}

#[test]
fn test_ty_without_descriptor() {
    let x = local(0, 10, "x", None, Some("TT;"), 1).unwrap();

    assert!(matches!(x.ty(), Err(LocalsError::MissingDescriptor)));
}

#[test]
fn test_local_item() {
    let x = local(0, 10, "x", Some("Ljava/util/List;"), Some("Ljava/util/List<TT;>;"), 1).unwrap();

    assert_eq!(
        LocalItem::new(Some("x".into()), Some("Ljava/util/List<TT;>;".into())),
        Some(x.local_item())
    );
    assert_eq!(
        None,
        local(0, 10, "y", Some("I"), None, 1)
            .unwrap()
            .local_item()
            .signature()
    );
}
