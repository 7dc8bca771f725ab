use overlap3d::math::{Pose, Vector};
use overlap3d::scene::{BodyRegistry, RegistryError};
use overlap3d::shape::BoxShape;

#[test]
fn insert_returns_the_stored_body() {
    let mut registry = BodyRegistry::new();
    let pose = Pose::translation(1.0, 2.0, 3.0);
    let body = registry
        .insert("crate", BoxShape::new(Vector::new(1.0, 0.5, 0.25)), pose)
        .unwrap();

    assert_eq!(body.id(), "crate");
    assert_eq!(body.pose(), &pose);
    assert!(registry.contains("crate"));
}

#[test]
fn errors_leave_registry_unchanged() {
    let mut registry = BodyRegistry::new();
    let _ = registry
        .insert("a", BoxShape::cube(1.0), Pose::identity())
        .unwrap();
    let before: Vec<_> = registry.snapshot().to_vec();

    assert_eq!(
        registry.insert("a", BoxShape::cube(3.0), Pose::identity()),
        Err(RegistryError::DuplicateId("a".to_string()))
    );
    assert!(matches!(
        registry.insert("b", BoxShape::cube(-1.0), Pose::identity()),
        Err(RegistryError::InvalidShape { .. })
    ));

    assert_eq!(registry.snapshot().to_vec(), before);
}

#[test]
fn error_messages_name_the_body() {
    let err = RegistryError::DuplicateId("Cube1".to_string());
    assert_eq!(err.to_string(), "a body with id `Cube1` is already registered");

    let err = RegistryError::InvalidShape {
        id: "flat".to_string(),
        half_extents: Vector::new(1.0, 0.0, 1.0),
    };
    assert!(err.to_string().starts_with("the body `flat` has a non-positive half-extent"));
}

#[test]
fn removed_ids_can_be_reused() {
    let mut registry = BodyRegistry::new();
    let _ = registry
        .insert("a", BoxShape::cube(1.0), Pose::identity())
        .unwrap();

    let removed = registry.remove("a").unwrap();
    assert_eq!(removed.id(), "a");
    assert!(registry.is_empty());
    assert!(registry.remove("a").is_none());

    let _ = registry
        .insert("a", BoxShape::cube(2.0), Pose::identity())
        .unwrap();
    assert_eq!(registry.get("a").unwrap().shape(), &BoxShape::cube(2.0));

    registry.clear();
    assert!(registry.snapshot().is_empty());
}

#[cfg(feature = "serde-serialize")]
#[test]
fn deserialization_rejects_invalid_bodies() {
    let mut registry = BodyRegistry::new();
    let _ = registry
        .insert("a", BoxShape::cube(1.0), Pose::translation(1.0, 0.0, 0.0))
        .unwrap();
    let json = serde_json::to_value(&registry).unwrap();

    let restored: BodyRegistry = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(restored.get("a"), registry.get("a"));

    let mut flat = json.clone();
    flat[0]["shape"]["half_extents"] = serde_json::json!([0.0, -1.0, 1.0]);
    assert!(serde_json::from_value::<BodyRegistry>(flat).is_err());

    let duplicated = serde_json::Value::Array(vec![json[0].clone(), json[0].clone()]);
    assert!(serde_json::from_value::<BodyRegistry>(duplicated).is_err());
}
