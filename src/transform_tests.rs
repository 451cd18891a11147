use glam::{DMat4, DVec3};
use super::*;

// ============================================================================
// Instances
// ============================================================================

#[test]
fn test_get_or_create_instance_is_idempotent() {
    let mut manager = TransformManager::new();
    let entity = Entity::new(3);

    let first = manager.get_or_create_instance(entity);
    let second = manager.get_or_create_instance(entity);

    assert_eq!(first, second);
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_instance_lookup() {
    let mut manager = TransformManager::new();
    let entity = Entity::new(9);

    assert!(manager.instance(entity).is_none());
    let instance = manager.get_or_create_instance(entity);
    assert_eq!(manager.instance(entity), Some(instance));
}

#[test]
fn test_entity_id_round_trip() {
    let entity = Entity::new(1234);
    assert_eq!(entity.id(), 1234);
}

// ============================================================================
// Transforms
// ============================================================================

#[test]
fn test_new_instance_starts_at_identity() {
    let mut manager = TransformManager::new();
    let instance = manager.get_or_create_instance(Entity::new(1));

    assert_eq!(manager.world_transform_accurate(instance), DMat4::IDENTITY);
}

#[test]
fn test_set_and_read_transform() {
    let mut manager = TransformManager::new();
    let instance = manager.get_or_create_instance(Entity::new(1));

    let transform = DMat4::from_translation(DVec3::new(1.0, -2.0, 3.0));
    manager.set_transform(instance, transform);

    assert_eq!(manager.world_transform_accurate(instance), transform);
}

#[test]
fn test_null_instance_reads_identity() {
    let manager = TransformManager::new();

    // the default key is the null key and never resolves to a slot
    let instance = TransformInstance::default();
    assert_eq!(manager.world_transform_accurate(instance), DMat4::IDENTITY);
}

#[test]
fn test_entities_have_independent_transforms() {
    let mut manager = TransformManager::new();
    let a = manager.get_or_create_instance(Entity::new(1));
    let b = manager.get_or_create_instance(Entity::new(2));

    let move_a = DMat4::from_translation(DVec3::new(10.0, 0.0, 0.0));
    let move_b = DMat4::from_translation(DVec3::new(0.0, 10.0, 0.0));
    manager.set_transform(a, move_a);
    manager.set_transform(b, move_b);

    assert_eq!(manager.world_transform_accurate(a), move_a);
    assert_eq!(manager.world_transform_accurate(b), move_b);
    assert_eq!(manager.len(), 2);
}

// ============================================================================
// Destruction
// ============================================================================

#[test]
fn test_destroy_removes_entity() {
    let mut manager = TransformManager::new();
    let entity = Entity::new(5);
    manager.get_or_create_instance(entity);

    manager.destroy(entity);

    assert!(manager.instance(entity).is_none());
    assert!(manager.is_empty());
}

#[test]
fn test_stale_instance_after_destroy() {
    let mut manager = TransformManager::new();
    let entity = Entity::new(5);
    let instance = manager.get_or_create_instance(entity);
    manager.destroy(entity);

    // writes through a stale key are ignored, reads fall back to identity
    manager.set_transform(instance, DMat4::from_translation(DVec3::ONE));
    assert_eq!(manager.world_transform_accurate(instance), DMat4::IDENTITY);
}
