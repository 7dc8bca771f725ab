use overlap3d::math::{pose_from_euler_degrees, Vector};
use overlap3d::query::{run_query_euler, DEFAULT_OVERLAP_CAPACITY};
use overlap3d::scene::{BodyRegistry, RegistryError};
use overlap3d::shape::BoxShape;

fn main() -> Result<(), RegistryError> {
    let mut registry = BodyRegistry::new();

    // One static cube, pitched by 45 degrees.
    let cube_pose = pose_from_euler_degrees(Vector::new(0.1, 0.2, 0.3), 45.0, 0.0, 0.0);
    let _ = registry.insert("Cube1", BoxShape::cube(1.0), cube_pose)?;

    // The query region: a larger box pitched the other way.
    let result = run_query_euler(
        &BoxShape::cube(2.0),
        Vector::new(0.5, 0.6, 0.7),
        [-45.0, 0.0, 0.0],
        &registry,
        DEFAULT_OVERLAP_CAPACITY,
    );

    println!("{result}");

    let _ = registry.remove("Cube1");
    Ok(())
}
