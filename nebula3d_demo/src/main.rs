//! Nebula3D demo — a headless frame loop driving the scene layer.
//!
//! Plays the engine-owner role: builds content through the registry,
//! populates a scene, then steps frames at a fixed delta — update,
//! begin_frame, render, end_frame — while toggling the culling policy
//! to show the performance counters move. Uses the NullRenderer, so it
//! runs anywhere, with no GPU or window.

use glam::{Vec3, Mat4};
use nebula_3d_engine::nebula3d::{Engine, Result};
use nebula_3d_engine::nebula3d::render::{NullRenderer, ShaderHandle, GeometryDesc};
use nebula_3d_engine::nebula3d::camera::Camera;
use nebula_3d_engine::nebula3d::content::MeshDesc;
use nebula_3d_engine::nebula3d::scene::{SceneManager, Transform, AABB};
use nebula_3d_engine::engine_info;

/// Frames to simulate
const FRAME_COUNT: u32 = 240;
/// Fixed frame delta (60 FPS)
const DELTA_TIME: f32 = 1.0 / 60.0;

/// Unit cube geometry: 8 corners, 12 triangles.
fn cube_geometry(half_extent: f32) -> GeometryDesc {
    let h = half_extent;
    let positions: Vec<[f32; 3]> = vec![
        [-h, -h, -h], [h, -h, -h], [h, h, -h], [-h, h, -h],
        [-h, -h,  h], [h, -h,  h], [h, h,  h], [-h, h,  h],
    ];
    // Corner normals; good enough for a flat-shaded demo cube
    let normals = positions.iter()
        .map(|p| {
            let n = Vec3::from_array(*p).normalize();
            [n.x, n.y, n.z]
        })
        .collect();
    let indices = vec![
        0, 1, 2, 2, 3, 0, // back
        4, 6, 5, 6, 4, 7, // front
        0, 3, 7, 7, 4, 0, // left
        1, 5, 6, 6, 2, 1, // right
        3, 2, 6, 6, 7, 3, // top
        0, 4, 5, 5, 1, 0, // bottom
    ];

    GeometryDesc {
        positions,
        normals,
        tex_coords: Vec::new(),
        indices: Some(indices),
    }
}

fn cube_desc(name: &str, half_extent: f32, position: Vec3) -> MeshDesc {
    MeshDesc {
        name: name.to_string(),
        geometry: cube_geometry(half_extent),
        bounding_box: AABB {
            min: Vec3::splat(-half_extent),
            max: Vec3::splat(half_extent),
        },
        transform: Transform::from_position(position),
    }
}

fn main() -> Result<()> {
    Engine::initialize()?;
    Engine::create_renderer(NullRenderer::new())?;
    Engine::create_content_registry()?;

    let renderer = Engine::renderer()?;
    let registry = Engine::content_registry()?;

    // Content: three cubes at increasing distance, plus a two-part model
    let (near, mid, far, station) = {
        let mut registry = registry.lock().unwrap();

        let near = registry.create_mesh(&renderer,
            cube_desc("cube_near", 1.0, Vec3::new(0.0, 0.0, -10.0)))?;
        let mid = registry.create_mesh(&renderer,
            cube_desc("cube_mid", 1.0, Vec3::new(30.0, 0.0, 0.0)))?;
        let far = registry.create_mesh(&renderer,
            cube_desc("cube_far", 1.0, Vec3::new(0.0, 0.0, 80.0)))?;
        let station = registry.create_model(&renderer, "station",
            vec![
                cube_desc("station_core", 2.0, Vec3::ZERO),
                cube_desc("station_mast", 0.5, Vec3::new(0.0, 3.0, 0.0)),
            ],
            Transform::from_position(Vec3::new(-20.0, 0.0, 5.0)))?;

        (near, mid, far, station)
    };

    // Scene: wrap the registry handouts in scene objects
    let mut scene = SceneManager::new();
    {
        let registry = registry.lock().unwrap();
        for key in [near, mid, far, station] {
            if let Some(drawable) = registry.drawable(key) {
                let object = scene.create_object(drawable, None);
                let mut object = object.lock().unwrap();
                object.set_auto_rotate(true);
                object.set_rotation_speed(Vec3::new(0.0, 45.0, 0.0));
            }
        }
    }

    engine_info!("nebula3d_demo", "Scene ready: {}", scene.performance_info());

    // Frame loop: the demo is the external provider of viewer position
    // and per-frame delta time
    let camera = Camera::new(Vec3::ZERO, Mat4::IDENTITY, Mat4::IDENTITY);
    let shader = ShaderHandle::from_raw(1);

    for frame in 0..FRAME_COUNT {
        scene.update(DELTA_TIME);

        {
            let mut renderer = renderer.lock().unwrap();
            renderer.begin_frame()?;
        }
        scene.render(shader, camera.position())?;
        {
            let mut renderer = renderer.lock().unwrap();
            renderer.end_frame()?;
        }

        if frame % 60 == 0 {
            let stats = renderer.lock().unwrap().stats();
            engine_info!("nebula3d_demo", "Frame {}: {} | {} draw calls, {} triangles",
                frame, scene.performance_info(), stats.draw_calls, stats.triangles);
        }

        // Halfway through, render everything regardless of distance
        if frame == FRAME_COUNT / 2 {
            scene.toggle_distance_culling();
        }
    }

    scene.dispose();
    registry.lock().unwrap().clear();
    Engine::shutdown();
    Ok(())
}
