//! Builds the classic globe-snowman scene: one big textured sphere for the
//! head and two smaller spheres for the ears, each placed by its own
//! transform script. Prints mesh statistics and the composed model
//! matrices — everything a renderer would upload, minus the GPU.

use lithos::{Mat4, MeshData, Vec4, compose_records};

fn print_model(name: &str, model: Mat4) {
    println!("{name} model matrix:");
    for row in 0..4 {
        let r = model.row(row);
        println!("  [{:8.3} {:8.3} {:8.3} {:8.3}]", r.x, r.y, r.z, r.w);
    }
    let center = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
    println!("  origin maps to ({:.2}, {:.2}, {:.2})\n", center.x, center.y, center.z);
}

fn main() {
    let sphere = MeshData::sphere(20, 20).expect("valid sphere parameters");
    println!(
        "unitSphere: {} vertices, {} triangles, {} indices\n",
        sphere.vertex_count(),
        sphere.triangle_count(),
        sphere.indices.len()
    );

    let head = compose_records([
        ("S", vec![2.5, 2.5, 2.5]),
        ("Rx", vec![90.0]),
        ("Ry", vec![-90.0]),
        ("T", vec![0.0, 0.0, 0.0]),
    ]);
    print_model("head", head);

    let ear_left = compose_records([("S", vec![1.0, 1.0, 1.0]), ("T", vec![-2.5, 2.5, 0.0])]);
    print_model("earL", ear_left);

    let ear_right = compose_records([("S", vec![1.0, 1.0, 1.0]), ("T", vec![2.5, 2.5, 0.0])]);
    print_model("earR", ear_right);

    println!(
        "shader sources: {} + {} bytes of GLSL",
        lithos::VERTEX_SHADER.len(),
        lithos::FRAGMENT_SHADER.len()
    );
}
