//! Generates both fractal variants and prints what a rendering sink
//! would consume.

use sierpinski_geom::{io, tetrahedron_mesh, triangle_prisms};

fn main() {
    let mesh = tetrahedron_mesh(1.0, 3);
    println!(
        "Sierpinski tetrahedron, depth 3: {} verts, {} faces",
        mesh.verts.len(),
        mesh.faces.len()
    );
    println!(
        "  poly stream: {} entries, coords: {} floats",
        io::poly_stream(&mesh).len(),
        io::vert_coords(&mesh).len()
    );

    let prisms = triangle_prisms(1.0, 2, 0.05);
    println!("Sierpinski triangle, depth 2: {} prisms", prisms.len());
    for (i, p) in prisms.iter().take(3).enumerate() {
        println!("  prism {i}: {} verts, {} faces", p.verts.len(), p.faces.len());
    }
}
