use crate::render::backend::{ImmediateBackend, Primitive};
use crate::render::renderer::RenderFrame;

pub struct LegacyVertex {
    pub color: [f32; 3],
    pub position: [f32; 2],
}

pub const LEGACY_TRIANGLE: [LegacyVertex; 3] = [
    LegacyVertex { color: [0.929, 0.439, 0.176], position: [0.0, 0.5] },
    LegacyVertex { color: [0.929, 0.816, 0.176], position: [-0.5, -0.5] },
    LegacyVertex { color: [0.929, 0.176, 0.29], position: [0.5, -0.5] },
];

/// Fixed-function triangle, one color per corner. No shaders, no buffers.
pub struct LegacyRenderer<B: ImmediateBackend> {
    backend: B,
    clear_color: [f32; 4],
}

impl<B: ImmediateBackend> LegacyRenderer<B> {
    pub fn new(backend: B, clear_color: [f32; 4]) -> Self {
        Self { backend, clear_color }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ImmediateBackend> RenderFrame for LegacyRenderer<B> {
    fn render_frame(&mut self) {
        self.backend.clear(self.clear_color);

        self.backend.begin(Primitive::Triangles);
        for vertex in &LEGACY_TRIANGLE {
            let [r, g, b] = vertex.color;
            let [x, y] = vertex.position;
            self.backend.color3(r, g, b);
            self.backend.vertex2(x, y);
        }
        self.backend.end();
    }
}
