use crate::render::backend::{GraphicsBackend, Primitive};
use crate::render::handles::{BufferHandle, VertexArrayHandle};
use std::mem;

pub const POSITION_COMPONENTS: i32 = 3;
pub const TRIANGLE_FLOATS: usize = 9;

#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; TRIANGLE_FLOATS] = [
    -0.5, -0.5, 0.0, // left
     0.5, -0.5, 0.0, // right
     0.0,  0.5, 0.0, // top
];

/// A vertex array plus the buffer backing its single position attribute.
/// The contents never change after upload.
#[derive(Debug)]
pub struct StaticMesh {
    vao: VertexArrayHandle,
    vbo: BufferHandle,
    vertex_count: i32,
}

impl StaticMesh {
    pub fn upload<B: GraphicsBackend + ?Sized>(backend: &mut B, positions: &[f32]) -> Self {
        let vao = backend.create_vertex_array();
        let vbo = backend.create_buffer();

        backend.bind_vertex_array(Some(&vao));
        backend.bind_array_buffer(Some(&vbo));
        backend.buffer_data_static(bytemuck::cast_slice(positions));

        let stride = POSITION_COMPONENTS * mem::size_of::<f32>() as i32;
        backend.vertex_attrib_pointer_f32(0, POSITION_COMPONENTS, stride, 0);
        backend.enable_vertex_attrib_array(0);

        // The attribute already recorded the buffer, so both can be unbound.
        backend.bind_array_buffer(None);
        backend.bind_vertex_array(None);

        Self {
            vao,
            vbo,
            vertex_count: (positions.len() / POSITION_COMPONENTS as usize) as i32,
        }
    }

    pub fn vertex_buffer(&self) -> &BufferHandle {
        &self.vbo
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    pub fn draw<B: GraphicsBackend + ?Sized>(&self, backend: &mut B) {
        backend.bind_vertex_array(Some(&self.vao));
        backend.draw_arrays(Primitive::Triangles, 0, self.vertex_count);
        backend.bind_vertex_array(None);
    }

    pub fn release<B: GraphicsBackend + ?Sized>(self, backend: &mut B) {
        self.vao.release(backend);
        self.vbo.release(backend);
    }
}
