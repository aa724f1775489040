// Opaque wrappers around raw GL object names.
//
// Every handle is owned by exactly one renderer. None of them are Clone or
// Copy, so the only way to give one back is `release`, which consumes it.

use crate::render::backend::GraphicsBackend;
use gl::types::GLuint;

macro_rules! gl_handle {
    ($(#[$meta:meta])* $name:ident, $delete:ident) => {
        $(#[$meta])*
        #[derive(Debug, PartialEq, Eq, Hash)]
        pub struct $name(GLuint);

        impl $name {
            pub fn from_raw(id: GLuint) -> Self {
                Self(id)
            }

            pub fn raw(&self) -> GLuint {
                self.0
            }

            pub fn release<B: GraphicsBackend + ?Sized>(self, backend: &mut B) {
                backend.$delete(self);
            }
        }
    };
}

gl_handle!(
    /// A compiled (or failed) shader stage object.
    ShaderHandle,
    delete_shader
);

gl_handle!(
    /// A program object the shader stages get linked into.
    ProgramHandle,
    delete_program
);

gl_handle!(BufferHandle, delete_buffer);

gl_handle!(VertexArrayHandle, delete_vertex_array);
