use super::camera::Camera;
use super::shader::Shader;
use super::shader::*;
use super::shape::Shape;
use super::shape::VERTEX_SIZE;
use anyhow::Error;
use anyhow::Result;
use glam::Vec2;
use glam::Vec4;
use glow::Buffer;
use glow::Context;
use glow::HasContext;
use glow::VertexArray;
use log::info;
use std::rc::Rc;
use std::slice;

pub struct RendererContext {
    pub camera: Camera,

    gl: Rc<Context>,
    shape_shader: Shader,
    shape_buffer_vao: VertexArray,
    shape_buffer_vbo: Buffer,
    shape_buffer_ebo: Buffer,
    batch: ShapeBatch,
    camera_dirty: bool,
}

/// CPU side queue of shape geometry, uploaded and drawn in one call on flush.
#[derive(Debug, Default)]
pub struct ShapeBatch {
    pub vertices: Vec<u32>,
    pub indices: Vec<u32>,
}

impl RendererContext {
    pub fn new(gl: Context) -> Result<Self> {
        info!("Renderer initialization");

        unsafe {
            let gl = Rc::new(gl);
            let shape_shader = Shader::new(&gl, "shape", SHAPE_VERTEX_SHADER, SHAPE_FRAGMENT_SHADER)?;

            let shape_buffer_vao = gl.create_vertex_array().map_err(Error::msg)?;
            let shape_buffer_vbo = gl.create_buffer().map_err(Error::msg)?;
            let shape_buffer_ebo = gl.create_buffer().map_err(Error::msg)?;

            let mut context = Self {
                camera: Camera::new(Vec2::ZERO, Vec2::ZERO),
                gl,

                shape_shader,
                shape_buffer_vao,
                shape_buffer_vbo,
                shape_buffer_ebo,
                batch: Default::default(),
                camera_dirty: true,
            };
            context.init();

            Ok(context)
        }
    }

    fn init(&mut self) {
        unsafe {
            self.gl.enable(glow::BLEND);
            self.gl.blend_func(glow::ONE, glow::ONE_MINUS_SRC_ALPHA);
            self.set_clear_color(Vec4::new(0.0, 0.0, 0.0, 1.0));

            let stride = (VERTEX_SIZE * 4) as i32;

            self.gl.bind_vertex_array(Some(self.shape_buffer_vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.shape_buffer_vbo));
            self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.shape_buffer_ebo));

            self.gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, stride, 0);
            self.gl.vertex_attrib_pointer_f32(1, 4, glow::UNSIGNED_BYTE, true, stride, 2 * 4);

            self.gl.enable_vertex_attrib_array(0);
            self.gl.enable_vertex_attrib_array(1);
        }
    }

    pub fn begin_frame(&mut self) {
        unsafe {
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    pub fn end_frame(&mut self) {
        self.flush_buffer();

        unsafe {
            self.gl.flush();
        }
    }

    pub fn draw_shape(&mut self, shape: &Shape) {
        self.batch.push(shape);
    }

    pub fn flush_buffer(&mut self) {
        if self.batch.is_empty() {
            return;
        }

        unsafe {
            if self.camera_dirty {
                self.shape_shader.activate();
                self.shape_shader.set_uniform_mat4("proj", &self.camera.get_projection_matrix());
                self.shape_shader.set_uniform_mat4("view", &self.camera.get_view_matrix());

                self.camera_dirty = false;
            }

            self.gl.bind_vertex_array(Some(self.shape_buffer_vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.shape_buffer_vbo));
            self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.shape_buffer_ebo));

            let vertices_u8 = slice::from_raw_parts(self.batch.vertices.as_ptr() as *const u8, self.batch.vertices.len() * 4);
            let indices_u8 = slice::from_raw_parts(self.batch.indices.as_ptr() as *const u8, self.batch.indices.len() * 4);

            self.gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, vertices_u8, glow::DYNAMIC_DRAW);
            self.gl.buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, indices_u8, glow::DYNAMIC_DRAW);

            self.gl.draw_elements(glow::TRIANGLES, self.batch.indices.len() as i32, glow::UNSIGNED_INT, 0);
        }

        self.batch.clear();
    }

    pub fn set_viewport(&mut self, size: Vec2) {
        unsafe {
            self.gl.viewport(0, 0, size.x as i32, size.y as i32);
        }

        self.camera.size = size;
        self.camera_dirty = true;
    }

    pub fn set_clear_color(&mut self, color: Vec4) {
        unsafe {
            self.gl.clear_color(color.x, color.y, color.z, color.w);
        }
    }
}

impl Drop for RendererContext {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.shape_buffer_vao);
            self.gl.delete_buffer(self.shape_buffer_vbo);
            self.gl.delete_buffer(self.shape_buffer_ebo);
        }
    }
}

impl ShapeBatch {
    /// Appends the shape, shifting its indices past the vertices already queued.
    pub fn push(&mut self, shape: &Shape) {
        let base = (self.vertices.len() / VERTEX_SIZE) as u32;

        self.vertices.extend_from_slice(&shape.vertices);
        self.indices.extend(shape.indices.iter().map(|index| base + index));
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_offsets_indices_of_following_shapes() {
        let mut batch = ShapeBatch::default();
        let line = Shape::new_line(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0, Vec4::ONE);
        let disc = Shape::new_disc(Vec2::ZERO, 1.0, Some(3), Vec4::ONE);

        batch.push(&line);
        batch.push(&disc);

        assert_eq!(batch.vertices.len(), (4 + 4) * VERTEX_SIZE);
        assert_eq!(&batch.indices[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&batch.indices[6..], &[4, 5, 6, 4, 6, 7, 4, 7, 5]);
    }

    #[test]
    fn cleared_batch_is_empty() {
        let mut batch = ShapeBatch::default();
        assert!(batch.is_empty());

        batch.push(&Shape::new_disc(Vec2::ZERO, 2.0, None, Vec4::ONE));
        assert!(!batch.is_empty());

        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.vertices.is_empty());
    }
}
