use crate::error_return;
use anyhow::anyhow;
use anyhow::bail;
use anyhow::Error;
use anyhow::Result;
use glam::Mat4;
use glow::Context;
use glow::HasContext;
use glow::Program;
use glow::UniformLocation;
use log::info;
use std::collections::HashMap;
use std::rc::Rc;

pub const SHAPE_VERTEX_SHADER: &str = include_str!("./shaders/shape.vert");
pub const SHAPE_FRAGMENT_SHADER: &str = include_str!("./shaders/shape.frag");

const GLSL_VERSION: &str = "330 core";

pub struct Shader {
    pub name: String,
    pub program: Program,
    pub uniforms: HashMap<String, UniformLocation>,

    gl: Rc<Context>,
}

impl Shader {
    pub fn new(gl: &Rc<Context>, name: &str, vertex_shader_source: &str, fragment_shader_source: &str) -> Result<Self> {
        info!("Creating shader {} (VS {} bytes, FS {} bytes)", name, vertex_shader_source.len(), fragment_shader_source.len());

        unsafe {
            info!("Compiling vertex shader");

            let vertex_shader = gl.create_shader(glow::VERTEX_SHADER).map_err(Error::msg)?;
            gl.shader_source(vertex_shader, &preprocess_shader_source(vertex_shader_source));
            gl.compile_shader(vertex_shader);

            if !gl.get_shader_compile_status(vertex_shader) {
                bail!("Failed to compile vertex shader: {}", gl.get_shader_info_log(vertex_shader));
            }

            info!("Compiling fragment shader");

            let fragment_shader = gl.create_shader(glow::FRAGMENT_SHADER).map_err(Error::msg)?;
            gl.shader_source(fragment_shader, &preprocess_shader_source(fragment_shader_source));
            gl.compile_shader(fragment_shader);

            if !gl.get_shader_compile_status(fragment_shader) {
                bail!("Failed to compile fragment shader: {}", gl.get_shader_info_log(fragment_shader));
            }

            info!("Linking program");

            let program = gl.create_program().map_err(Error::msg)?;
            gl.attach_shader(program, vertex_shader);
            gl.attach_shader(program, fragment_shader);
            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                bail!("Failed to link program: {}", gl.get_program_info_log(program));
            }

            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);

            let mut uniforms = HashMap::new();
            for index in 0..gl.get_active_uniforms(program) {
                let uniform = gl.get_active_uniform(program, index).ok_or_else(|| anyhow!("Uniform {} not found", index))?;
                let location = gl.get_uniform_location(program, &uniform.name).ok_or_else(|| anyhow!("Uniform location not found"))?;
                info!("Uniform {} located", uniform.name);

                uniforms.insert(uniform.name, location);
            }

            Ok(Shader { name: name.to_string(), program, uniforms, gl: gl.clone() })
        }
    }

    pub fn set_uniform_mat4(&self, name: &str, matrix: &Mat4) {
        let location = match self.uniforms.get(name) {
            Some(location) => location,
            None => error_return!("Uniform parameter {} not found in shader {}", name, self.name),
        };

        unsafe {
            self.gl.uniform_matrix_4_f32_slice(Some(location), false, &matrix.to_cols_array());
        }
    }

    pub fn activate(&self) {
        unsafe {
            self.gl.use_program(Some(self.program));
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}

fn preprocess_shader_source(source: &str) -> String {
    source.replace("<version>", GLSL_VERSION)
}
