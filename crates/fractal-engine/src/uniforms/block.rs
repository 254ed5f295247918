use std::collections::HashSet;

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::layout::{UniformKind, UniformLayout};
use super::UniformSink;

/// CPU-side uniform buffer contents addressed by member name.
///
/// Writes to names missing from the layout, or with the wrong kind, are
/// dropped. Each offending name is reported once at `warn` level.
#[derive(Debug, Clone)]
pub struct UniformBlock {
    layout: UniformLayout,
    bytes: Vec<u8>,
    warned: HashSet<String>,
}

impl UniformBlock {
    /// Creates a zero-initialized block for `layout`.
    pub fn new(layout: UniformLayout) -> Self {
        let bytes = vec![0; layout.size()];
        Self {
            layout,
            bytes,
            warned: HashSet::new(),
        }
    }

    pub fn layout(&self) -> &UniformLayout {
        &self.layout
    }

    /// Raw contents, ready for `Queue::write_buffer`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes currently stored for `name`, if it is a member.
    pub fn member_bytes(&self, name: &str) -> Option<&[u8]> {
        let f = self.layout.field(name)?;
        self.bytes.get(f.offset..f.offset + f.kind.size())
    }

    fn write(&mut self, name: &str, kind: UniformKind, data: &[u8]) {
        let field = self.layout.field(name).copied();
        match field {
            Some(f) if f.kind == kind => {
                self.bytes[f.offset..f.offset + data.len()].copy_from_slice(data);
            }
            Some(f) => {
                if self.warned.insert(name.to_string()) {
                    log::warn!(
                        "uniform `{name}` is declared as {:?}, got {:?}; ignored",
                        f.kind,
                        kind
                    );
                }
            }
            None => {
                if self.warned.insert(name.to_string()) {
                    log::warn!("unknown uniform `{name}`; ignored");
                }
            }
        }
    }
}

impl UniformSink for UniformBlock {
    fn set_float(&mut self, name: &str, value: f32) {
        self.write(name, UniformKind::Float, bytemuck::bytes_of(&value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.write(name, UniformKind::Int, bytemuck::bytes_of(&value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        let value = u32::from(value);
        self.write(name, UniformKind::Bool, bytemuck::bytes_of(&value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.write(name, UniformKind::Vec2, bytemuck::cast_slice(&value.to_array()));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.write(name, UniformKind::Vec3, bytemuck::cast_slice(&value.to_array()));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.write(name, UniformKind::Vec4, bytemuck::cast_slice(&value.to_array()));
    }

    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.write(name, UniformKind::Mat4, bytemuck::cast_slice(&value.to_cols_array()));
    }
}
