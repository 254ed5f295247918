use std::fmt::Write as _;

/// Scalar/vector/matrix kinds supported by the uniform block.
///
/// `Bool` is stored as `u32`; WGSL does not allow `bool` in the uniform
/// address space.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UniformKind {
    Float,
    Int,
    Bool,
    Vec2,
    Vec3,
    Vec4,
    Mat4,
}

impl UniformKind {
    /// Size in bytes.
    pub const fn size(self) -> usize {
        match self {
            UniformKind::Float | UniformKind::Int | UniformKind::Bool => 4,
            UniformKind::Vec2 => 8,
            UniformKind::Vec3 => 12,
            UniformKind::Vec4 => 16,
            UniformKind::Mat4 => 64,
        }
    }

    /// Alignment in bytes (WGSL `AlignOf`).
    pub const fn align(self) -> usize {
        match self {
            UniformKind::Float | UniformKind::Int | UniformKind::Bool => 4,
            UniformKind::Vec2 => 8,
            UniformKind::Vec3 | UniformKind::Vec4 | UniformKind::Mat4 => 16,
        }
    }

    pub const fn wgsl_type(self) -> &'static str {
        match self {
            UniformKind::Float => "f32",
            UniformKind::Int => "i32",
            UniformKind::Bool => "u32",
            UniformKind::Vec2 => "vec2<f32>",
            UniformKind::Vec3 => "vec3<f32>",
            UniformKind::Vec4 => "vec4<f32>",
            UniformKind::Mat4 => "mat4x4<f32>",
        }
    }
}

/// One member of a uniform block.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UniformField {
    pub name: &'static str,
    pub kind: UniformKind,
    /// Byte offset from the start of the block.
    pub offset: usize,
}

/// Ordered uniform block description.
///
/// Offsets follow the WGSL rule `offset = round_up(align, previous_end)`.
/// The total size is rounded up to 16 bytes (the struct alignment of any
/// block holding a vec3/vec4/mat4, and the minimum uniform binding granule).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformLayout {
    fields: Vec<UniformField>,
    end: usize,
}

impl UniformLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, name: &'static str, kind: UniformKind) -> Self {
        self.push(name, kind);
        self
    }

    /// Appends a member. Names must be unique.
    pub fn push(&mut self, name: &'static str, kind: UniformKind) {
        debug_assert!(self.field(name).is_none(), "duplicate uniform `{name}`");

        let offset = align_up(self.end, kind.align());
        self.fields.push(UniformField { name, kind, offset });
        self.end = offset + kind.size();
    }

    pub fn field(&self, name: &str) -> Option<&UniformField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[UniformField] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Block size in bytes (never zero).
    pub fn size(&self) -> usize {
        align_up(self.end, 16).max(16)
    }

    /// Renders the WGSL `struct` declaration for this layout.
    pub fn wgsl_struct(&self, struct_name: &str) -> String {
        let mut out = format!("struct {struct_name} {{\n");
        for f in &self.fields {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "    {}: {},", f.name, f.kind.wgsl_type());
        }
        out.push_str("}\n");
        out
    }
}

#[inline]
fn align_up(value: usize, align: usize) -> usize {
    value.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(layout: &UniformLayout, name: &str) -> usize {
        layout.field(name).map(|f| f.offset).unwrap()
    }

    #[test]
    fn empty_layout_has_min_size() {
        let l = UniformLayout::new();
        assert!(l.is_empty());
        assert_eq!(l.size(), 16);
    }

    #[test]
    fn scalars_pack_tightly() {
        let l = UniformLayout::new()
            .with("a", UniformKind::Float)
            .with("b", UniformKind::Int)
            .with("c", UniformKind::Bool);
        assert_eq!(offset(&l, "a"), 0);
        assert_eq!(offset(&l, "b"), 4);
        assert_eq!(offset(&l, "c"), 8);
        assert_eq!(l.size(), 16);
    }

    #[test]
    fn vec3_aligns_to_16_and_shares_tail() {
        let l = UniformLayout::new()
            .with("s", UniformKind::Float)
            .with("v", UniformKind::Vec3)
            .with("t", UniformKind::Float);
        assert_eq!(offset(&l, "v"), 16);
        // A scalar fits in the vec3's trailing 4 bytes.
        assert_eq!(offset(&l, "t"), 28);
        assert_eq!(l.size(), 32);
    }

    #[test]
    fn vec2_aligns_to_8() {
        let l = UniformLayout::new()
            .with("s", UniformKind::Float)
            .with("v", UniformKind::Vec2);
        assert_eq!(offset(&l, "v"), 8);
    }

    #[test]
    fn mat4_after_scalar() {
        let l = UniformLayout::new()
            .with("s", UniformKind::Float)
            .with("m", UniformKind::Mat4)
            .with("v", UniformKind::Vec4);
        assert_eq!(offset(&l, "m"), 16);
        assert_eq!(offset(&l, "v"), 80);
        assert_eq!(l.size(), 96);
    }

    #[test]
    fn wgsl_struct_lists_members_in_order() {
        let l = UniformLayout::new()
            .with("u_power", UniformKind::Float)
            .with("u_julia", UniformKind::Bool);
        let src = l.wgsl_struct("Uniforms");
        assert_eq!(src, "struct Uniforms {\n    u_power: f32,\n    u_julia: u32,\n}\n");
    }

    #[test]
    fn unknown_field_is_none() {
        let l = UniformLayout::new().with("a", UniformKind::Float);
        assert!(l.field("b").is_none());
    }
}
