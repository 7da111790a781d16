use std::fmt;

use naga::ScalarKind;

use crate::geometry::VertexLayout;

use super::reflect::UniformSlot;
use super::{CompiledShader, ShaderError, ShaderStage};

/// Per-vertex inputs the demos resolve by name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Attribute {
    Position,
    Color,
}

impl Attribute {
    /// Attributes in vertex record field order: position first, then color.
    pub const ALL: [Attribute; 2] = [Attribute::Position, Attribute::Color];

    /// Name of the vertex entry point argument carrying this attribute.
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Position => "position",
            Attribute::Color => "color",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transform uniforms a program may declare.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Uniform {
    World,
    View,
    Projection,
}

impl Uniform {
    pub const ALL: [Uniform; 3] = [Uniform::World, Uniform::View, Uniform::Projection];

    /// Name of the `var<uniform>` declaration.
    pub const fn name(self) -> &'static str {
        match self {
            Uniform::World => "world",
            Uniform::View => "view",
            Uniform::Projection => "proj",
        }
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved `@group/@binding` of a uniform.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformLocation {
    pub group: u32,
    pub binding: u32,
}

/// A uniform declared by at least one stage of a linked program.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProgramUniform {
    pub slot: UniformSlot,
    pub visibility: wgpu::ShaderStages,
}

/// Program build options.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ProgramConfig {
    /// Run [`Program::validate`] before creating GPU objects.
    ///
    /// Defaults to on for debug builds only.
    pub validate: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self { validate: cfg!(debug_assertions) }
    }
}

/// A linked vertex + fragment pair.
#[derive(Debug, Clone)]
pub struct Program {
    vertex: CompiledShader,
    fragment: CompiledShader,
    uniforms: Vec<ProgramUniform>,
}

/// Links a vertex and a fragment stage into a [`Program`].
///
/// Every varying the fragment stage reads must be written by the vertex stage
/// with the same type, and uniforms declared by both stages must agree.
pub fn link(vertex: CompiledShader, fragment: CompiledShader) -> Result<Program, ShaderError> {
    if vertex.stage() != ShaderStage::Vertex {
        return Err(link_failed(format!(
            "vertex slot holds a {} shader",
            vertex.stage()
        )));
    }
    if fragment.stage() != ShaderStage::Fragment {
        return Err(link_failed(format!(
            "fragment slot holds a {} shader",
            fragment.stage()
        )));
    }

    let mut problems = Vec::new();
    for input in &fragment.interface().inputs {
        match vertex.interface().output_at(input.location) {
            None => problems.push(format!(
                "fragment input `{}` at location {} is not written by the vertex stage",
                input.label(),
                input.location
            )),
            Some(output) if output.ty != input.ty => problems.push(format!(
                "location {}: vertex stage writes {}, fragment stage reads {}",
                input.location, output.ty, input.ty
            )),
            Some(_) => {}
        }
    }

    let mut uniforms: Vec<ProgramUniform> = vertex
        .interface()
        .uniforms
        .iter()
        .map(|slot| ProgramUniform { slot: slot.clone(), visibility: ShaderStage::Vertex.to_wgpu() })
        .collect();

    for slot in &fragment.interface().uniforms {
        let existing = uniforms
            .iter_mut()
            .find(|u| u.slot.group == slot.group && u.slot.binding == slot.binding);
        match existing {
            Some(u) if u.slot.name == slot.name && u.slot.size == slot.size => {
                u.visibility |= ShaderStage::Fragment.to_wgpu();
            }
            Some(u) => problems.push(format!(
                "@group({}) @binding({}) is `{}` ({} bytes) in the vertex stage but `{}` ({} bytes) in the fragment stage",
                slot.group, slot.binding, u.slot.name, u.slot.size, slot.name, slot.size
            )),
            None => uniforms.push(ProgramUniform {
                slot: slot.clone(),
                visibility: ShaderStage::Fragment.to_wgpu(),
            }),
        }
    }

    if !problems.is_empty() {
        return Err(link_failed(problems.join("\n")));
    }

    log::debug!(
        "linked program {} + {}",
        vertex.entry_point(),
        fragment.entry_point()
    );

    Ok(Program { vertex, fragment, uniforms })
}

impl Program {
    pub fn vertex(&self) -> &CompiledShader {
        &self.vertex
    }

    pub fn fragment(&self) -> &CompiledShader {
        &self.fragment
    }

    pub fn uniforms(&self) -> &[ProgramUniform] {
        &self.uniforms
    }

    /// Location of a named vertex input, or `None` when the vertex stage has no
    /// such argument.
    pub fn attribute_location(&self, attribute: Attribute) -> Option<u32> {
        self.attribute_location_by_name(attribute.name())
    }

    pub fn attribute_location_by_name(&self, name: &str) -> Option<u32> {
        self.vertex.interface().input_named(name).map(|s| s.location)
    }

    /// Like [`attribute_location`](Self::attribute_location) but a missing
    /// attribute is a validation error.
    pub fn require_attribute(&self, attribute: Attribute) -> Result<u32, ShaderError> {
        self.attribute_location(attribute).ok_or_else(|| {
            let log = format!("vertex stage has no attribute named `{attribute}`");
            log::warn!("error validating program: {log}");
            ShaderError::validation(log)
        })
    }

    pub fn uniform_location(&self, uniform: Uniform) -> Option<UniformLocation> {
        self.uniform_by_name(uniform.name()).map(|u| UniformLocation {
            group: u.slot.group,
            binding: u.slot.binding,
        })
    }

    pub(crate) fn uniform_by_name(&self, name: &str) -> Option<&ProgramUniform> {
        self.uniforms.iter().find(|u| u.slot.name == name)
    }

    /// Checks the program against the vertex layout it will be drawn with.
    ///
    /// Every vertex input needs a bound float attribute of the same width at
    /// the same location, and every bound attribute must feed a vertex input.
    /// Named attributes must read their own record field: `position` the
    /// first, `color` the second.
    pub fn validate(&self, layout: &VertexLayout) -> Result<(), ShaderError> {
        let inputs = &self.vertex.interface().inputs;
        let mut problems = Vec::new();

        for input in inputs {
            match layout.binding_at(input.location) {
                None => problems.push(format!(
                    "vertex input `{}` at location {} has no bound attribute",
                    input.label(),
                    input.location
                )),
                Some(b) if input.ty.kind != ScalarKind::Float || b.components != input.ty.components => {
                    problems.push(format!(
                        "vertex input `{}` expects {}, buffer supplies {} floats",
                        input.label(),
                        input.ty,
                        b.components
                    ))
                }
                Some(_) => {}
            }
        }

        for (field, attribute) in Attribute::ALL.into_iter().enumerate().take(layout.field_count()) {
            let Some(location) = self.attribute_location(attribute) else {
                continue;
            };
            let Some(b) = layout.binding_at(location) else {
                continue;
            };
            let expected = layout.field_offset(field);
            if b.offset != expected {
                problems.push(format!(
                    "`{attribute}` at location {location} reads offset {}, its record field starts at {expected}",
                    b.offset
                ));
            }
        }

        for binding in layout.bindings() {
            if !inputs.iter().any(|i| i.location == binding.slot) {
                problems.push(format!(
                    "attribute bound at location {} is not read by the vertex stage",
                    binding.slot
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            let log = problems.join("\n");
            log::warn!("error validating program: {log}");
            Err(ShaderError::validation(log))
        }
    }
}

fn link_failed(log: String) -> ShaderError {
    log::error!("error linking program: {log}");
    ShaderError::link(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Vertex2, Vertex3, VertexLayout};
    use crate::shader::compile;

    const VERTEX: &str = r#"
        @group(0) @binding(0) var<uniform> world: mat4x4<f32>;

        struct VsOut {
            @builtin(position) clip: vec4<f32>,
            @location(0) color: vec3<f32>,
        };

        @vertex
        fn vs_main(@location(0) position: vec3<f32>, @location(1) color: vec3<f32>) -> VsOut {
            var out: VsOut;
            out.clip = world * vec4<f32>(position, 1.0);
            out.color = color;
            return out;
        }
    "#;

    const FRAGMENT: &str = r#"
        @fragment
        fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
            return vec4<f32>(color, 1.0);
        }
    "#;

    fn program() -> Program {
        let vs = compile(ShaderStage::Vertex, VERTEX).unwrap();
        let fs = compile(ShaderStage::Fragment, FRAGMENT).unwrap();
        link(vs, fs).unwrap()
    }

    fn bound_layout(program: &Program) -> VertexLayout {
        let mut layout = VertexLayout::new::<Vertex3>();
        let stride = layout.stride();
        layout
            .bind_attribute(program.require_attribute(Attribute::Position).unwrap(), 3, stride, 0)
            .unwrap();
        layout
            .bind_attribute(program.require_attribute(Attribute::Color).unwrap(), 3, stride, 12)
            .unwrap();
        layout
    }

    // ── link ──────────────────────────────────────────────────────────────

    #[test]
    fn link_resolves_attributes_and_uniforms() {
        let p = program();
        assert_eq!(p.attribute_location(Attribute::Position), Some(0));
        assert_eq!(p.attribute_location(Attribute::Color), Some(1));
        assert_eq!(
            p.uniform_location(Uniform::World),
            Some(UniformLocation { group: 0, binding: 0 })
        );
        assert_eq!(p.uniform_location(Uniform::View), None);
        assert_eq!(p.uniforms()[0].visibility, wgpu::ShaderStages::VERTEX);
    }

    #[test]
    fn link_rejects_swapped_stages() {
        let vs = compile(ShaderStage::Vertex, VERTEX).unwrap();
        let fs = compile(ShaderStage::Fragment, FRAGMENT).unwrap();
        let err = link(fs, vs).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
    }

    #[test]
    fn link_rejects_unwritten_varying() {
        let fs = r#"
            @fragment
            fn fs_main(@location(3) tint: vec3<f32>) -> @location(0) vec4<f32> {
                return vec4<f32>(tint, 1.0);
            }
        "#;
        let vs = compile(ShaderStage::Vertex, VERTEX).unwrap();
        let fs = compile(ShaderStage::Fragment, fs).unwrap();
        let err = link(vs, fs).unwrap_err();
        assert!(err.log().contains("`tint` at location 3"));
    }

    #[test]
    fn link_rejects_varying_type_mismatch() {
        let fs = r#"
            @fragment
            fn fs_main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
                return color;
            }
        "#;
        let vs = compile(ShaderStage::Vertex, VERTEX).unwrap();
        let fs = compile(ShaderStage::Fragment, fs).unwrap();
        let err = link(vs, fs).unwrap_err();
        assert!(err.log().contains("vec3<f32>"));
    }

    #[test]
    fn link_merges_shared_uniform_visibility() {
        let fs = r#"
            @group(0) @binding(0) var<uniform> world: mat4x4<f32>;
            @fragment
            fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
                return world * vec4<f32>(color, 1.0);
            }
        "#;
        let vs = compile(ShaderStage::Vertex, VERTEX).unwrap();
        let fs = compile(ShaderStage::Fragment, fs).unwrap();
        let p = link(vs, fs).unwrap();
        assert_eq!(p.uniforms().len(), 1);
        assert_eq!(
            p.uniforms()[0].visibility,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT
        );
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn validate_accepts_matching_layout() {
        let p = program();
        let layout = bound_layout(&p);
        assert!(p.validate(&layout).is_ok());
    }

    #[test]
    fn misspelled_attribute_is_a_validation_error() {
        let vs = VERTEX.replace("position: vec3<f32>", "vertPosition: vec3<f32>")
            .replace("vec4<f32>(position", "vec4<f32>(vertPosition");
        let vs = compile(ShaderStage::Vertex, &vs).unwrap();
        let fs = compile(ShaderStage::Fragment, FRAGMENT).unwrap();
        let p = link(vs, fs).unwrap();

        assert_eq!(p.attribute_location(Attribute::Position), None);
        let err = p.require_attribute(Attribute::Position).unwrap_err();
        assert!(matches!(err, ShaderError::Validation { .. }));
        assert!(err.log().contains("`position`"));
    }

    #[test]
    fn validate_rejects_unbound_input() {
        let p = program();
        let mut layout = VertexLayout::new::<Vertex3>();
        let stride = layout.stride();
        layout.bind_attribute(0, 3, stride, 0).unwrap();
        let err = p.validate(&layout).unwrap_err();
        assert!(err.log().contains("`color` at location 1 has no bound attribute"));
    }

    #[test]
    fn validate_rejects_width_mismatch() {
        let p = program();
        let mut layout = VertexLayout::new::<Vertex2>();
        let stride = layout.stride();
        layout.bind_attribute(0, 2, stride, 0).unwrap();
        layout.bind_attribute(1, 3, stride, 8).unwrap();
        let err = p.validate(&layout).unwrap_err();
        assert!(err.log().contains("expects vec3<f32>, buffer supplies 2 floats"));
    }

    #[test]
    fn validate_rejects_attribute_without_input() {
        let p = program();
        let mut layout = VertexLayout::new::<Vertex3>();
        let stride = layout.stride();
        layout.bind_attribute(5, 3, stride, 0).unwrap();
        layout.bind_attribute(1, 3, stride, 12).unwrap();
        let err = p.validate(&layout).unwrap_err();
        assert!(err.log().contains("location 5 is not read"));
        assert!(err.log().contains("`position` at location 0 has no bound attribute"));
    }

    #[test]
    fn validate_rejects_swapped_fields_of_equal_width() {
        let p = program();
        let mut layout = VertexLayout::new::<Vertex3>();
        let stride = layout.stride();
        // Both fields are 3 floats, so each binding is valid on its own.
        layout.bind_attribute(0, 3, stride, 12).unwrap();
        layout.bind_attribute(1, 3, stride, 0).unwrap();

        let err = p.validate(&layout).unwrap_err();
        assert!(matches!(err, ShaderError::Validation { .. }));
        assert!(err.log().contains("`position` at location 0 reads offset 12"));
        assert!(err.log().contains("`color` at location 1 reads offset 0"));
    }}
