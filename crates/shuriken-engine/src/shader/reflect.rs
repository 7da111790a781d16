//! Stage interface reflection over a parsed WGSL module.

use std::fmt;

use naga::{AddressSpace, Binding, Handle, Module, ScalarKind, Type, TypeInner, VectorSize};

/// Shape of a value crossing a stage boundary (vertex input, varying, fragment input).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct IoType {
    pub kind: ScalarKind,
    pub components: u32,
}

impl IoType {
    pub const fn float(components: u32) -> Self {
        Self { kind: ScalarKind::Float, components }
    }
}

impl fmt::Display for IoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scalar = match self.kind {
            ScalarKind::Float => "f32",
            ScalarKind::Sint => "i32",
            ScalarKind::Uint => "u32",
            ScalarKind::Bool => "bool",
            _ => "abstract",
        };
        if self.components == 1 {
            f.write_str(scalar)
        } else {
            write!(f, "vec{}<{}>", self.components, scalar)
        }
    }
}

/// One `@location(n)` slot of an entry point.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IoSlot {
    pub name: Option<String>,
    pub location: u32,
    pub ty: IoType,
}

impl IoSlot {
    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// One `var<uniform>` declaration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UniformSlot {
    pub name: String,
    pub group: u32,
    pub binding: u32,
    /// Size of the declared type in bytes.
    pub size: u32,
}

/// Everything a stage reads from or hands to its neighbours.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ShaderInterface {
    pub inputs: Vec<IoSlot>,
    pub outputs: Vec<IoSlot>,
    pub uniforms: Vec<UniformSlot>,
}

impl ShaderInterface {
    pub fn input_named(&self, name: &str) -> Option<&IoSlot> {
        self.inputs.iter().find(|s| s.name.as_deref() == Some(name))
    }

    pub fn output_at(&self, location: u32) -> Option<&IoSlot> {
        self.outputs.iter().find(|s| s.location == location)
    }
}

pub(crate) fn reflect(module: &Module, entry: &naga::EntryPoint) -> Result<ShaderInterface, String> {
    let mut interface = ShaderInterface::default();

    for arg in &entry.function.arguments {
        collect_io(module, arg.name.as_deref(), arg.ty, arg.binding.as_ref(), &mut interface.inputs)?;
    }

    if let Some(result) = &entry.function.result {
        collect_io(module, None, result.ty, result.binding.as_ref(), &mut interface.outputs)?;
    }

    for (_, var) in module.global_variables.iter() {
        if var.space != AddressSpace::Uniform {
            continue;
        }
        let Some(binding) = &var.binding else { continue };
        interface.uniforms.push(UniformSlot {
            name: var.name.clone().unwrap_or_default(),
            group: binding.group,
            binding: binding.binding,
            size: module.types[var.ty].inner.size(module.to_ctx()),
        });
    }

    interface.inputs.sort_by_key(|s| s.location);
    interface.outputs.sort_by_key(|s| s.location);
    interface.uniforms.sort_by_key(|u| (u.group, u.binding));

    Ok(interface)
}

fn collect_io(
    module: &Module,
    name: Option<&str>,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut Vec<IoSlot>,
) -> Result<(), String> {
    match binding {
        Some(Binding::BuiltIn(_)) => Ok(()),
        Some(Binding::Location { location, .. }) => {
            out.push(IoSlot {
                name: name.map(str::to_owned),
                location: *location,
                ty: io_type(module, ty)?,
            });
            Ok(())
        }
        None => match &module.types[ty].inner {
            TypeInner::Struct { members, .. } => {
                for member in members {
                    collect_io(module, member.name.as_deref(), member.ty, member.binding.as_ref(), out)?;
                }
                Ok(())
            }
            other => Err(format!(
                "`{}` has no binding and is not a struct ({other:?})",
                name.unwrap_or("<unnamed>")
            )),
        },
    }
}

fn io_type(module: &Module, ty: Handle<Type>) -> Result<IoType, String> {
    match &module.types[ty].inner {
        TypeInner::Scalar(scalar) => Ok(IoType { kind: scalar.kind, components: 1 }),
        TypeInner::Vector { size, scalar } => {
            let components = match size {
                VectorSize::Bi => 2,
                VectorSize::Tri => 3,
                VectorSize::Quad => 4,
            };
            Ok(IoType { kind: scalar.kind, components })
        }
        other => Err(format!("unsupported stage interface type {other:?}")),
    }
}
