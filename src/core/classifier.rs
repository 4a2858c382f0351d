//! # Method Classifier Module / 方法分类模块
//!
//! Selects the declared callables that carry a given role, checks that each
//! one is bound the way its role requires, enforces name uniqueness across the
//! lifecycle roles of one run, and returns the selection sorted by name. The
//! sorted order is the execution order.
//!
//! 选择带有指定角色的已声明可调用对象，检查每个对象的绑定方式是否符合其角色要求，
//! 在一次运行的各生命周期角色之间强制名称唯一，并返回按名称排序的结果。
//! 排序后的顺序即为执行顺序。

use anyhow::Result;
use std::collections::HashSet;

use crate::core::error::EngineError;
use crate::core::models::MethodRole;
use crate::core::suite::{MethodDecl, PropertyDecl};

/// Names already claimed during one classification pass.
///
/// The caller creates one per run and threads it through every `classify`
/// call of that run.
#[derive(Debug, Default, Clone)]
pub struct SeenNames {
    names: HashSet<String>,
}

impl SeenNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Claims `name`, failing if it was already claimed in this pass.
    pub fn claim(&mut self, name: &str) -> Result<()> {
        if !self.names.insert(name.to_string()) {
            return Err(EngineError::DuplicateRoleBinding {
                name: name.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Returns the callables tagged with `role`, sorted by name.
///
/// # Arguments
/// * `methods` - Every callable declared on the type
/// * `role` - The role to select
/// * `seen` - Names claimed so far in this run; updated in place
///
/// # Errors
/// * `RoleMismatch` if a selected callable's binding does not fit the role
/// * `DuplicateRoleBinding` if a selected name was already claimed
pub fn classify<'a, T>(
    methods: &'a [MethodDecl<T>],
    role: MethodRole,
    seen: &mut SeenNames,
) -> Result<Vec<&'a MethodDecl<T>>> {
    let mut selected = Vec::new();

    for method in methods.iter().filter(|m| m.role == role) {
        if method.binding.is_static() != role.is_static() {
            return Err(EngineError::RoleMismatch {
                name: method.name.clone(),
                role,
                found: method.binding.kind(),
            }
            .into());
        }
        seen.claim(&method.name)?;
        selected.push(method);
    }

    selected.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(selected)
}

/// Returns the declared properties sorted by name.
///
/// Properties live in their own namespace: lifecycle names are not checked
/// against them, but two properties may not share a name. A plain callable
/// tagged `Property` has no parameter list or boolean result and is rejected.
pub fn classify_properties<'a, T>(
    methods: &[MethodDecl<T>],
    properties: &'a [PropertyDecl<T>],
) -> Result<Vec<&'a PropertyDecl<T>>> {
    if let Some(method) = methods.iter().find(|m| m.role == MethodRole::Property) {
        return Err(EngineError::RoleMismatch {
            name: method.name.clone(),
            role: MethodRole::Property,
            found: method.binding.kind(),
        }
        .into());
    }

    let mut seen = SeenNames::new();
    for property in properties {
        seen.claim(&property.name)?;
    }

    let mut sorted: Vec<_> = properties.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sorted)
}
