//! # Domain Resolver Module / 值域解析模块
//!
//! Turns the domain marker declared on a property parameter into the finite,
//! ordered list of candidate values for that position. Container markers are
//! resolved recursively: the element domain is resolved first and then
//! expanded into every list of each permitted length, in the same nested
//! order the combinator uses for whole argument lists.
//!
//! 将属性参数上声明的值域标记转换为该位置有限且有序的候选值列表。
//! 容器标记会被递归解析：先解析元素值域，再展开为每个允许长度的所有列表，
//! 其顺序与组合器构建整个参数列表时使用的嵌套顺序相同。
//!
//! Domain sizes are computed before anything is materialised, so an oversized
//! declaration fails with `DomainTooLarge` instead of exhausting memory.

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::core::combinator::Combinations;
use crate::core::error::EngineError;
use crate::core::models::{AnnotatedType, Parameter, ParameterSpec, Value, ValueDomain};
use crate::core::suite::{GeneratorFn, Suite};
use crate::infra::invoke::invoke_captured;

/// Resolves parameter domains for the properties of one suite.
pub struct DomainResolver<'a, T> {
    type_name: &'a str,
    generators: &'a HashMap<String, GeneratorFn<T>>,
    max_domain_size: usize,
}

impl<'a, T> DomainResolver<'a, T> {
    pub fn new(suite: &'a Suite<T>, max_domain_size: usize) -> Self {
        Self {
            type_name: suite.type_name(),
            generators: suite.generators(),
            max_domain_size,
        }
    }

    /// Resolves every parameter of a property, in declaration order.
    pub fn resolve_all(&self, parameters: &[Parameter], instance: &mut T) -> Result<Vec<ValueDomain>> {
        parameters
            .iter()
            .map(|parameter| self.resolve_parameter(parameter, &mut *instance))
            .collect()
    }

    /// Resolves one parameter, checking that it carries exactly one marker.
    pub fn resolve_parameter(&self, parameter: &Parameter, instance: &mut T) -> Result<ValueDomain> {
        self.resolve_type(&parameter.name, &parameter.ty, instance)
    }

    fn resolve_type(&self, parameter: &str, ty: &AnnotatedType, instance: &mut T) -> Result<ValueDomain> {
        match ty.markers.as_slice() {
            [] => Err(EngineError::MissingDomainMarker {
                parameter: parameter.to_string(),
            }
            .into()),
            [spec] => self.resolve(parameter, spec, instance),
            markers => Err(EngineError::AmbiguousDomainMarker {
                parameter: parameter.to_string(),
                count: markers.len(),
            }
            .into()),
        }
    }

    /// Resolves a single marker into its value domain.
    ///
    /// `parameter` only labels errors.
    pub fn resolve(&self, parameter: &str, spec: &ParameterSpec, instance: &mut T) -> Result<ValueDomain> {
        match spec {
            ParameterSpec::IntegerRange { min, max } => self.integer_range(parameter, *min, *max),
            ParameterSpec::StringSet { values } => {
                self.check_size(parameter, Some(values.len()))?;
                Ok(values.iter().cloned().map(Value::Str).collect())
            }
            ParameterSpec::ContainerLength {
                min,
                max,
                type_arguments,
            } => {
                let [element_type] = type_arguments.as_slice() else {
                    return Err(EngineError::MalformedContainer {
                        parameter: parameter.to_string(),
                        found: type_arguments.len(),
                    }
                    .into());
                };
                let element = self.resolve_type(parameter, element_type, instance)?;
                self.container(parameter, *min, *max, &element)
            }
            ParameterSpec::GeneratedSample { generator, count } => {
                self.generated(parameter, generator, *count, instance)
            }
        }
    }

    fn integer_range(&self, parameter: &str, min: i64, max: i64) -> Result<ValueDomain> {
        if min > max {
            return Ok(Vec::new());
        }
        let size = usize::try_from(i128::from(max) - i128::from(min) + 1).ok();
        self.check_size(parameter, size)?;
        Ok((min..=max).map(Value::Int).collect())
    }

    fn container(&self, parameter: &str, min: usize, max: usize, element: &[Value]) -> Result<ValueDomain> {
        if min > max {
            return Ok(Vec::new());
        }
        if element.is_empty() {
            // Only the empty list can be built from an empty element domain.
            return Ok(if min == 0 { vec![Value::List(Vec::new())] } else { Vec::new() });
        }

        let size = container_size(element.len(), min, max, self.max_domain_size);
        self.check_size(parameter, size)?;

        let mut domain = Vec::with_capacity(size.unwrap_or_default());
        for length in min..=max {
            if length == 0 {
                domain.push(Value::List(Vec::new()));
                continue;
            }
            domain.extend(Combinations::new(vec![element; length]).map(Value::List));
        }
        Ok(domain)
    }

    fn generated(&self, parameter: &str, generator: &str, count: usize, instance: &mut T) -> Result<ValueDomain> {
        let supplier = self.generators.get(generator).ok_or_else(|| EngineError::UnknownGenerator {
            generator: generator.to_string(),
            type_name: self.type_name.to_string(),
        })?;
        self.check_size(parameter, Some(count))?;

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let value = invoke_captured(|| supplier(&mut *instance))
                .map_err(|raised| raised.into_error())
                .with_context(|| EngineError::GeneratorFailed {
                    generator: generator.to_string(),
                })?;
            values.push(value);
        }
        Ok(values)
    }

    /// `None` means the size overflowed or already exceeded the limit.
    fn check_size(&self, parameter: &str, size: Option<usize>) -> Result<()> {
        match size {
            Some(size) if size <= self.max_domain_size => Ok(()),
            _ => Err(EngineError::DomainTooLarge {
                parameter: parameter.to_string(),
                limit: self.max_domain_size,
            }
            .into()),
        }
    }
}

/// Number of lists of length `min..=max` over `element_count` values, or `None`
/// once the count passes `limit`. Assumes `min <= max` and `element_count > 0`.
fn container_size(element_count: usize, min: usize, max: usize, limit: usize) -> Option<usize> {
    let mut total: usize = 0;
    for length in min..=max {
        let count = element_count.checked_pow(u32::try_from(length).ok()?)?;
        total = total.checked_add(count)?;
        if total > limit {
            return None;
        }
    }
    Some(total)
}
