//! # Suite Declaration Module / 套件声明模块
//!
//! A [`Suite`] is the type-level declaration the engine works from: how to build
//! an instance, which callables play which lifecycle role, which properties to
//! check with which parameter domains, and which generators those domains may
//! pull from. It is plain data assembled once with builder calls, and the
//! classifier reads it in place of runtime reflection.
//!
//! [`Suite`] 是引擎工作所依据的类型级声明：如何构建实例、哪些可调用对象
//! 扮演哪种生命周期角色、使用哪些参数域检查哪些属性，以及这些参数域
//! 可以从哪些生成器中取值。它是通过构建器调用一次性组装的普通数据，
//! 分类器读取它来代替运行时反射。

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::fmt;

use crate::core::models::{MethodRole, Parameter, Value};

/// A callable that needs no instance.
pub type StaticFn = Box<dyn Fn() -> Result<()>>;
/// A callable bound to an instance of the suite's type.
pub type InstanceFn<T> = Box<dyn Fn(&mut T) -> Result<()>>;
/// A property body: `Ok(true)` holds, `Ok(false)`, `Err` or a panic falsifies.
pub type PropertyFn<T> = Box<dyn Fn(&mut T, &[Value]) -> Result<bool>>;
/// A zero-argument value supplier invoked on the property instance.
pub type GeneratorFn<T> = Box<dyn Fn(&mut T) -> Result<Value>>;
/// Builds a fresh instance of the suite's type.
pub type ConstructorFn<T> = Box<dyn Fn() -> Result<T>>;

/// How a declared callable is bound: statically or to an instance.
pub enum Binding<T> {
    Static(StaticFn),
    Instance(InstanceFn<T>),
}

impl<T> Binding<T> {
    pub fn of_static<F>(f: F) -> Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        Binding::Static(Box::new(f))
    }

    pub fn of_instance<F>(f: F) -> Self
    where
        F: Fn(&mut T) -> Result<()> + 'static,
    {
        Binding::Instance(Box::new(f))
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Binding::Static(_))
    }

    pub fn kind(&self) -> &'static str {
        if self.is_static() { "a static" } else { "an instance" }
    }

    pub(crate) fn call(&self, instance: Option<&mut T>) -> Result<()> {
        match (self, instance) {
            (Binding::Static(f), _) => f(),
            (Binding::Instance(f), Some(target)) => f(target),
            (Binding::Instance(_), None) => {
                bail!("instance-bound callable invoked without an instance")
            }
        }
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Static(_) => f.write_str("Binding::Static"),
            Binding::Instance(_) => f.write_str("Binding::Instance"),
        }
    }
}

/// A lifecycle or test callable together with its role tag.
pub struct MethodDecl<T> {
    pub name: String,
    pub role: MethodRole,
    pub binding: Binding<T>,
}

impl<T> fmt::Debug for MethodDecl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDecl")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("binding", &self.binding)
            .finish()
    }
}

/// A property callable with its declared parameters.
pub struct PropertyDecl<T> {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: PropertyFn<T>,
}

impl<T> fmt::Debug for PropertyDecl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDecl")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// The declaration of one type under test.
///
/// ```
/// use unitcheck::core::models::{Parameter, ParameterSpec};
/// use unitcheck::core::suite::Suite;
///
/// struct Calc;
///
/// let suite = Suite::new("Calc", || Ok(Calc))
///     .test("adds", |_calc| {
///         anyhow::ensure!(1 + 1 == 2);
///         Ok(())
///     })
///     .property(
///         "add",
///         vec![
///             Parameter::new("a", ParameterSpec::int_range(1, 2)),
///             Parameter::new("b", ParameterSpec::int_range(10, 11)),
///         ],
///         |_calc, args| Ok(args[0].try_int()? + args[1].try_int()? > 0),
///     );
/// assert_eq!(suite.type_name(), "Calc");
/// ```
pub struct Suite<T> {
    type_name: String,
    constructor: ConstructorFn<T>,
    methods: Vec<MethodDecl<T>>,
    properties: Vec<PropertyDecl<T>>,
    generators: HashMap<String, GeneratorFn<T>>,
}

impl<T> Suite<T> {
    pub fn new<F>(type_name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Result<T> + 'static,
    {
        Self {
            type_name: type_name.into(),
            constructor: Box::new(constructor),
            methods: Vec::new(),
            properties: Vec::new(),
            generators: HashMap::new(),
        }
    }

    /// Declares a callable with an explicit role and binding. The role-specific
    /// helpers below cover the well-formed cases; this one also accepts
    /// pairings the classifier will reject.
    pub fn method(mut self, name: impl Into<String>, role: MethodRole, binding: Binding<T>) -> Self {
        self.methods.push(MethodDecl {
            name: name.into(),
            role,
            binding,
        });
        self
    }

    pub fn setup_once<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        self.method(name, MethodRole::SetupOnce, Binding::of_static(f))
    }

    pub fn teardown_once<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        self.method(name, MethodRole::TeardownOnce, Binding::of_static(f))
    }

    pub fn setup_each<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut T) -> Result<()> + 'static,
    {
        self.method(name, MethodRole::SetupEach, Binding::of_instance(f))
    }

    pub fn teardown_each<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut T) -> Result<()> + 'static,
    {
        self.method(name, MethodRole::TeardownEach, Binding::of_instance(f))
    }

    pub fn test<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut T) -> Result<()> + 'static,
    {
        self.method(name, MethodRole::Test, Binding::of_instance(f))
    }

    pub fn property<F>(mut self, name: impl Into<String>, parameters: Vec<Parameter>, body: F) -> Self
    where
        F: Fn(&mut T, &[Value]) -> Result<bool> + 'static,
    {
        self.properties.push(PropertyDecl {
            name: name.into(),
            parameters,
            body: Box::new(body),
        });
        self
    }

    /// Registers a named value supplier for `GeneratedSample` parameters.
    /// A later registration under the same name replaces the earlier one.
    pub fn generator<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut T) -> Result<Value> + 'static,
    {
        self.generators.insert(name.into(), Box::new(f));
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn methods(&self) -> &[MethodDecl<T>] {
        &self.methods
    }

    pub fn properties(&self) -> &[PropertyDecl<T>] {
        &self.properties
    }

    pub fn generators(&self) -> &HashMap<String, GeneratorFn<T>> {
        &self.generators
    }

    pub(crate) fn construct(&self) -> Result<T> {
        (self.constructor)()
    }
}

impl<T> fmt::Debug for Suite<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut generators: Vec<_> = self.generators.keys().collect();
        generators.sort();
        f.debug_struct("Suite")
            .field("type_name", &self.type_name)
            .field("methods", &self.methods)
            .field("properties", &self.properties)
            .field("generators", &generators)
            .finish_non_exhaustive()
    }
}
