//! Chained method calls over a threaded receiver.
//!
//! [`chain_call`] runs a list of named calls against a [`MethodTable`]; each
//! call's result becomes the receiver of the next. Calls deserialize from the
//! compact `["method", arg, ...]` form, so a chain can be stored as JSON.
//! [`chain_fns`] is the statically typed form over an ordered list of
//! closures.

use crate::error::{value_type_name, DataError, DataResult};
use crate::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A named method invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Value>", try_from = "Vec<Value>")]
pub struct Call {
    pub method: String,
    pub args: Vec<Value>,
}

impl Call {
    /// A call without arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument (builder form).
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }
}

impl From<Call> for Vec<Value> {
    fn from(call: Call) -> Self {
        std::iter::once(Value::String(call.method))
            .chain(call.args)
            .collect()
    }
}

impl TryFrom<Vec<Value>> for Call {
    type Error = DataError;

    fn try_from(parts: Vec<Value>) -> Result<Self, Self::Error> {
        let mut parts = parts.into_iter();
        match parts.next() {
            Some(Value::String(method)) => Ok(Call {
                method,
                args: parts.collect(),
            }),
            Some(other) => Err(DataError::type_mismatch(
                Path::root().index(0),
                "string",
                value_type_name(&other),
            )),
            None => Err(DataError::type_mismatch(Path::root().index(0), "string", "nothing")),
        }
    }
}

type Method = Box<dyn Fn(&Value, &[Value]) -> DataResult<Value> + Send + Sync>;

/// Methods available to [`chain_call`], by name.
///
/// A method receives the current receiver and the call's arguments and
/// returns the next receiver.
#[derive(Default)]
pub struct MethodTable {
    methods: HashMap<String, Method>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method (builder form).
    pub fn with<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> DataResult<Value> + Send + Sync + 'static,
    {
        self.register(name, method);
        self
    }

    /// Register a method, replacing any method of the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, method: F)
    where
        F: Fn(&Value, &[Value]) -> DataResult<Value> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Box::new(method));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }
}

impl fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.methods.keys().collect();
        names.sort();
        f.debug_struct("MethodTable").field("methods", &names).finish()
    }
}

/// Invoke each call in order, threading the result into the next call.
///
/// Fails with [`DataError::MethodNotFound`] when a call names a method the
/// table lacks, and with whatever error a method itself reports. An empty
/// chain returns the receiver.
///
/// ```
/// use serde_json::json;
/// use tirea_data::obj::{self, Call, MethodTable};
///
/// let methods = MethodTable::new()
///     .with("double", |recv, _| Ok(json!(recv.as_i64().unwrap_or(0) * 2)));
/// let chain = vec![Call::new("double"), Call::new("double")];
/// assert_eq!(obj::chain_call(json!(3), &chain, &methods).unwrap(), json!(12));
/// ```
pub fn chain_call(receiver: Value, chain: &[Call], methods: &MethodTable) -> DataResult<Value> {
    chain
        .iter()
        .enumerate()
        .try_fold(receiver, |current, (step, call)| {
            let Some(method) = methods.get(&call.method) else {
                tracing::debug!(method = %call.method, step, "chained call names an unknown method");
                return Err(DataError::method_not_found(&call.method, step));
            };
            method(&current, call.args.as_slice()).map_err(|err| {
                tracing::debug!(method = %call.method, step, error = %err, "chained call failed");
                err
            })
        })
}

/// Apply each step in order, threading the result into the next step.
///
/// Stops at the first error.
///
/// ```
/// use tirea_data::obj;
///
/// let steps = (1..=3).map(|n| move |v: i32| Ok::<_, String>(v + n));
/// assert_eq!(obj::chain_fns(0, steps), Ok(6));
/// ```
pub fn chain_fns<T, E, I, F>(receiver: T, chain: I) -> Result<T, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Result<T, E>,
{
    chain.into_iter().try_fold(receiver, |current, step| step(current))
}
