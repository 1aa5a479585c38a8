//! Parse input configuration file

use std::path::Path;
use std::ops::Add;
use yaml_rust::{YamlLoader, yaml::Yaml};
use evalexpr::*;

mod error;
mod types;

pub use error::*;
pub use types::*;

/// Represents the input configuration, which defines the table
/// to be computed, and any named constants used in its definition.
pub struct Config {
    input: Yaml,
    ctx: HashMapContext,
}

impl Config {
    /// Loads a configuration file.
    /// Fails if the file cannot be opened or if it is not
    /// YAML-formatted.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| InputError::file(&path.display().to_string(), &e.to_string()))?;
        Self::from_string(&contents)
    }

    /// Loads a YAML configuration from a string.
    /// Fails if the string is not formatted correctly.
    pub fn from_string(s: &str) -> Result<Self, InputError> {
        let input = YamlLoader::load_from_str(s)
            .map_err(|e| InputError::syntax(&e.to_string()))?;
        let input = input.into_iter().next()
            .ok_or_else(|| InputError::syntax("no YAML document found"))?;

        Ok(Config {
            input,
            ctx: HashMapContext::new(),
        })
    }

    /// Loads automatic values for constants and elementary functions.
    /// Also loads and evaluates mathematical expressions
    /// that are given in the specified `section`.
    pub fn with_context(&mut self, section: &str) -> Result<&mut Self, InputError> {
        use helper::context_function;

        let mut ctx = context_map! {
            "pi" => std::f64::consts::PI,
            "e" => std::f64::consts::E,
            "degree" => std::f64::consts::PI / 180.0,
        }.map_err(|e| InputError::conversion(section, &e.to_string()))?;

        context_function!(ctx, "sqrt",   f64::sqrt);
        context_function!(ctx, "cbrt",   f64::cbrt);
        context_function!(ctx, "abs",    f64::abs);
        context_function!(ctx, "exp",    f64::exp);
        context_function!(ctx, "ln",     f64::ln);
        context_function!(ctx, "log10",  f64::log10);
        context_function!(ctx, "sin",    f64::sin);
        context_function!(ctx, "cos",    f64::cos);
        context_function!(ctx, "tan",    f64::tan);
        context_function!(ctx, "asin",   f64::asin);
        context_function!(ctx, "acos",   f64::acos);
        context_function!(ctx, "atan",   f64::atan);
        context_function!(ctx, "atan2",  f64::atan2, 2);
        context_function!(ctx, "sinh",   f64::sinh);
        context_function!(ctx, "cosh",   f64::cosh);
        context_function!(ctx, "tanh",   f64::tanh);
        context_function!(ctx, "floor",  f64::floor);
        context_function!(ctx, "ceil",   f64::ceil);
        context_function!(ctx, "round",  f64::round);

        self.ctx = ctx;

        // Read in from 'constants' block if it exists
        if self.input[section].is_badvalue() {
            return Ok(self);
        }

        let entries = self.input[section].as_hash()
            .ok_or_else(|| InputError::conversion(section, "expected a list of key-value pairs"))?;

        for (a, b) in entries {
            let key = match a {
                Yaml::String(k) => k,
                _ => continue,
            };

            // grab the value, if possible
            let value = match b {
                Yaml::Integer(i) => Some(*i as f64),
                Yaml::Real(s) => s.parse::<f64>().ok(),
                Yaml::String(s) => eval_number_with_context(s, &self.ctx).ok(),
                _ => None,
            };

            // insert it into the context so it's available for the next read
            let field = format!("{}:{}", section, key);
            let value = value.ok_or_else(|| InputError::conversion(&field, "could not be evaluated"))?;
            self.ctx.set_value(key.clone(), Value::from(value))
                .map_err(|_| {
                    eprintln!("Failed to insert {} = {} from constants block into context.", key, value);
                    InputError::conversion(&field, "could not be stored")
                })?;
        }

        Ok(self)
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse the value as the specified type.
    /// The path to the key-value pair is specified by a string of colon-separated
    /// sections, e.g. `'section:subsection:subsubsection:key'`.
    pub fn read<T, S>(&self, path: S) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let value = path.split(':')
            .try_fold(&self.input, |y, s| {
                if y[s].is_badvalue() {
                    Err(InputError::location(path, s))
                } else {
                    Ok(&y[s])
                }
            })?;

        T::from_yaml(value.clone(), &self.ctx)
            .map_err(|_| InputError::conversion(path, "value could not be parsed"))
    }

    /// Like `Config::read`, but returns `Ok(None)` if the field, or any
    /// section containing it, is absent. A field that is present but
    /// cannot be parsed is still an error.
    pub fn read_optional<T, S>(&self, path: S) -> Result<Option<T>, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        match self.read(path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == InputErrorKind::Location => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse it as a looped variable, returning a Vec of the values.
    /// The loop is defined by a `start`, `stop` and `step`:
    ///
    /// ```text
    /// x:
    ///     start: 1.0
    ///     stop: 2.0
    ///     step: 0.5
    /// ```
    ///
    /// gives `[1.0, 1.5, 2.0]`. A plain value gives a Vec of length 1.
    pub fn read_loop<T, S>(&self, path: S) -> Result<Vec<T>, InputError>
    where
        T: FromYaml + PartialOrd + Add<Output=T> + Copy + Default,
        S: AsRef<str> {
        let key = path.as_ref();

        if self.read::<T, _>(format!("{}:start", key)).is_err() {
            let value = self.read(key)?;
            return Ok(vec![value]);
        }

        let start: T = self.read(format!("{}:start", key))?;
        let stop: T = self.read(format!("{}:stop", key))?;
        let step: T = self.read(format!("{}:step", key))?;

        if !(step > T::default()) {
            return Err(InputError::bad_loop(&format!("{}:step", key), "step must be positive"));
        }

        let mut v: Vec<T> = Vec::new();
        let mut x = start;
        while x <= stop {
            v.push(x);
            x = x + step;
        }
        Ok(v)
    }
}

mod helper {
    macro_rules! context_function {
        ($ctx:expr, $name:literal, $func:expr) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let x = arg.as_number()?;
                    Ok(Value::Float($func(x)))
                })
            ).map_err(|e| InputError::conversion($name, &e.to_string()))?
        };
        ($ctx:expr, $name:literal, $func:expr, 2) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let arg = arg.as_fixed_len_tuple(2)?;
                    let x = arg[0].as_number()?;
                    let y = arg[1].as_number()?;
                    Ok(Value::Float($func(x, y)))
                })
            ).map_err(|e| InputError::conversion($name, &e.to_string()))?
        };
    }

    pub(super) use context_function;
}
