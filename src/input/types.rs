//! YAML-readable types

use std::convert::TryFrom;
use yaml_rust::yaml::Yaml;
use evalexpr::{HashMapContext, eval_number_with_context};

/// Types that can be parsed from a YML-formatted file
pub trait FromYaml: Sized {
    type Error;
    /// Attempt to parse the YML field as the specified type, using the supplied Context for named variables and constants.
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, Self::Error>;
}

impl FromYaml for String {
    type Error = ();
    fn from_yaml(arg: Yaml, _ctx: &HashMapContext) -> Result<Self, Self::Error> {
        match arg {
            Yaml::String(s) => Ok(s),
            Yaml::Integer(i) => Ok(i.to_string()),
            Yaml::Real(s) => Ok(s),
            _ => Err(())
        }
    }
}

// Numbers: f64, i64, usize

impl FromYaml for f64 {
    type Error = ();
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, Self::Error> {
        match arg {
            Yaml::Real(s) => s.parse::<f64>().or(Err(())),
            Yaml::Integer(i) => Ok(i as f64),
            Yaml::String(s) => eval_number_with_context(&s, ctx).or(Err(())),
            _ => Err(())
        }
    }
}

impl FromYaml for i64 {
    type Error = ();
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, Self::Error> {
        match arg {
            Yaml::Integer(i) => Ok(i),
            // expressions are accepted if they evaluate to a whole number
            Yaml::String(s) => {
                let v = eval_number_with_context(&s, ctx).or(Err(()))?;
                if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                    Ok(v as i64)
                } else {
                    Err(())
                }
            },
            _ => Err(())
        }
    }
}

impl FromYaml for usize {
    type Error = ();
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, Self::Error> {
        let i: i64 = FromYaml::from_yaml(arg, ctx)?;
        usize::try_from(i).map_err(|_| ())
    }
}

// Vecs

impl FromYaml for Vec<String> {
    type Error = ();
    fn from_yaml(arg: Yaml, _ctx: &HashMapContext) -> Result<Self, Self::Error> {
        let take_yaml_string = |y: Yaml| -> Option<String> {
            match y {
                Yaml::String(s) | Yaml::Real(s) => Some(s),
                Yaml::Integer(i) => Some(i.to_string()),
                _ => None
            }
        };

        match arg {
            Yaml::Array(array) => {
                let got: Vec<String> = array.into_iter().filter_map(take_yaml_string).collect();
                if got.is_empty() {
                    Err(())
                } else {
                    Ok(got)
                }
            },
            // turn a single String into a vec of length 1.
            other => take_yaml_string(other).map(|s| vec![s]).ok_or(()),
        }
    }
}
