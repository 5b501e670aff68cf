use std::{fmt, path::PathBuf};

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use miette::Result;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::utils::Describe;

/// Settings the CI runner passes through the environment
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RunnerEnv {
    /// File that step outputs are appended to
    pub github_output: Option<PathBuf>,
    /// Set to `1` when the workflow runs with debug logging
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub runner_debug: Option<String>,
}

impl RunnerEnv {
    pub fn debug(&self) -> bool {
        self.runner_debug.as_deref() == Some("1")
    }
}

/// Environment values arrive already typed (`1`, `true`, `""`),
/// this turns any scalar back into its textual form
fn scalar_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    struct Scalar;

    impl<'de> Visitor<'de> for Scalar {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, de: D) -> Result<Self::Value, D::Error> {
            de.deserialize_any(self)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_owned()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }
    }

    de.deserialize_any(Scalar)
}

/// Read the runner settings from the `GITHUB_OUTPUT` and
/// `RUNNER_DEBUG` environment variables
pub fn read_runner_env() -> Result<RunnerEnv> {
    Figment::from(Serialized::defaults(RunnerEnv::default()))
        .merge(Env::raw().only(&["GITHUB_OUTPUT", "RUNNER_DEBUG"]))
        .extract::<RunnerEnv>()
        .describe("reading runner environment")
}
