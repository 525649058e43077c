use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::severity::RenderMode;

/// One value passed to a log call, normalised into a printable form.
///
/// Arguments are built through [`From`] conversions for scalars and strings,
/// or through the explicit constructors for errors, set-like collections, and
/// arbitrary serialisable values. Rendering yields one segment per argument,
/// except errors which yield two: the display form and the source-chain text.
///
/// Special values render as literal text rather than a structural dump:
/// non-finite floats become `NaN`, `Infinity`, or `-Infinity`, and an absent
/// [`Option`] becomes `None`.
///
/// # Examples
///
/// ```
/// use jot_core::argument::Argument;
/// use jot_core::severity::RenderMode;
///
/// assert_eq!(Argument::from(f64::NAN).to_segments(RenderMode::Compact), ["NaN"]);
/// assert_eq!(Argument::from("plain").to_segments(RenderMode::Compact), ["plain"]);
/// assert_eq!(
///     Argument::set([1, 2, 3]).to_segments(RenderMode::Compact),
///     ["Set(3) [1,2,3]"],
/// );
/// ```
#[must_use = "arguments do nothing until passed to a logger"]
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    kind: Kind,
}

#[derive(Clone, Debug, PartialEq)]
enum Kind {
    Text(Cow<'static, str>),
    Structured(Value),
    Error { display: String, trace: String },
    Set { len: usize, json: String },
}

impl Argument {
    /// A plain text argument, rendered verbatim.
    pub fn text<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self {
            kind: Kind::Text(text.into()),
        }
    }

    /// A structured argument, inspected as JSON when rendered.
    ///
    /// Values the serialiser cannot represent (for example maps whose keys do
    /// not stringify) degrade to a bracketed placeholder instead of failing
    /// the log call.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => Self {
                kind: Kind::Structured(value),
            },
            Err(error) => Self::text(format!("<unserializable: {error}>")),
        }
    }

    /// An error argument carrying the display form and the source chain.
    ///
    /// When the error has no source, the trace segment falls back to the
    /// error's debug form so the rendering always produces two segments.
    pub fn error<E: StdError + ?Sized>(error: &E) -> Self {
        let display = error.to_string();
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        let trace = if causes.is_empty() {
            format!("{error:?}")
        } else {
            causes.join("; ")
        };
        Self {
            kind: Kind::Error { display, trace },
        }
    }

    /// A set-like argument, rendered as `Set(<len>) <JSON array>`.
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Serialize,
    {
        let values: Vec<Value> = items
            .into_iter()
            .map(|item| {
                serde_json::to_value(&item)
                    .unwrap_or_else(|error| Value::String(format!("<unserializable: {error}>")))
            })
            .collect();
        let len = values.len();
        let json = Value::Array(values).to_string();
        Self {
            kind: Kind::Set { len, json },
        }
    }

    /// Renders the argument into its printable segments.
    ///
    /// Text renders verbatim in both modes; structured values render as
    /// compact or indented JSON depending on `mode`.
    #[must_use]
    pub fn to_segments(&self, mode: RenderMode) -> Vec<String> {
        match &self.kind {
            Kind::Text(text) => vec![text.clone().into_owned()],
            Kind::Structured(value) => vec![match mode {
                RenderMode::Compact => value.to_string(),
                RenderMode::Pretty => format!("{value:#}"),
            }],
            Kind::Error { display, trace } => vec![display.clone(), trace.clone()],
            Kind::Set { len, json } => vec![format!("Set({len}) {json}")],
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = self.to_segments(RenderMode::Compact);
        f.write_str(&segments.join(" "))
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Self::text(text.to_owned())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<Cow<'static, str>> for Argument {
    fn from(text: Cow<'static, str>) -> Self {
        Self::text(text)
    }
}

impl From<char> for Argument {
    fn from(value: char) -> Self {
        Self::text(value.to_string())
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Self {
            kind: Kind::Structured(Value::Bool(value)),
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self {
            kind: Kind::Structured(value),
        }
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(|| Self::text("None"), Into::into)
    }
}

macro_rules! impl_from_integer {
    ($($int:ty),+ $(,)?) => {$(
        impl From<$int> for Argument {
            fn from(value: $int) -> Self {
                Self { kind: Kind::Structured(Value::from(value)) }
            }
        }
    )+};
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Self::text("NaN");
        }
        if value.is_infinite() {
            return Self::text(if value.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            });
        }
        serde_json::Number::from_f64(value).map_or_else(
            || Self::text("NaN"),
            |number| Self {
                kind: Kind::Structured(Value::Number(number)),
            },
        )
    }
}

impl From<f32> for Argument {
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use thiserror::Error;

    fn compact(argument: &Argument) -> Vec<String> {
        argument.to_segments(RenderMode::Compact)
    }

    mod text_and_scalars {
        use super::*;

        #[test]
        fn str_renders_verbatim() {
            assert_eq!(compact(&Argument::from("two words")), ["two words"]);
        }

        #[test]
        fn owned_string_renders_verbatim() {
            assert_eq!(compact(&Argument::from(String::from("owned"))), ["owned"]);
        }

        #[test]
        fn integers_render_as_json_numbers() {
            assert_eq!(compact(&Argument::from(42_i32)), ["42"]);
            assert_eq!(compact(&Argument::from(0_u8)), ["0"]);
            assert_eq!(compact(&Argument::from(-7_i64)), ["-7"]);
        }

        #[test]
        fn finite_floats_render_as_json_numbers() {
            assert_eq!(compact(&Argument::from(2.5_f64)), ["2.5"]);
            assert_eq!(compact(&Argument::from(3.0_f64)), ["3.0"]);
        }

        #[test]
        fn bool_and_char_render_literally() {
            assert_eq!(compact(&Argument::from(true)), ["true"]);
            assert_eq!(compact(&Argument::from('x')), ["x"]);
        }
    }

    mod special_values {
        use super::*;

        #[test]
        fn nan_renders_its_name() {
            assert_eq!(compact(&Argument::from(f64::NAN)), ["NaN"]);
            assert_eq!(compact(&Argument::from(f32::NAN)), ["NaN"]);
        }

        #[test]
        fn infinities_render_their_names() {
            assert_eq!(compact(&Argument::from(f64::INFINITY)), ["Infinity"]);
            assert_eq!(compact(&Argument::from(f64::NEG_INFINITY)), ["-Infinity"]);
        }

        #[test]
        fn absent_option_renders_none() {
            assert_eq!(compact(&Argument::from(Option::<i32>::None)), ["None"]);
        }

        #[test]
        fn present_option_renders_its_value() {
            assert_eq!(compact(&Argument::from(Some(7))), ["7"]);
            assert_eq!(compact(&Argument::from(Some("inner"))), ["inner"]);
        }
    }

    mod errors {
        use super::*;

        #[derive(Debug, Error)]
        #[error("inner failure")]
        struct Inner;

        #[derive(Debug, Error)]
        #[error("outer context")]
        struct Outer {
            #[source]
            inner: Inner,
        }

        #[test]
        fn error_yields_two_segments() {
            let error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
            let segments = compact(&Argument::error(&error));
            assert_eq!(segments.len(), 2);
            assert!(segments[0].contains("missing file"));
            assert!(!segments[1].is_empty());
        }

        #[test]
        fn chained_error_reports_its_causes() {
            let segments = compact(&Argument::error(&Outer { inner: Inner }));
            assert_eq!(segments[0], "outer context");
            assert_eq!(segments[1], "caused by: inner failure");
        }

        #[test]
        fn sourceless_error_falls_back_to_debug_form() {
            let segments = compact(&Argument::error(&Inner));
            assert_eq!(segments[0], "inner failure");
            assert_eq!(segments[1], "Inner");
        }

        #[test]
        fn display_joins_both_error_segments() {
            let rendered = Argument::error(&Outer { inner: Inner }).to_string();
            assert_eq!(rendered, "outer context caused by: inner failure");
        }
    }

    mod sets {
        use super::*;

        #[test]
        fn set_renders_length_and_array() {
            assert_eq!(compact(&Argument::set([1, 2, 3])), ["Set(3) [1,2,3]"]);
        }

        #[test]
        fn empty_set_renders_zero() {
            assert_eq!(compact(&Argument::set(Vec::<i32>::new())), ["Set(0) []"]);
        }

        #[test]
        fn string_set_renders_quoted_elements() {
            let argument = Argument::set(["a", "b"]);
            assert_eq!(compact(&argument), ["Set(2) [\"a\",\"b\"]"]);
        }
    }

    mod structured {
        use super::*;

        #[test]
        fn object_renders_compact_json() {
            let argument = Argument::from(serde_json::json!({"a": 1, "b": [true]}));
            assert_eq!(compact(&argument), ["{\"a\":1,\"b\":[true]}"]);
        }

        #[test]
        fn pretty_mode_indents_objects() {
            let argument = Argument::from(serde_json::json!({"a": 1}));
            let segments = argument.to_segments(RenderMode::Pretty);
            assert_eq!(segments.len(), 1);
            assert!(segments[0].contains('\n'));
            assert!(segments[0].contains("\"a\": 1"));
        }

        #[test]
        fn json_string_values_keep_their_quotes() {
            let argument = Argument::from(serde_json::json!("quoted"));
            assert_eq!(compact(&argument), ["\"quoted\""]);
        }

        #[test]
        fn serialisable_type_goes_through_to_value() {
            #[derive(Serialize)]
            struct Point {
                x: i32,
                y: i32,
            }
            let argument = Argument::structured(&Point { x: 1, y: 2 });
            assert_eq!(compact(&argument), ["{\"x\":1,\"y\":2}"]);
        }

        #[test]
        fn unserialisable_value_degrades_to_placeholder() {
            let mut map = HashMap::new();
            map.insert((1_u8, 2_u8), "pair");
            let segments = compact(&Argument::structured(&map));
            assert!(segments[0].starts_with("<unserializable:"), "{segments:?}");
        }
    }
}
