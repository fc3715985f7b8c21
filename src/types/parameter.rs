//! Parameter descriptors.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Type tag marking a repeating parameter
pub const TYPE_REPEAT: &str = "Repeat";
/// Alternate type tag marking a repeating parameter
pub const TYPE_REPEAT_LIST: &str = "RepeatList";

/// One input field of an API, possibly containing nested sub-fields
///
/// Parameters form an n-ary tree: each node owns its children, so the
/// structure is acyclic. `name` is unique among siblings when the metadata
/// is loaded; the rename traversal ([`crate::Api::for_each_parameters`])
/// rewrites it in place to the full dotted path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    /// Field name
    pub name: String,

    /// Metadata type tag. `Repeat`/`RepeatList` mark a repeating parameter,
    /// conceptually a list of homogeneous instances addressed by index.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub r#type: String,

    /// Whether a value must be assigned before the API can be invoked
    pub required: bool,

    /// Nested sub-fields, owned by this node
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_parameters: Vec<Parameter>,
}

impl Parameter {
    /// Check whether the type tag marks this parameter as repeating
    pub fn is_repeating(&self) -> bool {
        self.r#type == TYPE_REPEAT || self.r#type == TYPE_REPEAT_LIST
    }

    /// Key under which a caller assigns a value to this parameter.
    ///
    /// Repeating parameters are addressed through their first instance, so
    /// the key carries a fixed `.1` index segment.
    pub fn value_key(&self) -> String {
        if self.is_repeating() {
            format!("{}.1", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Depth-first visit of this node and its subtree.
    ///
    /// The node's path is computed from its current name and type *before*
    /// the visitor runs, and that precomputed string seeds the children's
    /// prefix, so a visitor that renames the node does not disturb the paths
    /// handed out for its descendants.
    pub(crate) fn visit<F>(&mut self, prefix: &str, f: &mut F)
    where
        F: FnMut(&str, &mut Parameter),
    {
        let path = format!("{prefix}{}", self.value_key());
        f(&path, self);
        let child_prefix = format!("{path}.");
        for child in &mut self.sub_parameters {
            child.visit(&child_prefix, f);
        }
    }
}

/// Comparator ordering required parameters strictly before optional ones.
///
/// Parameters with equal `required` status compare [`Ordering::Equal`], so
/// sorts using this comparator keep their relative order stable everywhere
/// else. Pass to `slice::sort_by` and friends.
pub fn required_first(a: &Parameter, b: &Parameter) -> Ordering {
    b.required.cmp(&a.required)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, required: bool) -> Parameter {
        Parameter {
            name: name.to_string(),
            required,
            ..Default::default()
        }
    }

    #[test]
    fn repeat_tags_mark_repeating() {
        for tag in [TYPE_REPEAT, TYPE_REPEAT_LIST] {
            let p = Parameter {
                r#type: tag.to_string(),
                ..Default::default()
            };
            assert!(p.is_repeating());
        }
        let p = Parameter {
            r#type: "String".to_string(),
            ..Default::default()
        };
        assert!(!p.is_repeating());
        assert!(!Parameter::default().is_repeating());
    }

    #[test]
    fn value_key_indexes_repeating_parameters() {
        let mut p = named("tag", false);
        assert_eq!(p.value_key(), "tag");
        p.r#type = TYPE_REPEAT.to_string();
        assert_eq!(p.value_key(), "tag.1");
    }

    #[test]
    fn required_sorts_before_optional() {
        assert_eq!(
            required_first(&named("a", true), &named("b", false)),
            Ordering::Less
        );
        assert_eq!(
            required_first(&named("a", false), &named("b", true)),
            Ordering::Greater
        );
        assert_eq!(
            required_first(&named("a", true), &named("b", true)),
            Ordering::Equal
        );
        assert_eq!(
            required_first(&named("a", false), &named("b", false)),
            Ordering::Equal
        );
    }

    #[test]
    fn sort_by_comparator_is_stable_for_equal_required() {
        let mut params = vec![
            named("c", false),
            named("a", true),
            named("d", false),
            named("b", true),
        ];
        params.sort_by(required_first);
        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn swap_exchanges_full_elements() {
        let mut params = vec![
            Parameter {
                name: "api".to_string(),
                required: true,
                r#type: TYPE_REPEAT_LIST.to_string(),
                ..Default::default()
            },
            Parameter {
                name: "api_test".to_string(),
                required: true,
                r#type: TYPE_REPEAT_LIST.to_string(),
                ..Default::default()
            },
        ];
        params.swap(0, 1);
        assert_eq!(params[0].name, "api_test");
        assert_eq!(params[1].name, "api");
        assert!(params[0].required && params[1].required);
        assert_eq!(params[0].r#type, TYPE_REPEAT_LIST);
        assert_eq!(params[1].r#type, TYPE_REPEAT_LIST);
    }

    #[test]
    fn parameter_serde_roundtrip_nested() {
        let p = Parameter {
            name: "instance".to_string(),
            r#type: TYPE_REPEAT.to_string(),
            required: true,
            sub_parameters: vec![named("zone_id", false)],
        };
        let json = serde_json::to_string(&p).expect("serialize");
        let de: Parameter = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(de, p);
    }

    #[test]
    fn parameter_deserializes_with_defaults() {
        let de: Parameter = serde_json::from_str(r#"{"name":"RegionId"}"#).expect("deserialize");
        assert_eq!(de.name, "RegionId");
        assert!(de.r#type.is_empty());
        assert!(!de.required);
        assert!(de.sub_parameters.is_empty());
    }
}
