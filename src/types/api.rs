//! API descriptors and the parameter tree resolver.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::MetaError;
use crate::path::{ParamPath, PathSegment};
use crate::types::{Parameter, Product};

/// Base URL for product documentation links
const DOCUMENT_BASE: &str = "https://help.aliyun.com/api";

/// One API definition: its invocation surface plus its parameter tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Api {
    /// API name as published by the owning product
    pub name: String,

    /// HTTP method tag from the metadata source; normalized by [`Api::method`]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,

    /// Protocol tag from the metadata source; normalized by [`Api::protocol`]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protocol: String,

    /// Top-level parameters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Owning product, shared across all of the product's APIs
    #[serde(skip)]
    pub product: Option<Arc<Product>>,
}

impl Api {
    /// Normalized HTTP method.
    ///
    /// The metadata source only distinguishes POST; every other tag,
    /// including verbs like `put`, folds to GET.
    pub fn method(&self) -> &'static str {
        if self.method.eq_ignore_ascii_case("post") {
            "POST"
        } else {
            "GET"
        }
    }

    /// Normalized protocol scheme, ignoring any `://` separator.
    pub fn protocol(&self) -> &'static str {
        if self.protocol.to_ascii_lowercase().starts_with("https") {
            "https"
        } else {
            "http"
        }
    }

    /// Documentation link for this API, or `None` when no product is attached.
    pub fn document_link(&self) -> Option<String> {
        self.product
            .as_ref()
            .map(|product| format!("{DOCUMENT_BASE}/{}/{}.html", product.code, self.name))
    }

    /// Look up a top-level parameter by dotted path.
    ///
    /// A single-name path matches any parameter with that name. A path of
    /// the form `name.<index>...` matches only a *repeating* parameter named
    /// `name`, for any numeric index and any trailing segments. Children are
    /// not searched; address them through the paths produced by
    /// [`Api::for_each_parameters`].
    ///
    /// Not-found is `None`, never an error; an unparseable path is simply a
    /// miss.
    pub fn find_parameter(&self, path: &str) -> Option<&Parameter> {
        let parsed: ParamPath = path.parse().ok()?;
        let found = self.parameters.iter().find(|p| path_matches(&parsed, p));
        if found.is_none() {
            trace!(path, "parameter not found");
        }
        found
    }

    /// Mutable variant of [`Api::find_parameter`]; the returned reference
    /// aliases the stored node, so caller mutations are visible in the tree.
    pub fn find_parameter_mut(&mut self, path: &str) -> Option<&mut Parameter> {
        let parsed: ParamPath = path.parse().ok()?;
        self.parameters.iter_mut().find(|p| path_matches(&parsed, p))
    }

    /// Walk every parameter depth-first, handing the visitor each node's
    /// computed dotted path together with a mutable reference to the node.
    ///
    /// Top-level parameters are visited in list order, each subtree fully
    /// before the next sibling. A node's computed path is its current name,
    /// with a fixed `.1` index appended while its type marks it repeating,
    /// prefixed by its parent's computed path. Paths are computed before the
    /// visitor runs, so renaming a node (the usual use) does not change what
    /// its descendants see.
    pub fn for_each_parameters<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut Parameter),
    {
        for parameter in &mut self.parameters {
            parameter.visit("", &mut f);
        }
    }

    /// Check that every required top-level parameter has an assigned value.
    ///
    /// The predicate receives each required parameter's value key (its name,
    /// indexed through `.1` when repeating, the same rule the traversal
    /// uses). Missing parameters are aggregated into a single error; an API
    /// with no parameters always passes.
    pub fn check_required_parameters<F>(&self, assigned: F) -> Result<(), MetaError>
    where
        F: Fn(&str) -> bool,
    {
        let missing: Vec<String> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(Parameter::value_key)
            .filter(|key| !assigned(key))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            debug!(?missing, "required parameters not assigned");
            Err(MetaError::RequiredParametersNotAssigned(missing))
        }
    }
}

/// Top-level match rule for [`Api::find_parameter`], expressed over typed
/// path segments.
fn path_matches(path: &ParamPath, parameter: &Parameter) -> bool {
    match path.segments() {
        [PathSegment::Name(name)] => name == &parameter.name,
        [PathSegment::Name(name), PathSegment::Index(_), ..] => {
            parameter.is_repeating() && name == &parameter.name
        }
        _ => false,
    }
}
