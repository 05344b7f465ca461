//! Inferred type to doc node, syntax annotation and doc string.

use indexmap::IndexSet;
use recast_core::{InferredType, ObjectType, SymbolUniverse, VersionFeature, VersionFeatureProvider};
use recast_syntax::SyntaxNode;

use crate::config::Config;
use crate::doc_node::DocTypeNode;
use crate::strategy::{self, TypeStrategy};
use crate::syntax_node::SyntaxTypeNode;
use crate::{Error, Result};

/// Position a syntax annotation is rendered for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeSlot {
    Param,
    Property,
    Return,
    #[default]
    Any,
}

/// Renders inferred types.
///
/// Immutable once built. Strategies are consulted in registration order
/// before the built-in fallback chain.
pub struct TypeMapper<'s> {
    config: Config,
    strategies: Vec<Box<dyn TypeStrategy>>,
    symbols: &'s dyn SymbolUniverse,
}

pub struct TypeMapperBuilder<'s> {
    config: Config,
    strategies: Vec<Box<dyn TypeStrategy>>,
    symbols: &'s dyn SymbolUniverse,
}

impl<'s> TypeMapperBuilder<'s> {
    /// Append a strategy after those already registered.
    pub fn strategy(mut self, strategy: impl TypeStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Append the default registry.
    pub fn default_strategies(mut self) -> Self {
        self.strategies.extend(strategy::defaults());
        self
    }

    pub fn build(self) -> TypeMapper<'s> {
        TypeMapper {
            config: self.config,
            strategies: self.strategies,
            symbols: self.symbols,
        }
    }
}

impl<'s> TypeMapper<'s> {
    /// Mapper with the default strategy registry.
    pub fn new(config: Config, symbols: &'s dyn SymbolUniverse) -> Self {
        Self::builder(config, symbols).default_strategies().build()
    }

    /// Builder starting from an empty registry.
    pub fn builder(config: Config, symbols: &'s dyn SymbolUniverse) -> TypeMapperBuilder<'s> {
        TypeMapperBuilder {
            config,
            strategies: Vec::new(),
            symbols,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the target version has `feature`.
    pub fn supports(&self, feature: VersionFeature) -> bool {
        self.config.is_at_least(feature)
    }

    fn strategy_for(&self, ty: &InferredType) -> Option<&dyn TypeStrategy> {
        self.strategies
            .iter()
            .map(|strategy| &**strategy)
            .find(|strategy| strategy.accepts(ty))
    }

    // --- Doc type nodes ---

    pub fn to_doc_type_node(&self, ty: &InferredType) -> Result<DocTypeNode> {
        if let InferredType::Array(item) | InferredType::Iterable(item) = ty {
            let item = self.to_doc_type_node(item)?;
            return Ok(Self::array_doc_node(item));
        }

        if let Some(strategy) = self.strategy_for(ty) {
            tracing::trace!(strategy = ?strategy.kind(), ty = %ty, "doc node strategy");
            return strategy.to_doc_node(ty, self);
        }

        let node = match ty {
            InferredType::Union(members) => {
                let mut nodes = Vec::with_capacity(members.len());
                for member in members {
                    let node = self.to_doc_type_node(member)?;
                    if !nodes.contains(&node) {
                        nodes.push(node);
                    }
                }
                if nodes.len() == 1 {
                    nodes.remove(0)
                } else {
                    DocTypeNode::Union(nodes)
                }
            }
            InferredType::Object(object) => DocTypeNode::Identifier(self.object_doc_name(object)),
            InferredType::ObjectWithoutClass => DocTypeNode::identifier("object"),
            InferredType::Closure => DocTypeNode::Identifier(self.closure_name()),
            InferredType::Callable => DocTypeNode::identifier("callable"),
            InferredType::Void => DocTypeNode::identifier("void"),
            InferredType::Resource => DocTypeNode::identifier("resource"),
            InferredType::StaticRef(_) => DocTypeNode::identifier("static"),
            _ => return Err(unsupported("to_doc_type_node", ty)),
        };
        Ok(node)
    }

    /// Array of `item`, distributed over a union item: `(A|B)[]` becomes
    /// `A[]|B[]`.
    pub fn array_doc_node(item: DocTypeNode) -> DocTypeNode {
        let DocTypeNode::Union(members) = item else {
            return DocTypeNode::array(item);
        };
        let members = members
            .into_iter()
            .map(|member| match member {
                DocTypeNode::Union(inner) => {
                    DocTypeNode::Union(inner.into_iter().map(DocTypeNode::array).collect())
                }
                other => DocTypeNode::array(other),
            })
            .collect();
        DocTypeNode::Union(members)
    }

    // --- Syntax annotations ---

    /// `Ok(None)` means the type has no annotation form for `slot` under the
    /// target version.
    pub fn to_syntax_type_node(
        &self,
        ty: &InferredType,
        slot: TypeSlot,
    ) -> Result<Option<SyntaxTypeNode>> {
        match ty {
            InferredType::Void => {
                let allowed = self.supports(VersionFeature::VoidType)
                    && !matches!(slot, TypeSlot::Param | TypeSlot::Property);
                return Ok(allowed.then(|| SyntaxTypeNode::identifier("void")));
            }
            InferredType::Object(ObjectType::SelfRef(_)) => {
                return Ok(Some(SyntaxTypeNode::identifier("self")));
            }
            _ => {}
        }

        if let Some(strategy) = self.strategy_for(ty) {
            tracing::trace!(strategy = ?strategy.kind(), ty = %ty, ?slot, "syntax node strategy");
            return strategy.to_syntax_node(ty, slot, self);
        }

        match ty {
            InferredType::Array(_) => Ok(Some(SyntaxTypeNode::identifier("array"))),
            InferredType::StaticRef(_) => Ok(None),
            InferredType::Callable | InferredType::Closure => Ok((slot != TypeSlot::Property)
                .then(|| SyntaxTypeNode::identifier("callable"))),
            InferredType::Object(object) => Ok(object_syntax_node(object)),
            InferredType::Union(members) => self.union_syntax_node(members, slot),
            InferredType::Resource => Ok(None),
            InferredType::ObjectWithoutClass => Ok(self
                .supports(VersionFeature::ObjectType)
                .then(|| SyntaxTypeNode::identifier("object"))),
            _ => Err(unsupported("to_syntax_type_node", ty)),
        }
    }

    /// Map and build the annotation as a standalone tree.
    pub fn to_syntax_tree(&self, ty: &InferredType, slot: TypeSlot) -> Result<Option<SyntaxNode>> {
        Ok(self
            .to_syntax_type_node(ty, slot)?
            .map(|node| node.to_syntax()))
    }

    fn union_syntax_node(
        &self,
        members: &[InferredType],
        slot: TypeSlot,
    ) -> Result<Option<SyntaxTypeNode>> {
        if let Some(node) = self.collapse_array_like(members) {
            return Ok(Some(node));
        }

        if let Some(inner) = nullable_inner(members) {
            return match self.to_syntax_type_node(inner, slot)? {
                None => Ok(None),
                Some(node @ SyntaxTypeNode::Nullable(_)) => Ok(Some(node)),
                Some(SyntaxTypeNode::Union(_)) => Err(Error::InvariantViolation(format!(
                    "nullable `{inner}` mapped to a union annotation"
                ))),
                Some(node) => Ok(Some(SyntaxTypeNode::nullable(node))),
            };
        }

        if self.supports(VersionFeature::UnionTypes) {
            if let Some(node) = self.native_union(members, slot)? {
                return Ok(Some(node));
            }
        }

        Ok(self.common_ancestor(members))
    }

    /// `array`, `iterable` and the iterable marker, optionally with `null`.
    fn collapse_array_like(&self, members: &[InferredType]) -> Option<SyntaxTypeNode> {
        let mut nullable = false;
        let mut iterable = false;
        for member in members {
            match member {
                InferredType::Array(_) => {}
                InferredType::Iterable(_) => iterable = true,
                InferredType::Null => nullable = true,
                InferredType::Object(object) if self.is_iterable_marker(object) => iterable = true,
                _ => return None,
            }
        }
        let node = SyntaxTypeNode::identifier(if iterable { "iterable" } else { "array" });
        Some(if nullable {
            SyntaxTypeNode::nullable(node)
        } else {
            node
        })
    }

    fn is_iterable_marker(&self, object: &ObjectType) -> bool {
        object.identity().trim_start_matches('\\') == self.config.iterable_marker
    }

    /// `A|B|...` when every member has an annotation.
    fn native_union(
        &self,
        members: &[InferredType],
        slot: TypeSlot,
    ) -> Result<Option<SyntaxTypeNode>> {
        let mut nodes = Vec::with_capacity(members.len());
        for member in members {
            match self.to_syntax_type_node(member, slot)? {
                Some(node) => nodes.push(node),
                None => return Ok(None),
            }
        }
        Ok(Some(SyntaxTypeNode::Union(nodes)))
    }

    /// First object member related by ancestry to every other member.
    ///
    /// Declaration order decides between several candidates.
    fn common_ancestor(&self, members: &[InferredType]) -> Option<SyntaxTypeNode> {
        let names = members
            .iter()
            .map(|member| member.as_object().map(ObjectType::identity))
            .collect::<Option<Vec<_>>>()?;

        let found = names.iter().enumerate().find(|&(i, candidate)| {
            names
                .iter()
                .enumerate()
                .all(|(j, other)| i == j || self.symbols.are_related(candidate, other))
        });
        tracing::debug!(
            members = names.len(),
            found = ?found.map(|(_, name)| *name),
            "common ancestor fallback"
        );
        found.map(|(_, name)| SyntaxTypeNode::fully_qualified(name.trim_start_matches('\\')))
    }

    // --- Doc strings ---

    /// Flat doc string; `parent` is the type `ty` is nested in, if any.
    pub fn to_doc_string(&self, ty: &InferredType, parent: Option<&InferredType>) -> Result<String> {
        let s = match ty {
            InferredType::Union(members) | InferredType::Intersection(members) => {
                let mut parts = IndexSet::new();
                for member in members {
                    parts.insert(self.to_doc_string(member, None)?);
                }
                parts.retain(|part| !part.is_empty());
                let sep = if matches!(ty, InferredType::Intersection(_)) {
                    "&"
                } else {
                    "|"
                };
                join(parts, sep)
            }
            InferredType::Object(object) => self.object_doc_name(object),
            InferredType::ObjectWithoutClass => "object".to_string(),
            InferredType::Closure => self.closure_name(),
            InferredType::Scalar(kind) => kind.name().to_string(),
            InferredType::Null => "null".to_string(),
            InferredType::Mixed | InferredType::Never => "mixed".to_string(),
            InferredType::Callable => "callable".to_string(),
            InferredType::Resource => "resource".to_string(),
            InferredType::Array(item) => match &**item {
                InferredType::Union(members) => {
                    let mut parts = IndexSet::new();
                    for member in members {
                        parts.insert(format!("{}[]", self.to_doc_string(member, Some(ty))?));
                    }
                    join(parts, "|")
                }
                item => {
                    let inner = self.to_doc_string(item, parent)?;
                    let parts = inner
                        .split('|')
                        .filter(|part| !part.is_empty())
                        .map(|part| format!("{part}[]"));
                    join(parts, "|")
                }
            },
            InferredType::Void if self.supports(VersionFeature::ScalarTypes) => String::new(),
            InferredType::Void => "void".to_string(),
            InferredType::Iterable(_) if self.supports(VersionFeature::ScalarTypes) => {
                String::new()
            }
            InferredType::Iterable(_) => "iterable".to_string(),
            InferredType::StaticRef(_) => return Err(unsupported("to_doc_string", ty)),
        };
        Ok(s)
    }

    /// Object name as documented: aliases stay bare, resolved names get the
    /// namespace root.
    fn object_doc_name(&self, object: &ObjectType) -> String {
        match object {
            ObjectType::Aliased { alias, .. } => alias.clone(),
            ObjectType::Shortened { full, .. } => rooted(full),
            ObjectType::FullyQualified(name) => rooted(name),
            ObjectType::Named(name) | ObjectType::SelfRef(name) => {
                if self.symbols.exists(name) {
                    rooted(name)
                } else {
                    name.clone()
                }
            }
        }
    }

    fn closure_name(&self) -> String {
        rooted(&self.config.closure_class)
    }
}

fn object_syntax_node(object: &ObjectType) -> Option<SyntaxTypeNode> {
    let name = object.identity().trim_start_matches('\\');
    match name.to_ascii_lowercase().as_str() {
        "callable" => Some(SyntaxTypeNode::identifier("callable")),
        "self" => Some(SyntaxTypeNode::identifier("self")),
        "static" | "mixed" => None,
        _ => Some(SyntaxTypeNode::fully_qualified(name)),
    }
}

/// The non-null member of a two-member union holding exactly one `null`.
fn nullable_inner(members: &[InferredType]) -> Option<&InferredType> {
    match members {
        [InferredType::Null, other] | [other, InferredType::Null] if !other.is_null() => Some(other),
        _ => None,
    }
}

fn rooted(name: &str) -> String {
    format!("\\{}", name.trim_start_matches('\\'))
}

fn join(parts: impl IntoIterator<Item = String>, sep: &str) -> String {
    parts.into_iter().collect::<Vec<_>>().join(sep)
}

fn unsupported(operation: &'static str, ty: &InferredType) -> Error {
    tracing::debug!(operation, ty = %ty, "unsupported type");
    Error::UnsupportedType {
        operation,
        kind: ty.kind(),
    }
}
