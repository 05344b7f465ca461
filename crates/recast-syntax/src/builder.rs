//! Green tree construction.
//!
//! `TreeBuilder` wraps Rowan's `GreenNodeBuilder` with closure-scoped nodes and
//! shorthands for the common statement and expression shapes. Whitespace is
//! inserted the way the printer would lay the code out, so `text()` of a built
//! tree reads like source.

use rowan::{GreenNode, GreenNodeBuilder};

use crate::cst::{SyntaxKind, SyntaxNode};

use SyntaxKind::*;

pub struct TreeBuilder {
    builder: GreenNodeBuilder<'static>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
        }
    }

    /// Build a `Root` node holding the statements emitted by `f`.
    pub fn root(f: impl FnOnce(&mut Self)) -> SyntaxNode {
        let mut b = Self::new();
        b.node(Root, f);
        b.finish()
    }

    pub fn finish(self) -> SyntaxNode {
        SyntaxNode::new_root(self.finish_green())
    }

    pub fn finish_green(self) -> GreenNode {
        self.builder.finish()
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    pub fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        self.builder.token(kind.into(), text);
        self
    }

    /// Open `kind`, run `f` for its children, close it.
    pub fn node(&mut self, kind: SyntaxKind, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.start_node(kind);
        f(self);
        self.finish_node();
        self
    }

    pub fn ws(&mut self) -> &mut Self {
        self.token(Whitespace, " ")
    }

    pub fn newline(&mut self) -> &mut Self {
        self.token(Newline, "\n")
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.token(Comment, text)
    }

    // --- Leaves ---

    pub fn name(&mut self, text: &str) -> &mut Self {
        self.node(Name, |b| {
            b.token(Ident, text);
        })
    }

    /// `$name`; the sigil is added.
    pub fn variable(&mut self, name: &str) -> &mut Self {
        self.node(Variable, |b| {
            b.token(VarName, &format!("${name}"));
        })
    }

    pub fn int(&mut self, value: i64) -> &mut Self {
        self.node(Literal, |b| {
            b.token(IntNumber, &value.to_string());
        })
    }

    pub fn string(&mut self, value: &str) -> &mut Self {
        self.node(Literal, |b| {
            b.token(StringLiteral, &format!("'{value}'"));
        })
    }

    pub fn const_fetch(&mut self, name: &str) -> &mut Self {
        self.node(ConstFetch, |b| {
            b.name(name);
        })
    }

    // --- Expressions ---

    pub fn assign(
        &mut self,
        target: impl FnOnce(&mut Self),
        value: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.node(Assign, |b| {
            target(b);
            b.ws().token(Equals, "=").ws();
            value(b);
        })
    }

    pub fn binary(
        &mut self,
        lhs: impl FnOnce(&mut Self),
        op: &str,
        rhs: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.node(BinaryOp, |b| {
            lhs(b);
            b.ws().token(Operator, op).ws();
            rhs(b);
        })
    }

    pub fn property_fetch(&mut self, var: &str, property: &str) -> &mut Self {
        self.node(PropertyFetch, |b| {
            b.variable(var).token(Arrow, "->").name(property);
        })
    }

    pub fn method_call(
        &mut self,
        receiver: impl FnOnce(&mut Self),
        method: &str,
        args: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.node(MethodCall, |b| {
            receiver(b);
            b.token(Arrow, "->").name(method).args(args);
        })
    }

    pub fn static_call(
        &mut self,
        class: &str,
        method: &str,
        args: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.node(StaticCall, |b| {
            b.name(class).token(DoubleColon, "::").name(method).args(args);
        })
    }

    pub fn func_call(&mut self, name: &str, args: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(FuncCall, |b| {
            b.name(name).args(args);
        })
    }

    pub fn new_object(&mut self, class: &str, args: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(New, |b| {
            b.token(KwNew, "new").ws().name(class).args(args);
        })
    }

    /// `new class { ... }`
    pub fn new_anonymous_class(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(New, |b| {
            b.token(KwNew, "new").ws();
            b.class(None, body);
        })
    }

    pub fn closure(
        &mut self,
        params: impl FnOnce(&mut Self),
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.node(Closure, |b| {
            b.token(KwFunction, "function").params(params).ws().block(body);
        })
    }

    /// Argument list; every expression emitted by `f` should be wrapped via `arg`.
    pub fn args(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(ArgList, |b| {
            b.token(ParenOpen, "(");
            f(b);
            b.token(ParenClose, ")");
        })
    }

    pub fn arg(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(Arg, f)
    }

    pub fn comma(&mut self) -> &mut Self {
        self.token(Comma, ",").ws()
    }

    // --- Statements ---

    pub fn expr_stmt(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(ExpressionStmt, |b| {
            f(b);
            b.token(Semicolon, ";").newline();
        })
    }

    /// `$name = <value>;`
    pub fn assign_stmt(&mut self, name: &str, value: impl FnOnce(&mut Self)) -> &mut Self {
        self.expr_stmt(|b| {
            b.assign(|b| { b.variable(name); }, value);
        })
    }

    pub fn return_stmt(&mut self, value: Option<&dyn Fn(&mut Self)>) -> &mut Self {
        self.node(ReturnStmt, |b| {
            b.token(KwReturn, "return");
            if let Some(value) = value {
                b.ws();
                value(b);
            }
            b.token(Semicolon, ";").newline();
        })
    }

    pub fn echo(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(EchoStmt, |b| {
            b.token(KwEcho, "echo").ws();
            f(b);
            b.token(Semicolon, ";").newline();
        })
    }

    pub fn if_stmt(
        &mut self,
        condition: impl FnOnce(&mut Self),
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.node(IfStmt, |b| {
            b.token(KwIf, "if").ws().token(ParenOpen, "(");
            condition(b);
            b.token(ParenClose, ")").ws().block(body).newline();
        })
    }

    pub fn block(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(Block, |b| {
            b.token(BraceOpen, "{").newline();
            f(b);
            b.token(BraceClose, "}");
        })
    }

    pub fn params(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(ParamList, |b| {
            b.token(ParenOpen, "(");
            f(b);
            b.token(ParenClose, ")");
        })
    }

    /// Parameter with an optional pre-built type annotation.
    pub fn param(&mut self, name: &str, ty: Option<&dyn Fn(&mut Self)>) -> &mut Self {
        self.node(Param, |b| {
            if let Some(ty) = ty {
                ty(b);
                b.ws();
            }
            b.variable(name);
        })
    }

    pub fn function(
        &mut self,
        name: &str,
        params: impl FnOnce(&mut Self),
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.node(Function, |b| {
            b.token(KwFunction, "function").ws().name(name);
            b.params(params).ws().block(body).newline();
        })
    }

    pub fn method(
        &mut self,
        name: &str,
        params: impl FnOnce(&mut Self),
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.node(ClassMethod, |b| {
            b.token(KwPublic, "public").ws().token(KwFunction, "function").ws();
            b.name(name).params(params).ws().block(body).newline();
        })
    }

    pub fn property(&mut self, name: &str) -> &mut Self {
        self.node(Property, |b| {
            b.token(KwPublic, "public").ws().variable(name);
            b.token(Semicolon, ";").newline();
        })
    }

    /// Class declaration; `None` builds an anonymous class.
    pub fn class(&mut self, name: Option<&str>, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.class_extending(name, None, body)
    }

    pub fn class_extending(
        &mut self,
        name: Option<&str>,
        parent: Option<&str>,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.node(Class, |b| {
            b.token(KwClass, "class").ws();
            if let Some(name) = name {
                b.name(name).ws();
            }
            if let Some(parent) = parent {
                b.token(KwExtends, "extends").ws().name(parent).ws();
            }
            b.token(BraceOpen, "{").newline();
            body(b);
            b.token(BraceClose, "}").newline();
        })
    }

    pub fn interface(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(Interface, |b| {
            b.token(KwInterface, "interface").ws().name(name).ws();
            b.token(BraceOpen, "{").newline();
            body(b);
            b.token(BraceClose, "}").newline();
        })
    }

    pub fn trait_decl(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.node(Trait, |b| {
            b.token(KwTrait, "trait").ws().name(name).ws();
            b.token(BraceOpen, "{").newline();
            body(b);
            b.token(BraceClose, "}").newline();
        })
    }
}
