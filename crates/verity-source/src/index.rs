//! Index of the call expressions in one source file.

use proc_macro2::LineColumn;
use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::visit::{self, Visit};
use syn::{Expr, ExprCall, ExprMethodCall, Macro, Token};

use crate::render::{token_extent, SourceText};

/// One argument of a located call, as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArg {
    text: String,
    nested: Option<Vec<String>>,
}

impl CallArg {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Arguments of this argument when it is itself a call expression.
    #[must_use]
    pub fn nested_args(&self) -> Option<&[String]> {
        self.nested.as_deref()
    }
}

/// A call, method call or macro invocation with its rendered arguments.
///
/// Method calls are positioned at the method name and exclude the receiver;
/// calls and macro invocations are positioned at the start of their path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    line: u32,
    column: u32,
    args: Vec<CallArg>,
}

impl CallExpr {
    /// 1-based line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column in the units of `Location::column`, where tabs and
    /// wide characters count more than one.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    #[must_use]
    pub fn args(&self) -> &[CallArg] {
        &self.args
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceIndex {
    calls: Vec<CallExpr>,
}

impl SourceIndex {
    pub fn parse(source: &str) -> syn::Result<Self> {
        let file = syn::parse_file(source)?;
        let text = SourceText::new(source);
        let mut collector = Collector {
            text: &text,
            calls: Vec::new(),
        };
        collector.visit_file(&file);
        let mut calls = collector.calls;
        calls.sort_by_key(|call| (call.line, call.column));
        Ok(Self { calls })
    }

    /// Calls ordered by position.
    #[must_use]
    pub fn calls(&self) -> &[CallExpr] {
        &self.calls
    }

    /// The call starting exactly at `line`/`column`, else the call on `line`
    /// starting nearest to `column`.
    #[must_use]
    pub fn call_at(&self, line: u32, column: u32) -> Option<&CallExpr> {
        self.calls
            .iter()
            .filter(|call| call.line == line)
            .min_by_key(|call| call.column.abs_diff(column))
    }
}

struct Collector<'a> {
    text: &'a SourceText<'a>,
    calls: Vec<CallExpr>,
}

impl Collector<'_> {
    fn record<'e>(&mut self, start: LineColumn, args: impl IntoIterator<Item = &'e Expr>) {
        let args: Vec<CallArg> = args.into_iter().map(|arg| self.call_arg(arg)).collect();
        let column = self
            .text
            .display_column(start)
            .unwrap_or_else(|| start.column.saturating_add(1));
        self.calls.push(CallExpr {
            line: saturating_u32(start.line),
            column: saturating_u32(column),
            args,
        });
    }

    fn call_arg(&self, expr: &Expr) -> CallArg {
        let nested = match expr {
            Expr::Call(call) => Some(call.args.iter().map(|arg| self.text.render(arg)).collect()),
            _ => None,
        };
        CallArg {
            text: self.text.render(expr),
            nested,
        }
    }
}

impl<'ast> Visit<'ast> for Collector<'_> {
    fn visit_expr_call(&mut self, call: &'ast ExprCall) {
        if let Some((start, _)) = token_extent(call.func.to_token_stream()) {
            self.record(start, &call.args);
        }
        visit::visit_expr_call(self, call);
    }

    fn visit_expr_method_call(&mut self, call: &'ast ExprMethodCall) {
        self.record(call.method.span().start(), &call.args);
        visit::visit_expr_method_call(self, call);
    }

    fn visit_macro(&mut self, mac: &'ast Macro) {
        // Bodies that are not an expression list (`vec![0; n]`, `macro_rules!`)
        // cannot be assertion calls.
        if let Ok(args) = mac.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
            if let Some((start, _)) = token_extent(mac.path.to_token_stream()) {
                self.record(start, &args);
            }
            for arg in &args {
                self.visit_expr(arg);
            }
        }
        visit::visit_macro(self, mac);
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
