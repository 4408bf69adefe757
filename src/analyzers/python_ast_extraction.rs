//! Single-pass structural fact extraction over a tree-sitter Python tree.
//!
//! Every node is visited exactly once, in document order, and recognized
//! shapes are turned into [`StructuralFact`]s. Anything else is ignored; this
//! is a lossy extraction, not a semantic model of the program.
//!
//! Call and decorator names are canonicalized through the file's import
//! aliases once the traversal is complete, so `tk.Button` becomes
//! `tkinter.Button` regardless of where in the file the import appears.

use crate::core::{FactKind, FileError, Scope, StructuralFact};
use std::collections::HashMap;
use std::path::Path;
use tree_sitter::Node;

const MAX_DOCSTRING_SUMMARY: usize = 72;

pub struct PythonFactExtractor<'a> {
    source: &'a [u8],
    path: &'a Path,
    max_depth: usize,
    aliases: HashMap<String, String>,
    scopes: Vec<Scope>,
    facts: Vec<StructuralFact>,
}

impl<'a> PythonFactExtractor<'a> {
    pub fn new(source: &'a [u8], path: &'a Path, max_depth: usize) -> Self {
        Self {
            source,
            path,
            max_depth,
            aliases: HashMap::new(),
            scopes: Vec::new(),
            facts: Vec::new(),
        }
    }

    pub fn extract(mut self, root: Node) -> Result<Vec<StructuralFact>, FileError> {
        self.visit(root, 0)?;
        let aliases = std::mem::take(&mut self.aliases);
        Ok(self
            .facts
            .into_iter()
            .map(|fact| canonicalize(fact, &aliases))
            .collect())
    }

    fn visit(&mut self, node: Node, depth: usize) -> Result<(), FileError> {
        if depth > self.max_depth {
            return Err(FileError::TraversalLimitExceeded {
                path: self.path.to_path_buf(),
                limit: self.max_depth,
            });
        }

        if node.is_named() {
            match node.kind() {
                "import_statement" => self.record_import(node),
                "import_from_statement" => self.record_import_from(node),
                "class_definition" => return self.visit_class(node, depth),
                "function_definition" => return self.visit_function(node, depth),
                "decorator" => self.record_decorator(node),
                "call" => self.record_call(node),
                "expression_statement" => self.record_docstring(node),
                kind => {
                    if let Some(construct) = control_construct(kind) {
                        self.push_fact(FactKind::ControlConstruct, construct, node, None);
                    }
                }
            }
        }

        self.visit_children(node, depth)
    }

    fn visit_children(&mut self, node: Node, depth: usize) -> Result<(), FileError> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, depth + 1)?;
        }
        Ok(())
    }

    /// Children of a definition; only the body runs inside the new scope.
    fn visit_scoped(&mut self, node: Node, scope: Scope, depth: usize) -> Result<(), FileError> {
        let body_id = node.child_by_field_name("body").map(|b| b.id());
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if Some(child.id()) == body_id {
                self.scopes.push(scope.clone());
                let result = self.visit(child, depth + 1);
                self.scopes.pop();
                result?;
            } else {
                self.visit(child, depth + 1)?;
            }
        }
        Ok(())
    }

    fn visit_class(&mut self, node: Node, depth: usize) -> Result<(), FileError> {
        let Some(name) = self.field_text(node, "name") else {
            return self.visit_children(node, depth);
        };
        let bases = node.child_by_field_name("superclasses").map(|args| {
            let mut cursor = args.walk();
            args.named_children(&mut cursor)
                .filter_map(|base| self.text(base))
                .map(|base| compact(&base))
                .collect::<Vec<_>>()
                .join(", ")
        });
        let bases = bases.filter(|b| !b.is_empty());

        self.push_fact(FactKind::ClassDef, &name, node, bases);
        self.visit_scoped(node, Scope::class(name), depth)
    }

    fn visit_function(&mut self, node: Node, depth: usize) -> Result<(), FileError> {
        let Some(name) = self.field_text(node, "name") else {
            return self.visit_children(node, depth);
        };
        let is_async = node
            .child(0)
            .is_some_and(|first| !first.is_named() && first.kind() == "async");

        self.push_fact(
            FactKind::FunctionDef,
            &name,
            node,
            is_async.then(|| "async".to_string()),
        );
        self.visit_scoped(node, Scope::function(name), depth)
    }

    fn record_import(&mut self, node: Node) {
        let mut cursor = node.walk();
        let names: Vec<Node> = node.children_by_field_name("name", &mut cursor).collect();
        for name_node in names {
            let (module, alias) = match name_node.kind() {
                "aliased_import" => (
                    self.field_text(name_node, "name"),
                    self.field_text(name_node, "alias"),
                ),
                _ => (self.text(name_node), None),
            };
            let Some(module) = module.map(|m| compact(&m)) else {
                continue;
            };
            if let Some(alias) = alias {
                self.aliases.insert(alias, module.clone());
            }
            self.push_fact(FactKind::Import, top_level(&module), name_node, None);
        }
    }

    fn record_import_from(&mut self, node: Node) {
        let Some(module) = self.field_text(node, "module_name").map(|m| compact(&m)) else {
            return;
        };
        // Relative imports name project modules, not libraries.
        if module.starts_with('.') {
            return;
        }
        self.push_fact(FactKind::Import, top_level(&module), node, None);

        let mut cursor = node.walk();
        let names: Vec<Node> = node.children_by_field_name("name", &mut cursor).collect();
        for name_node in names {
            let (imported, alias) = match name_node.kind() {
                "aliased_import" => (
                    self.field_text(name_node, "name"),
                    self.field_text(name_node, "alias"),
                ),
                _ => (self.text(name_node), None),
            };
            let Some(imported) = imported.map(|i| compact(&i)) else {
                continue;
            };
            let local = alias.unwrap_or_else(|| imported.clone());
            self.aliases
                .insert(local, format!("{module}.{imported}"));
        }
    }

    fn record_decorator(&mut self, node: Node) {
        let Some(expr) = node.named_child(0) else {
            return;
        };
        let target = match expr.kind() {
            "call" => expr.child_by_field_name("function"),
            _ => Some(expr),
        };
        let Some(name) = target.and_then(|t| self.dotted_name(t)) else {
            return;
        };
        let decorated = node
            .parent()
            .and_then(|p| p.child_by_field_name("definition"))
            .and_then(|d| self.field_text(d, "name"));

        self.push_fact(FactKind::Decorator, &name, node, decorated);
    }

    fn record_call(&mut self, node: Node) {
        let Some(name) = node
            .child_by_field_name("function")
            .and_then(|f| self.dotted_name(f))
        else {
            return;
        };
        let target = node
            .child_by_field_name("arguments")
            .and_then(|args| self.keyword_argument(args, "target"));

        self.push_fact(FactKind::Call, &name, node, target);
    }

    fn record_docstring(&mut self, node: Node) {
        if !self.is_docstring_position(node) {
            return;
        }
        let Some(string) = node.named_child(0).filter(|c| c.kind() == "string") else {
            return;
        };
        if node.named_child_count() != 1 {
            return;
        }
        let Some(raw) = self.text(string) else {
            return;
        };
        let summary = docstring_summary(&raw);
        if !summary.is_empty() {
            self.push_fact(FactKind::StringLiteral, &summary, node, None);
        }
    }

    /// First statement of a module, class body or function body.
    fn is_docstring_position(&self, node: Node) -> bool {
        let Some(parent) = node.parent() else {
            return false;
        };
        let owner_ok = match parent.kind() {
            "module" => true,
            "block" => parent.parent().is_some_and(|owner| {
                matches!(owner.kind(), "function_definition" | "class_definition")
            }),
            _ => false,
        };
        if !owner_ok {
            return false;
        }
        let mut cursor = parent.walk();
        let first_statement = parent
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment");
        first_statement.is_some_and(|first| first.id() == node.id())
    }

    fn keyword_argument(&self, args: Node, keyword: &str) -> Option<String> {
        let mut cursor = args.walk();
        let found = args
            .named_children(&mut cursor)
            .filter(|arg| arg.kind() == "keyword_argument")
            .find(|arg| self.field_text(*arg, "name").as_deref() == Some(keyword));
        found
            .and_then(|arg| arg.child_by_field_name("value"))
            .and_then(|value| self.text(value))
            .map(|value| compact(&value))
    }

    /// Dotted name for identifiers and attribute chains; None for anything
    /// computed (subscripts, calls on calls, lambdas).
    fn dotted_name(&self, node: Node) -> Option<String> {
        match node.kind() {
            "identifier" => self.text(node),
            "attribute" => {
                let object = node.child_by_field_name("object")?;
                let attribute = node.child_by_field_name("attribute")?;
                Some(format!(
                    "{}.{}",
                    self.dotted_name(object)?,
                    self.text(attribute)?
                ))
            }
            _ => None,
        }
    }

    fn push_fact(&mut self, kind: FactKind, name: &str, node: Node, detail: Option<String>) {
        let position = node.start_position();
        self.facts.push(
            StructuralFact::new(kind, name, self.path)
                .at(position.row + 1, position.column + 1)
                .in_scope(self.scopes.last().cloned())
                .with_detail(detail),
        );
    }

    fn field_text(&self, node: Node, field: &str) -> Option<String> {
        node.child_by_field_name(field).and_then(|n| self.text(n))
    }

    fn text(&self, node: Node) -> Option<String> {
        node.utf8_text(self.source).ok().map(str::to_string)
    }
}

fn control_construct(kind: &str) -> Option<&'static str> {
    static CONSTRUCTS: &[(&[&str], &str)] = &[
        (&["if_statement"], "if"),
        (&["for_statement"], "for"),
        (&["while_statement"], "while"),
        (&["try_statement"], "try"),
        (&["with_statement"], "with"),
        (&["raise_statement"], "raise"),
        (&["lambda"], "lambda"),
        (
            &[
                "list_comprehension",
                "dictionary_comprehension",
                "set_comprehension",
                "generator_expression",
            ],
            "comprehension",
        ),
        (&["yield"], "yield"),
        (&["await"], "await"),
        (&["match_statement"], "match"),
    ];

    CONSTRUCTS
        .iter()
        .find(|(kinds, _)| kinds.contains(&kind))
        .map(|(_, construct)| *construct)
}

fn canonicalize(mut fact: StructuralFact, aliases: &HashMap<String, String>) -> StructuralFact {
    if matches!(fact.kind, FactKind::Call | FactKind::Decorator) {
        let (head, rest) = match fact.name.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (fact.name.as_str(), None),
        };
        if let Some(resolved) = aliases.get(head) {
            fact.name = match rest {
                Some(rest) => format!("{resolved}.{rest}"),
                None => resolved.clone(),
            };
        }
    }
    fact
}

fn top_level(module: &str) -> &str {
    module.split('.').next().unwrap_or(module)
}

fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn docstring_summary(raw: &str) -> String {
    let body = raw.trim_start_matches(|c: char| "rRbBuUfF".contains(c));
    let body = body
        .trim_start_matches("\"\"\"")
        .trim_start_matches("'''")
        .trim_end_matches("\"\"\"")
        .trim_end_matches("'''")
        .trim_matches(|c| c == '"' || c == '\'');
    let first_line = body.lines().map(str::trim).find(|l| !l.is_empty());
    let summary = first_line.unwrap_or_default();
    if summary.chars().count() > MAX_DOCSTRING_SUMMARY {
        let truncated: String = summary.chars().take(MAX_DOCSTRING_SUMMARY).collect();
        format!("{truncated}...")
    } else {
        summary.to_string()
    }
}
