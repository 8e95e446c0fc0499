//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace `__NAME__` placeholders in `template` with their values.
///
/// Only the template is scanned: placeholder-like text inside an inserted
/// value is never expanded. Unknown placeholders are left as written.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find("__") {
        let after = &rest[start + 2..];
        let Some(len) = after.find("__") else {
            break;
        };
        let key = &after[..len];

        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &after[len + 2..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let out = fill("<a>__X__</a><b>__X__</b>", &[("X", "1")]);
        assert_eq!(out, "<a>1</a><b>1</b>");
    }

    #[test]
    fn test_fill_keys_with_underscores() {
        let out = fill("<d>__PUB_DATE__</d>", &[("PUB_DATE", "now")]);
        assert_eq!(out, "<d>now</d>");
    }

    #[test]
    fn test_fill_does_not_expand_inserted_values() {
        let out = fill("__A__|__B__", &[("A", "__B__"), ("B", "b")]);
        assert_eq!(out, "__B__|b");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        let out = fill("x __NOPE__ __Y__ y", &[("Y", "1")]);
        assert_eq!(out, "x __NOPE__ 1 y");
    }

    #[test]
    fn test_fill_unterminated_marker() {
        assert_eq!(fill("a __b", &[]), "a __b");
    }

    #[test]
    fn test_template_render() {
        struct Name<'a>(&'a str);
        impl TemplateVars for Name<'_> {
            fn apply(&self, content: &str) -> String {
                fill(content, &[("NAME", self.0)])
            }
        }

        const HELLO: Template<Name<'static>> = Template::new("hello __NAME__");
        assert_eq!(HELLO.render(&Name("world")), "hello world");
    }
}
