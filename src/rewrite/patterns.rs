//! The two textual import patterns and their substitution.
//!
//! Matching is context-blind: an alias specifier inside a comment or a
//! string literal is rewritten the same as a real import.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// Compiled patterns for one alias token.
#[derive(Debug, Clone)]
pub struct ImportPatterns {
    from_specifier: Regex,
    dynamic_import: Regex,
}

impl ImportPatterns {
    /// Compile the patterns for `alias`, which is matched literally.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new(alias: &str) -> Result<Self, regex::Error> {
        let alias = regex::escape(alias);
        Ok(Self {
            from_specifier: Regex::new(&format!(r#"\bfrom\s*["']{alias}(.*?)["']"#))?,
            dynamic_import: Regex::new(&format!(r#"import\(\s*["']{alias}(.*?)["']\s*\)"#))?,
        })
    }

    /// Replace the alias with `prefix` in `from "…"` specifiers, then in
    /// `import("…")` calls. Output always uses double quotes.
    ///
    /// Returns the input borrowed when neither pattern matched.
    #[must_use]
    pub fn apply<'a>(&self, content: &'a str, prefix: &str) -> Cow<'a, str> {
        let stage = self
            .from_specifier
            .replace_all(content, |caps: &Captures<'_>| format!("from \"{prefix}{}\"", &caps[1]));

        let dynamic = match self
            .dynamic_import
            .replace_all(&stage, |caps: &Captures<'_>| format!("import(\"{prefix}{}\")", &caps[1]))
        {
            Cow::Owned(rewritten) => Some(rewritten),
            Cow::Borrowed(_) => None,
        };
        dynamic.map_or(stage, Cow::Owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(content: &str, prefix: &str) -> String {
        ImportPatterns::new("@/").unwrap().apply(content, prefix).into_owned()
    }

    #[test]
    fn single_quotes_become_double() {
        assert_eq!(
            apply("import Button from '@/components/Button';", "../../"),
            "import Button from \"../../components/Button\";"
        );
    }

    #[test]
    fn dynamic_import_at_root() {
        assert_eq!(
            apply("const h = await import(\"@/utils/helpers\");", "./"),
            "const h = await import(\"./utils/helpers\");"
        );
    }

    #[test]
    fn from_tolerates_newlines_and_tabs() {
        assert_eq!(
            apply("import {\n  a,\n} from\n\t  '@/lib/a';", "../"),
            "import {\n  a,\n} from \"../lib/a\";"
        );
    }

    #[test]
    fn dynamic_import_tolerates_inner_whitespace() {
        assert_eq!(apply("import(\n  '@/pages/x'\n)", "../"), "import(\"../pages/x\")");
    }

    #[test]
    fn capture_stops_at_first_quote() {
        assert_eq!(
            apply("import a from '@/a'; import b from \"@/b\";", "./"),
            "import a from \"./a\"; import b from \"./b\";"
        );
    }

    #[test]
    fn reexports_and_type_imports_are_rewritten() {
        assert_eq!(
            apply("export * from '@/types';\nimport type { T } from \"@/t\";", "../"),
            "export * from \"../types\";\nimport type { T } from \"../t\";"
        );
    }

    #[test]
    fn comments_are_rewritten_too() {
        assert_eq!(apply("// import x from '@/x'", "./"), "// import x from \"./x\"");
    }

    #[test]
    fn relative_and_package_imports_are_left_alone() {
        let src = "import React from 'react';\nimport a from './a';\nimport s from '@scope/pkg';";
        assert!(matches!(ImportPatterns::new("@/").unwrap().apply(src, "../"), Cow::Borrowed(_)));
    }

    #[test]
    fn identifier_ending_in_from_does_not_match() {
        assert_eq!(apply("wherefrom '@/x'", "./"), "wherefrom '@/x'");
    }

    #[test]
    fn alias_is_matched_literally() {
        let patterns = ImportPatterns::new("~.").unwrap();
        assert_eq!(patterns.apply("import a from '~.a'", "./"), "import a from \"./a\"");
        assert_eq!(patterns.apply("import a from '~xa'", "./"), "import a from '~xa'");
    }

    #[test]
    fn prefix_dollar_signs_are_literal() {
        let patterns = ImportPatterns::new("@/").unwrap();
        assert_eq!(patterns.apply("from '@/a'", "$1/"), "from \"$1/a\"");
    }
}
