use crate::domain::value_objects::FeatureName;

/// Context for template rendering.
///
/// A **Value Object** holding the placeholder values derived from one
/// feature name. Immutable after creation.
///
/// ## Built-in Variables
///
/// | Placeholder | Example  | Source                  |
/// |-------------|----------|-------------------------|
/// | `{feature}` | "wallet" | User input, lower-cased |
/// | `{Feature}` | "Wallet" | First letter upper-cased |
///
/// Substitution is applied in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    feature: FeatureName,
    variables: Vec<(String, String)>,
}

impl RenderContext {
    pub const FEATURE: &'static str = "{feature}";
    pub const FEATURE_CAPITALIZED: &'static str = "{Feature}";

    pub fn new(feature: &FeatureName) -> Self {
        let variables = vec![
            (Self::FEATURE.to_string(), feature.as_str().to_string()),
            (Self::FEATURE_CAPITALIZED.to_string(), feature.capitalized()),
        ];

        Self {
            feature: feature.clone(),
            variables,
        }
    }

    pub fn feature(&self) -> &FeatureName {
        &self.feature
    }

    /// Value for a placeholder token, braces included.
    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(key, _)| key == placeholder)
            .map(|(_, value)| value.as_str())
    }

    /// Replace every placeholder in a template body.
    ///
    /// # Edge Cases
    ///
    /// - `{unknown}` → left as-is
    /// - `${{Feature}Router.basePath}` → `${WalletRouter.basePath}`
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            result = result.replace(key.as_str(), value);
        }
        result
    }

    /// Substitute a path segment. Only `{feature}` is meaningful in names.
    pub fn render_name(&self, name: &str) -> String {
        name.replace(Self::FEATURE, self.feature.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::NameStrictness;

    fn ctx(name: &str) -> RenderContext {
        RenderContext::new(&FeatureName::parse(name, NameStrictness::Permissive).unwrap())
    }

    #[test]
    fn standard_variables() {
        let ctx = ctx("wallet");
        assert_eq!(ctx.get("{feature}"), Some("wallet"));
        assert_eq!(ctx.get("{Feature}"), Some("Wallet"));
        assert_eq!(ctx.get("{FEATURE}"), None);
    }

    #[test]
    fn renders_nested_braces() {
        let out = ctx("wallet").render("'${{Feature}Router.basePath}/$routePath'");
        assert_eq!(out, "'${WalletRouter.basePath}/$routePath'");
    }

    #[test]
    fn unknown_placeholders_survive() {
        assert_eq!(ctx("wallet").render("{other} {feature}"), "{other} wallet");
    }

    #[test]
    fn names_only_substitute_lowercase_token() {
        let ctx = ctx("wallet");
        assert_eq!(ctx.render_name("_{feature}.dart"), "_wallet.dart");
        assert_eq!(ctx.render_name("{Feature}.dart"), "{Feature}.dart");
    }

    #[test]
    fn placeholder_like_names_are_written_literally() {
        // Lower-casing turns "{Feature}" into "{feature}".
        let ctx = ctx("{Feature}");
        assert_eq!(ctx.render("{feature}"), "{feature}");
    }
}
