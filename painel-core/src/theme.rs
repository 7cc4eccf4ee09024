//! Static design tokens, exposed as CSS custom properties.

/// Colour, type, spacing, radius and shadow settings of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeTokens {
    pub palette: &'static [(&'static str, &'static str)],
    pub font_family: &'static str,
    pub font_size_base: &'static str,
    pub font_weight_headings: u16,
    pub font_weight_body: u16,
    pub spacing_unit: u32,
    pub spacing_scale: &'static [(u8, u32)],
    pub radius: &'static [(&'static str, &'static str)],
    pub shadow_soft: &'static str,
    pub grid_max_width: &'static str,
}

pub const THEME: ThemeTokens = ThemeTokens {
    palette: &[
        ("primary", "#2563eb"),
        ("secondary", "#22c55e"),
        ("background", "#f5f7fb"),
        ("surface", "#ffffff"),
        ("surfaceMuted", "#f1f5f9"),
        ("text", "#0f172a"),
        ("muted", "#64748b"),
        ("border", "#e2e8f0"),
        ("danger", "#ef4444"),
        ("warning", "#f59e0b"),
    ],
    font_family: "'Inter', 'Segoe UI', system-ui, -apple-system, sans-serif",
    font_size_base: "16px",
    font_weight_headings: 700,
    font_weight_body: 500,
    spacing_unit: 8,
    spacing_scale: &[(1, 4), (2, 8), (3, 12), (4, 16), (5, 24), (6, 32)],
    radius: &[("sm", "8px"), ("md", "12px"), ("lg", "16px")],
    shadow_soft: "0 10px 30px rgba(15, 23, 42, 0.08)",
    grid_max_width: "1200px",
};

impl ThemeTokens {
    /// `(name, value)` pairs, names including the leading `--`.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::new();
        for (name, value) in self.palette {
            vars.push((format!("--color-{name}"), value.to_string()));
        }
        for (step, px) in self.spacing_scale {
            vars.push((format!("--space-{step}"), format!("{px}px")));
        }
        vars.push(("--spacing-unit".into(), format!("{}px", self.spacing_unit)));
        vars.push(("--font-family-base".into(), self.font_family.to_string()));
        vars.push(("--font-size-base".into(), self.font_size_base.to_string()));
        vars.push((
            "--font-weight-headings".into(),
            self.font_weight_headings.to_string(),
        ));
        vars.push(("--font-weight-body".into(), self.font_weight_body.to_string()));
        for (name, value) in self.radius {
            vars.push((format!("--radius-{name}"), value.to_string()));
        }
        vars.push(("--shadow-soft".into(), self.shadow_soft.to_string()));
        vars.push(("--grid-max-width".into(), self.grid_max_width.to_string()));
        vars
    }

    /// The variables as a `:root { ... }` rule.
    pub fn root_rule(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.css_variables() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}
