use painel_core::theme::THEME;

#[test]
fn tokens_become_css_variables() {
    let vars = THEME.css_variables();
    let lookup = |name: &str| {
        vars.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };

    assert_eq!(lookup("--color-primary"), Some("#2563eb"));
    assert_eq!(lookup("--space-5"), Some("24px"));
    assert_eq!(lookup("--spacing-unit"), Some("8px"));
    assert_eq!(lookup("--font-weight-headings"), Some("700"));
    assert_eq!(lookup("--radius-lg"), Some("16px"));
    assert_eq!(lookup("--grid-max-width"), Some("1200px"));
}

#[test]
fn root_rule_is_stable() {
    assert_eq!(THEME.root_rule(), THEME.root_rule());
    assert!(THEME.root_rule().starts_with(":root {"));
}
