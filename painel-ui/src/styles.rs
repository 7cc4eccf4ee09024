#![cfg(target_arch = "wasm32")]

use painel_core::theme::THEME;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-painel-ui]";

/// Component CSS. Colours and spacing come from the theme variables.
pub const DEFAULT_STYLES: &str = r#"
body {
  margin: 0;
  font-family: var(--font-family-base);
  font-size: var(--font-size-base);
  font-weight: var(--font-weight-body);
  background: var(--color-background);
  color: var(--color-text);
}

h1, h2, h3 {
  font-weight: var(--font-weight-headings);
}

@keyframes shine {
  to { background-position-x: -200%; }
}

.app-nav {
  background: #343a40;
  padding: 10px 20px;
  display: flex;
  gap: 20px;
}

.app-nav a {
  color: #ffffff;
  text-decoration: none;
  font-size: 18px;
  font-weight: bold;
  opacity: 0.75;
}

.app-nav a.is-active {
  opacity: 1;
  border-bottom: 2px solid var(--color-secondary);
}

.dashboard {
  max-width: var(--grid-max-width);
  margin: 0 auto;
  padding: var(--space-5);
}

.stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.filter-panel {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  gap: var(--space-4);
  background: var(--color-surface);
  border: 1px solid var(--color-border);
  border-radius: var(--radius-md);
  padding: var(--space-4);
}

.filter-panel__group {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
}

.filter-panel__label {
  font-size: 0.85rem;
  color: var(--color-muted);
}

.filter-panel__input {
  border: 1px solid var(--color-border);
  border-radius: var(--radius-sm);
  padding: var(--space-2) var(--space-3);
  font: inherit;
}

.btn {
  border: none;
  border-radius: var(--radius-sm);
  padding: var(--space-2) var(--space-4);
  font: inherit;
  cursor: pointer;
}

.btn--primary {
  background: var(--color-primary);
  color: #ffffff;
}

.form-error {
  color: var(--color-danger);
  font-size: 0.85rem;
}

.kpi-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
}

.kpi-card {
  background: var(--color-surfaceMuted);
  border-radius: var(--radius-sm);
  padding: var(--space-5);
  margin: 10px;
  text-align: center;
  box-shadow: var(--shadow-soft);
  min-width: 200px;
}

.kpi-card__title {
  font-size: 16px;
  color: var(--color-muted);
  margin-bottom: 10px;
}

.kpi-card__value {
  font-size: 32px;
  font-weight: bold;
  color: var(--color-text);
  margin: 0;
}

.card {
  background: var(--color-surface);
  border: 1px solid var(--color-border);
  border-radius: var(--radius-md);
  padding: var(--space-4);
  box-shadow: var(--shadow-soft);
}

.card--error {
  border-color: var(--color-danger);
}

.card--error .card__title {
  color: var(--color-danger);
  margin: 0 0 var(--space-2);
}

.card__message {
  margin: 0;
  word-break: break-word;
}

.empty-state {
  padding: var(--space-6);
  text-align: center;
  color: var(--color-muted);
  background: var(--color-surfaceMuted);
  border: 1px dashed var(--color-border);
  border-radius: var(--radius-md);
}

.skeleton,
.loading-block {
  background: linear-gradient(90deg, #f0f0f0 25%, #e0e0e0 50%, #f0f0f0 75%);
  background-size: 200% 100%;
  animation: shine 1.5s infinite;
  border-radius: var(--radius-sm);
  width: 100%;
}

.skeleton--sm { min-height: 48px; }
.skeleton--md { min-height: 120px; }
.skeleton--lg { min-height: 260px; }

.chart-card {
  background: var(--color-surface);
  border-radius: var(--radius-sm);
  padding: var(--space-5);
  margin-top: var(--space-5);
}

.chart-card__title {
  margin: 0 0 var(--space-3);
  font-size: 18px;
  text-align: center;
}

.chart-card svg {
  width: 100%;
  height: auto;
  overflow: visible;
}

.chart-axis line,
.chart-grid line {
  stroke: var(--color-border);
}

.chart-axis text {
  fill: var(--color-muted);
  font-size: 11px;
}

.chart-legend {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-3);
  font-size: 0.85rem;
  margin-bottom: var(--space-2);
}

.chart-legend__swatch {
  display: inline-block;
  width: 12px;
  height: 12px;
  border-radius: 3px;
  margin-right: 6px;
  vertical-align: middle;
}

.assistencial-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(400px, 1fr));
  gap: 40px;
  margin-top: var(--space-5);
}

.territorial-layout {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: var(--space-5);
  margin-top: var(--space-5);
}

.tile-map {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius-md);
  background: #aad3df;
}

.tile-map__tile {
  position: absolute;
  width: 256px;
  height: 256px;
  user-select: none;
}

.tile-map__marker {
  position: absolute;
  width: 14px;
  height: 14px;
  margin: -14px 0 0 -7px;
  border-radius: 50% 50% 50% 0;
  transform: rotate(-45deg);
  background: var(--color-primary);
  border: 2px solid #ffffff;
  cursor: pointer;
}

.tile-map__attribution {
  position: absolute;
  right: 0;
  bottom: 0;
  font-size: 11px;
  padding: 2px 6px;
  background: rgba(255, 255, 255, 0.8);
}

.table-wrapper {
  margin-top: var(--space-5);
}

.table-wrapper--scroll {
  max-height: 500px;
  overflow-y: auto;
}

.data-table {
  width: 100%;
  border-collapse: collapse;
  font-size: 14px;
}

.data-table th {
  background: #e9ecef;
  color: #495057;
  padding: 12px;
  border: 1px solid #dee2e6;
  text-align: left;
}

.data-table td {
  padding: 12px;
  border: 1px solid #dee2e6;
}
"#;

/// Inject theme variables and component CSS once. Calling it again is a no-op.
pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Documento sem elemento <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-painel-ui", "v1")?;
    style_el.set_text_content(Some(&format!("{}\n{DEFAULT_STYLES}", THEME.root_rule())));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
