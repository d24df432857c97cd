//! Global CSS for the MegiLance desktop client.
//!
//! Each themed component has a common class (layout, structure) and two
//! overlays, `<base>--light` and `<base>--dark`. The overlays only bind the
//! local color variables the common rules read, so exactly one of them is
//! ever in effect. Palette values come from `colors.rs`.

pub const GLOBAL_STYLES: &str = r#"
/* === Theme Overlays === */
.app-shell--light,
.accordion--light, .alert--light, .announcement--light, .avatar--light,
.badge--light, .dropdown--light, .loader--light, .modal--light,
.pagination--light, .payment-badge--light, .placeholder-page--light,
.preview-ribbon--light, .profile-menu--light, .progress-bar--light,
.rank-gauge--light, .sentiment--light, .tabs--light, .tag-input--light,
.theme-switcher--light, .toast--light, .tooltip--light {
  --bg: var(--light-background);
  --surface: var(--light-surface);
  --surface-raised: var(--light-surface-raised);
  --border: var(--light-border);
  --text: var(--light-text);
  --text-muted: var(--light-text-muted);
  --primary: var(--light-primary);
  --primary-text: var(--light-primary-text);
  --success: var(--light-success);
  --warning: var(--light-warning);
  --danger: var(--light-danger);
  --info: var(--light-info);
  --overlay: var(--light-overlay);
  --shadow: 0 4px 16px rgba(26, 29, 41, 0.08);
}

.app-shell--dark,
.accordion--dark, .alert--dark, .announcement--dark, .avatar--dark,
.badge--dark, .dropdown--dark, .loader--dark, .modal--dark,
.pagination--dark, .payment-badge--dark, .placeholder-page--dark,
.preview-ribbon--dark, .profile-menu--dark, .progress-bar--dark,
.rank-gauge--dark, .sentiment--dark, .tabs--dark, .tag-input--dark,
.theme-switcher--dark, .toast--dark, .tooltip--dark {
  --bg: var(--dark-background);
  --surface: var(--dark-surface);
  --surface-raised: var(--dark-surface-raised);
  --border: var(--dark-border);
  --text: var(--dark-text);
  --text-muted: var(--dark-text-muted);
  --primary: var(--dark-primary);
  --primary-text: var(--dark-primary-text);
  --success: var(--dark-success);
  --warning: var(--dark-warning);
  --danger: var(--dark-danger);
  --info: var(--dark-info);
  --overlay: var(--dark-overlay);
  --shadow: 0 4px 20px rgba(0, 0, 0, 0.45);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  font-size: 15px;
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.45;
}

a { color: inherit; }

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}

/* === App Chrome === */
.key-scope { display: contents; }

.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  background: var(--bg);
  color: var(--text);
  transition: background 200ms ease, color 200ms ease;
}

.app-shell--pending {
  min-height: 100vh;
}

.app-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1.5rem;
  border-bottom: 1px solid var(--border);
  background: var(--surface);
}

.app-header__brand {
  font-weight: 700;
  font-size: 1.15rem;
  text-decoration: none;
  color: var(--primary);
}

.app-header__nav {
  display: flex;
  gap: 1rem;
  flex: 1;
}

.app-header__nav a {
  text-decoration: none;
  color: var(--text-muted);
}

.app-header__nav a:hover { color: var(--text); }

.app-body {
  display: flex;
  flex: 1;
}

.app-sidebar {
  width: 220px;
  padding: 1rem 0.75rem;
  border-right: 1px solid var(--border);
  background: var(--surface);
  display: flex;
  flex-direction: column;
  gap: 0.15rem;
}

.app-sidebar__role {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
  padding: 0.25rem 0.75rem 0.5rem;
}

.app-sidebar a {
  padding: 0.45rem 0.75rem;
  border-radius: 6px;
  text-decoration: none;
  color: var(--text-muted);
}

.app-sidebar a.active,
.app-sidebar a:hover {
  background: var(--surface-raised);
  color: var(--text);
}

.app-main {
  flex: 1;
  padding: 1.5rem 2rem;
  overflow-y: auto;
}

/* === Pages === */
.page {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  max-width: 1100px;
}

.page__title {
  font-size: 1.6rem;
  font-weight: 700;
}

.page__subtitle { color: var(--text-muted); }

.page__toolbar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
}

.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.25rem;
  box-shadow: var(--shadow);
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1rem;
}

.metric__label {
  font-size: 0.8rem;
  color: var(--text-muted);
}

.metric__value {
  font-size: 1.5rem;
  font-weight: 700;
}

.hero {
  padding: 3rem 0 2rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.hero__title {
  font-size: 2.4rem;
  font-weight: 800;
  line-height: 1.15;
}

.hero__actions {
  display: flex;
  gap: 0.75rem;
}

/* === Forms and Tables === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.5rem 1rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
  text-decoration: none;
}

.btn--primary {
  background: var(--primary);
  border-color: var(--primary);
  color: var(--primary-text);
}

.field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.field__label {
  font-size: 0.85rem;
  font-weight: 600;
}

.input, .select, .textarea {
  font: inherit;
  padding: 0.5rem 0.75rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
}

.textarea { min-height: 120px; resize: vertical; }

.table {
  width: 100%;
  border-collapse: collapse;
}

.table th, .table td {
  text-align: left;
  padding: 0.6rem 0.75rem;
  border-bottom: 1px solid var(--border);
}

.table th {
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.04em;
  color: var(--text-muted);
}

.table tr.selected td { background: var(--surface-raised); }

.table__empty { text-align: center; color: var(--text-muted); }

.toolbar {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.toolbar .input { flex: 1; }

.form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form__row { display: flex; gap: 0.75rem; flex-wrap: wrap; }

.metric { display: flex; flex-direction: column; gap: 0.4rem; }
.metric__label { font-size: 0.85rem; color: var(--text-muted); }
.metric__value { font-size: 1.6rem; font-weight: 700; }

.review-list {
  list-style: none;
  padding: 0;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.review__header { display: flex; align-items: center; gap: 0.6rem; }

.rank { display: flex; gap: 2rem; align-items: center; }
.rank__factors { flex: 1; display: flex; flex-direction: column; gap: 0.75rem; }

.export-columns { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 0.75rem; }

.modal__actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
  margin-top: 1rem;
}

.csv-preview {
  font-family: 'JetBrains Mono', 'SF Mono', monospace;
  font-size: 0.8rem;
  white-space: pre;
  overflow-x: auto;
  padding: 0.75rem;
  border-radius: 8px;
  background: var(--surface-raised);
}

/* === Accordion === */
.accordion {
  border: 1px solid var(--border);
  border-radius: 10px;
  background: var(--surface);
  color: var(--text);
}

.accordion__header {
  width: 100%;
  display: flex;
  justify-content: space-between;
  padding: 0.85rem 1rem;
  font-weight: 600;
}

.accordion__content {
  padding: 0 1rem 1rem;
  color: var(--text-muted);
}

/* === Alert === */
.alert {
  display: flex;
  gap: 0.75rem;
  padding: 0.85rem 1rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  border-left-width: 4px;
  background: var(--surface);
  color: var(--text);
}

.alert--info { border-left-color: var(--info); }
.alert--success { border-left-color: var(--success); }
.alert--warning { border-left-color: var(--warning); }
.alert--danger { border-left-color: var(--danger); }

.alert__body { flex: 1; }
.alert__close { font-size: 1.2rem; color: var(--text-muted); }

/* === Announcement === */
.announcement {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.6rem 1.5rem;
  background: var(--primary);
  color: var(--primary-text);
}

.announcement__message { flex: 1; }

.announcement__cta {
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  border: 1px solid currentColor;
}

.announcement__dismiss { font-size: 1.2rem; }

/* === Avatar === */
.avatar {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  border-radius: 50%;
  overflow: hidden;
  font-size: 0.85rem;
  font-weight: 700;
  background: var(--surface-raised);
  color: var(--primary);
  border: 1px solid var(--border);
}

.avatar__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* === Badges === */
.badge, .payment-badge, .sentiment {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 600;
  border: 1px solid var(--border);
  background: var(--surface-raised);
  color: var(--text);
}

.badge--primary { color: var(--primary); border-color: var(--primary); }
.badge--secondary { color: var(--text-muted); }
.badge--success, .payment-badge--paid, .sentiment--positive {
  color: var(--success);
  border-color: var(--success);
}
.badge--warning, .payment-badge--pending { color: var(--warning); border-color: var(--warning); }
.badge--danger, .payment-badge--failed, .sentiment--negative {
  color: var(--danger);
  border-color: var(--danger);
}
.sentiment--neutral { color: var(--text-muted); }

.payment-badge__dot {
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: currentColor;
}

/* === Dropdown and Profile Menu === */
.dropdown, .profile-menu {
  position: relative;
  display: inline-block;
  color: var(--text);
}

.dropdown__trigger {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
  min-width: 200px;
  padding: 0.5rem 0.75rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--surface);
}

.dropdown__backdrop, .profile-menu__backdrop {
  position: fixed;
  inset: 0;
  z-index: 40;
}

.dropdown__list, .profile-menu__panel {
  position: absolute;
  top: calc(100% + 4px);
  z-index: 50;
  min-width: 100%;
  list-style: none;
  padding: 0.35rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--surface);
  box-shadow: var(--shadow);
}

.profile-menu__panel {
  right: 0;
  min-width: 220px;
  display: flex;
  flex-direction: column;
}

.dropdown__option, .profile-menu__item {
  padding: 0.45rem 0.65rem;
  border-radius: 6px;
  cursor: pointer;
  text-align: left;
}

.dropdown__option:hover, .profile-menu__item:hover,
.dropdown__option.selected {
  background: var(--surface-raised);
}

.profile-menu__header {
  display: flex;
  flex-direction: column;
  padding: 0.5rem 0.65rem;
  border-bottom: 1px solid var(--border);
  margin-bottom: 0.25rem;
}

.profile-menu__subtitle {
  font-size: 0.8rem;
  color: var(--text-muted);
}

/* === Loader === */
.loader {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.3rem;
  color: var(--primary);
}

.loader--xs { --loader-size: 12px; }
.loader--sm { --loader-size: 18px; }
.loader--md { --loader-size: 28px; }
.loader--lg { --loader-size: 40px; }
.loader--xl { --loader-size: 56px; }

.loader--spinner .loader__segment {
  width: var(--loader-size);
  height: var(--loader-size);
  border-radius: 50%;
  border: 3px solid var(--border);
  border-top-color: currentColor;
  animation: loader-spin 0.8s linear infinite;
}

.loader--dots .loader__segment {
  width: calc(var(--loader-size) / 3);
  height: calc(var(--loader-size) / 3);
  border-radius: 50%;
  background: currentColor;
  animation: loader-pulse 1s ease-in-out infinite;
}

.loader--dots .loader__segment:nth-child(2) { animation-delay: 0.15s; }
.loader--dots .loader__segment:nth-child(3) { animation-delay: 0.3s; }

.loader--pulse .loader__segment {
  width: var(--loader-size);
  height: var(--loader-size);
  border-radius: 50%;
  background: currentColor;
  animation: loader-pulse 1.2s ease-in-out infinite;
}

@keyframes loader-spin { to { transform: rotate(360deg); } }
@keyframes loader-pulse {
  0%, 100% { opacity: 0.3; transform: scale(0.8); }
  50% { opacity: 1; transform: scale(1); }
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
}

.modal {
  width: min(560px, 92vw);
  max-height: 85vh;
  overflow-y: auto;
  border-radius: 14px;
  background: var(--surface);
  color: var(--text);
  border: 1px solid var(--border);
  box-shadow: var(--shadow);
  outline: none;
}

.modal__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--border);
}

.modal__title { font-size: 1.15rem; }
.modal__close { font-size: 1.4rem; color: var(--text-muted); }
.modal__body { padding: 1.25rem; }

/* === Pagination === */
.pagination {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--text);
}

.pagination__prev, .pagination__next {
  padding: 0.35rem 0.8rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--surface);
}

.pagination__label { color: var(--text-muted); font-size: 0.9rem; }

/* === Placeholder Pages === */
.placeholder-page {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 2rem;
  border-radius: 14px;
  border: 1px dashed var(--border);
  background: var(--surface);
  color: var(--text);
}

.placeholder-page--empty { align-items: center; text-align: center; }
.placeholder-page__title { font-size: 1.5rem; }
.placeholder-page__description { color: var(--text-muted); }
.placeholder-page__empty-icon { font-size: 2.5rem; color: var(--text-muted); }

.placeholder-page__cta {
  padding: 0.5rem 1.1rem;
  border-radius: 8px;
  background: var(--primary);
  color: var(--primary-text);
}

/* === Preview Ribbon === */
.preview-ribbon {
  position: fixed;
  top: 18px;
  right: -42px;
  z-index: 200;
  width: 160px;
  transform: rotate(45deg);
  text-align: center;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  padding: 0.25rem 0;
  background: var(--warning);
  color: var(--bg);
  pointer-events: none;
}

/* === Progress and Gauge === */
.progress-bar {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  color: var(--text);
}

.progress-bar__header {
  display: flex;
  justify-content: space-between;
  font-size: 0.85rem;
}

.progress-bar__value { color: var(--text-muted); }

.progress-bar__track {
  width: 100%;
  height: 8px;
}

.progress-bar__rail { fill: var(--surface-raised); }
.progress-bar__fill { fill: var(--primary); transition: width 300ms ease; }

.rank-gauge {
  display: inline-flex;
  flex-direction: column;
  align-items: center;
  width: 240px;
  color: var(--text);
}

.rank-gauge svg { width: 100%; }

.rank-gauge__track, .rank-gauge__fill {
  fill: none;
  stroke-width: 8;
  stroke-linecap: round;
}

.rank-gauge__track { stroke: var(--surface-raised); }
.rank-gauge__fill { stroke: var(--primary); }
.rank-gauge__needle { stroke: var(--text); stroke-width: 2; stroke-linecap: round; }
.rank-gauge__hub { fill: var(--text); }

.rank-gauge__caption {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.rank-gauge__score { font-size: 1.8rem; font-weight: 800; }
.rank-gauge__label { font-size: 0.8rem; color: var(--text-muted); }

/* === Tabs === */
.tabs { color: var(--text); }

.tabs__list {
  display: flex;
  gap: 0.25rem;
  border-bottom: 1px solid var(--border);
}

.tabs__tab {
  padding: 0.55rem 1rem;
  color: var(--text-muted);
  border-bottom: 2px solid transparent;
}

.tabs__tab.active {
  color: var(--text);
  border-bottom-color: var(--primary);
}

.tabs__panel { padding-top: 1rem; }

/* === Tag Input === */
.tag-input {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.4rem;
  padding: 0.4rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
}

.tag-input__tags {
  display: contents;
  list-style: none;
}

.tag-input__tag {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  padding: 0.15rem 0.5rem;
  border-radius: 999px;
  background: var(--surface-raised);
  font-size: 0.85rem;
}

.tag-input__remove { color: var(--text-muted); }

.tag-input__field {
  flex: 1;
  min-width: 140px;
  border: none;
  outline: none;
  background: transparent;
  color: inherit;
  font: inherit;
  padding: 0.25rem;
}

/* === Theme Switcher === */
.theme-switcher {
  width: 36px;
  height: 36px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--surface-raised);
  color: var(--text);
  font-size: 1.05rem;
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  z-index: 150;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  width: 340px;
}

.toast {
  display: flex;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  border-left-width: 4px;
  background: var(--surface);
  color: var(--text);
  box-shadow: var(--shadow);
}

.toast--info { border-left-color: var(--info); }
.toast--success { border-left-color: var(--success); }
.toast--warning { border-left-color: var(--warning); }
.toast--error { border-left-color: var(--danger); }

.toast__body { flex: 1; }
.toast__description { font-size: 0.85rem; color: var(--text-muted); }
.toast__close { color: var(--text-muted); }

/* === Tooltip === */
.tooltip-anchor {
  position: relative;
  display: inline-flex;
}

.tooltip {
  position: absolute;
  z-index: 60;
  white-space: nowrap;
  padding: 0.3rem 0.6rem;
  border-radius: 6px;
  font-size: 0.8rem;
  background: var(--text);
  color: var(--surface);
  pointer-events: none;
}

.tooltip--top { bottom: calc(100% + 6px); left: 50%; transform: translateX(-50%); }
.tooltip--bottom { top: calc(100% + 6px); left: 50%; transform: translateX(-50%); }
.tooltip--left { right: calc(100% + 6px); top: 50%; transform: translateY(-50%); }
.tooltip--right { left: calc(100% + 6px); top: 50%; transform: translateY(-50%); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use megilance_core::style::ALL_COMPONENTS;

    #[test]
    fn every_component_has_both_overlays() {
        for &component in ALL_COMPONENTS {
            let entry = component.style();
            assert!(GLOBAL_STYLES.contains(&format!(".{}", entry.light)), "{}", entry.light);
            assert!(GLOBAL_STYLES.contains(&format!(".{}", entry.dark)), "{}", entry.dark);
            assert!(GLOBAL_STYLES.contains(&format!(".{} ", entry.common))
                || GLOBAL_STYLES.contains(&format!(".{},", entry.common)),
                "{}", entry.common);
        }
    }
}
