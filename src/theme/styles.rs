//! Global CSS styles for the Faraón storefront.
//!
//! Light marketplace palette with an amber accent. Injected once from
//! the `App` root via a `style` element.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --surface: #ffffff;
  --surface-muted: #f5f5f4;
  --border: #e5e5e3;

  --accent: #d97706;
  --accent-dark: #b45309;
  --accent-soft: #fef3e2;

  --text-primary: #1f2937;
  --text-secondary: #6b7280;
  --text-muted: #9ca3af;

  --danger: #dc2626;
  --success: #16a34a;

  --shadow-panel: 0 10px 30px rgba(0, 0, 0, 0.12);
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  background: var(--surface-muted);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

button {
  font: inherit;
  background: none;
  border: none;
  cursor: pointer;
  color: inherit;
}

ul { list-style: none; }

/* === Responsive visibility === */
.mobile-only { display: none; }
.desktop-only { display: block; }

@media (max-width: 768px) {
  .mobile-only { display: block; }
  .desktop-only { display: none; }
}

/* === Header === */
.site-header {
  background: var(--surface);
  border-bottom: 1px solid var(--border);
  position: relative;
  z-index: 40;
}

.header-row {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0.9rem 1.25rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.hamburger {
  font-size: 1.4rem;
  color: var(--text-primary);
  padding: 0.25rem 0.5rem;
}

.brand {
  font-size: 1.5rem;
  font-weight: 800;
  color: var(--accent);
}
.brand:hover { color: var(--accent-dark); }

.header-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.header-nav {
  border-top: 1px solid var(--border);
}
.header-nav.desktop-only {
  display: flex;
  align-items: center;
  gap: 1rem;
  max-width: 1100px;
  margin: 0 auto;
  padding: 0.4rem 1.25rem;
}
@media (max-width: 768px) {
  .header-nav.desktop-only { display: none; }
}

.nav-links { display: flex; gap: 0.25rem; }
.nav-link {
  padding: 0.5rem 0.75rem;
  color: var(--text-primary);
  font-weight: 500;
  transition: color var(--transition-fast);
}
.nav-link:hover { color: var(--accent); }

/* === Overlay backdrops === */
.menu-backdrop {
  position: fixed;
  inset: 0;
  z-index: 45;
  background: transparent;
}

/* === Profile menu === */
.profile-menu-root { position: relative; }

.profile-trigger {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.9rem;
  background: var(--accent);
  color: #fff;
  border-radius: 6px;
  transition: background var(--transition-fast);
}
.profile-trigger:hover { background: var(--accent-dark); }
.profile-chevron { font-size: 0.8rem; }

.profile-panel {
  position: absolute;
  right: 0;
  top: calc(100% + 0.5rem);
  width: 16rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
  box-shadow: var(--shadow-panel);
  padding: 0.5rem 0;
  z-index: 50;
}

.profile-panel-header {
  padding: 0.5rem 1rem 0.75rem;
  border-bottom: 1px solid var(--border);
}
.profile-panel-name { font-weight: 600; font-size: 0.9rem; }
.profile-panel-email { font-size: 0.78rem; color: var(--text-secondary); }

.profile-panel-item {
  display: block;
  width: 100%;
  text-align: left;
  padding: 0.55rem 1rem;
  font-size: 0.9rem;
}
.profile-panel-item:hover { background: var(--accent-soft); }
.profile-panel-item.danger { color: var(--danger); }
.profile-panel-item.danger:hover { background: #fee2e2; }

/* === Category dropdown === */
.category-root { position: relative; }

.category-trigger {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.85rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--surface);
  font-weight: 500;
}
.category-trigger:hover { background: var(--surface-muted); }

.dropdown-chevron {
  display: inline-block;
  transition: transform var(--transition-fast);
}
.dropdown-chevron.open { transform: rotate(90deg); }

.category-panel {
  position: absolute;
  left: 0;
  top: calc(100% + 0.5rem);
  width: 38rem;
  max-height: 30rem;
  overflow-y: auto;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
  box-shadow: var(--shadow-panel);
  padding: 1rem;
  z-index: 50;
}

.category-panel-empty {
  color: var(--text-secondary);
  font-size: 0.9rem;
  padding: 0.5rem;
}

.category-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.25rem;
}

.category-column { display: flex; flex-direction: column; gap: 0.4rem; }

.category-name {
  text-align: left;
  font-weight: 600;
  color: var(--text-primary);
}
.category-name:hover { color: var(--accent); }

.subcategory-list { font-size: 0.88rem; color: var(--text-secondary); }
.subcategory-item {
  display: block;
  text-align: left;
  padding: 0.15rem 0;
}
.subcategory-item:hover { color: var(--accent); }

/* === Mobile drawer === */
.drawer-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  visibility: hidden;
  pointer-events: none;
}
.drawer-overlay.open {
  visibility: visible;
  pointer-events: auto;
}

.drawer-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.55);
  opacity: 0;
  transition: opacity var(--transition-normal);
}
.drawer-overlay.open .drawer-backdrop { opacity: 1; }

.drawer-panel {
  position: relative;
  width: 85%;
  max-width: 21rem;
  height: 100%;
  background: var(--surface);
  display: flex;
  flex-direction: column;
  overflow-y: auto;
  transform: translateX(-100%);
  transition: transform var(--transition-normal);
}
.drawer-overlay.open .drawer-panel { transform: translateX(0); }

.drawer-header {
  background: var(--surface-muted);
  padding: 1rem;
  border-bottom: 1px solid var(--border);
}
.drawer-header-row {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
}
.drawer-greeting { font-size: 1.05rem; font-weight: 700; }
.drawer-close { font-size: 1.4rem; color: var(--text-secondary); }
.drawer-close:hover { color: var(--text-primary); }

.role-badge {
  display: inline-block;
  margin-top: 0.35rem;
  padding: 0.1rem 0.5rem;
  font-size: 0.7rem;
  font-weight: 700;
  color: var(--accent-dark);
  background: var(--accent-soft);
  border: 1px solid var(--accent);
  border-radius: 4px;
}

.drawer-links {
  padding: 0.5rem 0;
  border-bottom: 1px solid var(--border);
}
.drawer-link {
  display: block;
  width: 100%;
  text-align: left;
  padding: 0.7rem 1.25rem;
}
.drawer-link:hover { background: var(--surface-muted); }
.drawer-link.danger { color: var(--danger); }

.drawer-categories { flex: 1; padding: 0.75rem 0; }
.drawer-section-title {
  padding: 0 1.25rem 0.5rem;
  font-size: 0.72rem;
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--text-muted);
}
.drawer-loading {
  padding: 0.5rem 1.25rem;
  font-size: 0.88rem;
  color: var(--text-secondary);
}

.accordion-section { border-bottom: 1px solid var(--surface-muted); }
.accordion-row {
  display: flex;
  width: 100%;
  align-items: center;
  justify-content: space-between;
  padding: 0.7rem 1.25rem;
  font-weight: 500;
}
.accordion-row:hover { background: var(--surface-muted); }
.accordion-row.expanded { color: var(--accent); }
.accordion-chevron { font-size: 0.85rem; color: var(--text-muted); }

.accordion-panel {
  background: var(--surface-muted);
  padding: 0.5rem 1.25rem 0.9rem;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}
.accordion-view-all {
  text-align: left;
  font-size: 0.88rem;
  font-weight: 600;
}
.accordion-subcategory {
  text-align: left;
  font-size: 0.85rem;
  color: var(--text-secondary);
  padding-left: 0.5rem;
}
.accordion-subcategory:hover { color: var(--accent); }

.drawer-footer {
  background: var(--surface-muted);
  border-top: 1px solid var(--border);
  padding: 0.5rem 0;
}

/* === Toasts === */
.toast-region {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.toast {
  min-width: 14rem;
  max-width: 22rem;
  text-align: left;
  padding: 0.65rem 1rem;
  border-radius: 6px;
  color: #fff;
  font-size: 0.9rem;
  box-shadow: var(--shadow-panel);
}
.toast-success { background: var(--success); }
.toast-error { background: var(--danger); }

/* === Pages === */
.page-body {
  max-width: 1100px;
  margin: 0 auto;
  padding: 1.5rem 1.25rem;
}

.page-title { font-size: 1.5rem; margin-bottom: 0.75rem; }
.page-hint { color: var(--text-secondary); }

.hero { text-align: center; padding: 4rem 1rem; }
.hero-title { font-size: 2.2rem; color: var(--accent-dark); }
.hero-subtitle { margin: 0.75rem 0 1.5rem; color: var(--text-secondary); }
.hero-cta {
  padding: 0.7rem 1.5rem;
  background: var(--accent);
  color: #fff;
  border-radius: 6px;
  font-weight: 600;
}
.hero-cta:hover { background: var(--accent-dark); }

.filter-chips { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.filter-chip {
  padding: 0.25rem 0.7rem;
  background: var(--accent-soft);
  border: 1px solid var(--accent);
  color: var(--accent-dark);
  border-radius: 999px;
  font-size: 0.82rem;
}

.contact-list { margin-top: 0.75rem; color: var(--text-secondary); }
.contact-list li { padding: 0.2rem 0; }

.profile-details { display: grid; grid-template-columns: 8rem 1fr; row-gap: 0.4rem; }
.profile-details dt { font-weight: 600; }
.profile-details dd { color: var(--text-secondary); }
"#;
