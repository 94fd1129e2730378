//! Global CSS styles for the Folio shell.
//!
//! Panel fade and settle timings here pair with the constants in
//! `folio_core::schedule`; change them together.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink: #14161a;
  --ink-raised: #1b1e24;
  --ink-border: #2a2e36;

  /* BONE (Text) */
  --bone: #ece8e1;
  --bone-secondary: rgba(236, 232, 225, 0.72);
  --bone-muted: rgba(236, 232, 225, 0.48);

  /* OCHRE (Accents) */
  --ochre: #d08c2e;
  --ochre-glow: rgba(208, 140, 46, 0.35);

  /* SEMANTIC */
  --problem: #e2634f;

  /* Typography */
  --font-serif: 'Fraunces', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;
  --text-3xl: 3.5rem;

  /* Transitions (panel fade matches the close settle in folio-core) */
  --fade-panel: 320ms ease;
  --fade-quick: 150ms ease;
  --reveal: 700ms cubic-bezier(0.22, 1, 0.36, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--ink);
  color: var(--bone);
  line-height: 1.65;
  min-height: 100vh;
}

/* === Shell === */
.shell {
  min-height: 100vh;
  outline: none;
}

.shell.locked {
  overflow: hidden;
  height: 100vh;
}

/* === Nav Header === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 10;
  padding: 1.25rem 2rem;
  transition: opacity var(--fade-panel);
}

.nav-header.concealed {
  opacity: 0;
  pointer-events: none;
}

.nav-inner {
  max-width: 64rem;
  margin: 0 auto;
  display: flex;
  align-items: baseline;
  justify-content: space-between;
}

.nav-brand {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  letter-spacing: 0.02em;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.btn-nav {
  background: none;
  border: none;
  color: var(--bone-secondary);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  letter-spacing: 0.08em;
  text-transform: uppercase;
  cursor: pointer;
  padding: 0.25rem 0;
  border-bottom: 1px solid transparent;
  transition: color var(--fade-quick), border-color var(--fade-quick);
}

.btn-nav:hover,
.btn-nav.active {
  color: var(--bone);
  border-bottom-color: var(--ochre);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: 6rem 2rem 2rem;
  transition: opacity var(--fade-panel);
}

.hero.concealed {
  opacity: 0;
  pointer-events: none;
}

.hero-inner {
  max-width: 64rem;
  margin: 0 auto;
  width: 100%;
}

.hero-eyebrow,
.hero-name,
.hero-tagline,
.hero-actions {
  opacity: 0;
  transform: translateY(0.75rem);
  transition: opacity var(--reveal), transform var(--reveal);
}

.hero.revealed .hero-eyebrow { opacity: 1; transform: none; }
.hero.revealed .hero-name { opacity: 1; transform: none; transition-delay: 90ms; }
.hero.revealed .hero-tagline { opacity: 1; transform: none; transition-delay: 180ms; }
.hero.revealed .hero-actions { opacity: 1; transform: none; transition-delay: 280ms; }

.hero-eyebrow {
  font-size: var(--text-sm);
  letter-spacing: 0.22em;
  text-transform: uppercase;
  color: var(--bone-muted);
}

.hero-name {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 500;
  margin-top: 0.5rem;
}

.hero-tagline {
  font-size: var(--text-lg);
  color: var(--bone-secondary);
  max-width: 34rem;
  margin-top: 1rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  margin-top: 2.5rem;
}

.hero-footer {
  padding: 1.5rem 0;
  text-align: center;
}

.hero-hint {
  font-size: var(--text-sm);
  color: var(--bone-muted);
}

/* === Buttons === */
.btn-primary {
  background: var(--ochre);
  border: 1px solid var(--ochre);
  color: var(--ink);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  padding: 0.6rem 1.4rem;
  border-radius: 2px;
  cursor: pointer;
  transition: box-shadow var(--fade-quick), transform var(--fade-quick);
}

.btn-primary:hover {
  box-shadow: 0 0 0 3px var(--ochre-glow);
  transform: translateY(-1px);
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--ink-border);
  color: var(--bone-secondary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  padding: 0.6rem 1.4rem;
  border-radius: 2px;
  cursor: pointer;
  transition: border-color var(--fade-quick), color var(--fade-quick);
}

.btn-ghost:hover {
  border-color: var(--ochre);
  color: var(--bone);
}

.btn-back {
  background: none;
  border: none;
  color: var(--bone-secondary);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  letter-spacing: 0.04em;
  cursor: pointer;
  padding: 0.25rem 0;
  transition: color var(--fade-quick);
}

.btn-back:hover {
  color: var(--ochre);
}

.icon-btn {
  background: none;
  border: 1px solid var(--ink-border);
  color: var(--bone-secondary);
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  font-size: var(--text-lg);
  line-height: 1;
  cursor: pointer;
  transition: border-color var(--fade-quick), color var(--fade-quick);
}

.icon-btn:hover {
  border-color: var(--ochre);
  color: var(--bone);
}

/* === Overlay Panels === */
.panel-overlay {
  position: fixed;
  inset: 0;
  z-index: 20;
  background: rgba(20, 22, 26, 0.92);
  backdrop-filter: blur(6px);
  overflow-y: auto;
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--fade-panel), visibility var(--fade-panel);
}

.panel-overlay.active {
  opacity: 1;
  visibility: visible;
}

.panel-overlay.closing {
  opacity: 0;
  visibility: hidden;
  pointer-events: none;
}

.panel-content {
  max-width: 44rem;
  margin: 0 auto;
  padding: 5rem 2rem 4rem;
  opacity: 0;
  transform: translateY(1rem);
  transition: opacity var(--fade-panel), transform var(--fade-panel);
}

.panel-overlay.active .panel-content {
  opacity: 1;
  transform: none;
}

.panel-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 2rem;
}

.panel-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 500;
}

.panel-body {
  color: var(--bone-secondary);
}

/* === About === */
.about-body .body-text {
  margin-bottom: 1.25rem;
}

.subheading {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--bone);
  margin: 2rem 0 1rem;
}

.skill-list {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.skill-item {
  border: 1px solid var(--ink-border);
  border-radius: 2px;
  padding: 0.25rem 0.75rem;
  font-size: var(--text-sm);
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(17rem, 1fr));
  gap: 1.25rem;
}

.project-card {
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-radius: 3px;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  transition: border-color var(--fade-quick);
}

.project-card:hover {
  border-color: var(--ochre);
}

.card-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 500;
  color: var(--bone);
  cursor: pointer;
}

.card-title:hover {
  color: var(--ochre);
}

.card-summary {
  font-size: var(--text-sm);
  color: var(--bone-secondary);
  flex: 1;
}

/* === Project Detail === */
.panel-detail .panel-header {
  flex-direction: column;
  align-items: flex-start;
  gap: 0.5rem;
}

.detail-body h2 {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--bone);
  margin: 1.75rem 0 0.75rem;
}

.detail-body p {
  margin-bottom: 1rem;
}

.detail-body ul {
  margin: 0 0 1rem 1.25rem;
}

.detail-body li {
  margin-bottom: 0.35rem;
}

/* === Contact Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: var(--text-sm);
  letter-spacing: 0.06em;
  text-transform: uppercase;
  color: var(--bone-muted);
}

.input-field {
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-radius: 2px;
  color: var(--bone);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  padding: 0.6rem 0.8rem;
  transition: border-color var(--fade-quick), box-shadow var(--fade-quick);
}

.input-field:focus {
  outline: none;
  border-color: var(--ochre);
  box-shadow: 0 0 0 3px var(--ochre-glow);
}

.input-field.invalid {
  border-color: var(--problem);
}

.input-field::placeholder {
  color: var(--bone-muted);
  font-style: italic;
}

.field-problem {
  color: var(--problem);
  font-size: var(--text-sm);
}

.form-confirmation {
  color: var(--ochre);
  font-size: var(--text-sm);
}

.form-actions {
  display: flex;
  justify-content: flex-end;
}

.contact-direct {
  margin-top: 2rem;
  font-size: var(--text-sm);
  color: var(--bone-muted);
}

.contact-email {
  color: var(--ochre);
  user-select: all;
}
"#;
