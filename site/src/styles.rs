//! CSS for the landing page.
//!
//! Injected inline by [`crate::components::App`] and by the prerendered
//! document. All motion is CSS: the logo marquee, hover lifts and the
//! billing toggle knob.

/// Complete stylesheet.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #0b0b12;
    --bg-raised: #14141f;
    --bg-card: #1a1a28;
    --border: #2a2a3c;
    --text: #e8e8f0;
    --text-dim: #9a9ab0;
    --accent: #7c5cff;
    --accent-hover: #9277ff;
    --cyan: #22d3ee;
    --amber: #f59e0b;
    --radius: 16px;
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }

img { max-width: 100%; display: block; }

.container {
    width: 100%;
    max-width: 1160px;
    margin: 0 auto;
    padding: 0 24px;
}

/* ---------- Buttons ---------- */

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 10px 20px;
    border-radius: 999px;
    border: 1px solid transparent;
    font-weight: 600;
    font-size: 15px;
    cursor: pointer;
    transition: background 0.2s ease, border-color 0.2s ease, transform 0.2s ease;
}

.btn:hover { transform: translateY(-1px); }
.btn-lg { padding: 14px 28px; font-size: 16px; }
.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover { background: var(--accent-hover); }
.btn-secondary { background: transparent; border-color: var(--border); }
.btn-secondary:hover { border-color: var(--accent); }
.btn-ghost { background: rgba(255, 255, 255, 0.06); }
.btn-ghost:hover { background: rgba(255, 255, 255, 0.12); }

/* ---------- Gradients ---------- */

.gradient-violet { background: linear-gradient(135deg, #7c5cff, #c026d3); }
.gradient-cyan { background: linear-gradient(135deg, #0ea5e9, #22d3ee); }
.gradient-amber { background: linear-gradient(135deg, #f59e0b, #ef4444); }

.gradient-text {
    background: linear-gradient(90deg, var(--accent), var(--cyan));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

/* ---------- Navbar ---------- */

.nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(11, 11, 18, 0.85);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 68px;
}

.nav-brand { display: flex; align-items: center; gap: 10px; font-weight: 700; font-size: 18px; }
.nav-logo { width: 32px; height: 32px; }
.nav-links { display: flex; align-items: center; gap: 28px; }
.nav-link { color: var(--text-dim); font-size: 15px; transition: color 0.2s ease; }
.nav-link:hover { color: var(--text); }

.nav-menu-toggle {
    display: none;
    background: none;
    border: none;
    color: var(--text);
    cursor: pointer;
}

@media (max-width: 860px) {
    .nav-menu-toggle { display: block; }
    .nav-links {
        display: none;
        position: absolute;
        top: 68px;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 24px;
        background: var(--bg-raised);
        border-bottom: 1px solid var(--border);
    }
    .nav-links.open { display: flex; }
}

/* ---------- Hero ---------- */

.hero { padding: 96px 0 64px; }

.hero-grid {
    display: grid;
    grid-template-columns: 1.1fr 1fr;
    gap: 48px;
    align-items: center;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 6px 14px;
    border-radius: 999px;
    border: 1px solid var(--border);
    color: var(--text-dim);
    font-size: 13px;
}

.hero-badge-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #22c55e;
    box-shadow: 0 0 8px #22c55e;
}

.hero-title { font-size: clamp(40px, 6vw, 64px); line-height: 1.1; margin: 20px 0; }
.hero-description { color: var(--text-dim); font-size: 18px; max-width: 540px; }
.hero-actions { display: flex; gap: 16px; margin-top: 32px; flex-wrap: wrap; }

.hero-screenshot {
    border-radius: var(--radius);
    border: 1px solid var(--border);
    box-shadow: 0 30px 80px rgba(124, 92, 255, 0.25);
}

@media (max-width: 860px) {
    .hero-grid { grid-template-columns: 1fr; }
}

/* ---------- Social proof ---------- */

.social-proof { padding: 32px 0; border-block: 1px solid var(--border); overflow: hidden; }

.social-proof-title {
    text-align: center;
    color: var(--text-dim);
    font-size: 13px;
    text-transform: uppercase;
    letter-spacing: 0.12em;
}

.logo-marquee {
    mask-image: linear-gradient(90deg, transparent, #000 10%, #000 90%, transparent);
}

.logo-track {
    display: flex;
    gap: 64px;
    width: max-content;
    animation: logo-scroll 40s linear infinite;
}

.logo-item { height: 32px; opacity: 0.6; filter: grayscale(1); transition: opacity 0.2s ease; }
.logo-item:hover { opacity: 1; }

/* The track holds three copies of the logos; scrolling one copy loops seamlessly. */
@keyframes logo-scroll {
    from { transform: translateX(0); }
    to { transform: translateX(calc(-100% / 3)); }
}

/* ---------- Sections ---------- */

.features, .how-it-works, .pricing, .testimonials { padding: 96px 0; }

.section-header { text-align: center; max-width: 680px; margin: 0 auto 56px; }

.section-eyebrow {
    color: var(--accent);
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 13px;
}

.section-title { font-size: clamp(28px, 4vw, 40px); margin: 8px 0 16px; }
.section-description { color: var(--text-dim); }

.features-grid, .testimonials-grid, .tutorials-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 24px;
}

.feature-card, .testimonial-card, .step-card {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 28px;
    transition: transform 0.2s ease, border-color 0.2s ease;
}

.feature-card:hover { transform: translateY(-4px); border-color: var(--accent); }

.feature-icon {
    display: inline-flex;
    padding: 12px;
    border-radius: 12px;
    color: #fff;
}

.feature-title, .step-title { font-size: 20px; margin: 16px 0 8px; }
.feature-description, .step-description { color: var(--text-dim); margin: 0; }

/* ---------- How it works ---------- */

.steps {
    list-style: none;
    padding: 0;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
}

.step-card { position: relative; }

.step-number {
    position: absolute;
    top: 20px;
    right: 24px;
    font-size: 40px;
    font-weight: 800;
    color: var(--border);
}

.step-icon { color: var(--accent); }

@media (max-width: 860px) {
    .steps { grid-template-columns: 1fr; }
}

.tutorials { margin-top: 64px; }
.tutorials-title { text-align: center; margin-bottom: 24px; }

.tutorial-card {
    display: block;
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    overflow: hidden;
}

.tutorial-media { position: relative; aspect-ratio: 16 / 9; background: var(--bg-raised); }
.tutorial-thumbnail { width: 100%; height: 100%; object-fit: cover; }

.tutorial-placeholder {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--accent);
}

.tutorial-duration {
    position: absolute;
    bottom: 10px;
    right: 10px;
    padding: 2px 8px;
    border-radius: 6px;
    background: rgba(0, 0, 0, 0.7);
    font-size: 12px;
}

.tutorial-body { padding: 16px 20px; }
.tutorial-title { margin: 0 0 4px; }
.tutorial-description { margin: 0; color: var(--text-dim); font-size: 14px; }

/* ---------- Pricing ---------- */

.billing-toggle {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 12px;
    margin-bottom: 48px;
}

.billing-label { color: var(--text-dim); font-weight: 600; transition: color 0.2s ease; }
.billing-label.active { color: var(--text); }

.toggle-switch {
    position: relative;
    width: 52px;
    height: 28px;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: var(--bg-raised);
    cursor: pointer;
    transition: background 0.2s ease;
}

.toggle-switch.on { background: var(--accent); }

.toggle-knob {
    position: absolute;
    top: 3px;
    left: 3px;
    width: 20px;
    height: 20px;
    border-radius: 50%;
    background: #fff;
    transition: transform 0.2s ease;
}

.toggle-switch.on .toggle-knob { transform: translateX(24px); }

.savings-badge {
    padding: 4px 10px;
    border-radius: 999px;
    background: rgba(34, 197, 94, 0.15);
    color: #22c55e;
    font-size: 13px;
    font-weight: 600;
}

.plans-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 24px;
    max-width: 820px;
    margin: 0 auto;
}

.plan-card {
    position: relative;
    padding: 36px 32px;
    border-radius: var(--radius);
    border: 1px solid var(--border);
    background: var(--bg-card) !important;
}

.plan-card.popular { border: 2px solid var(--accent); }

.plan-badge {
    position: absolute;
    top: -14px;
    left: 50%;
    transform: translateX(-50%);
    padding: 4px 14px;
    border-radius: 999px;
    background: var(--accent);
    color: #fff;
    font-size: 13px;
    font-weight: 600;
}

.plan-name { margin: 0; font-size: 22px; }
.plan-description { color: var(--text-dim); margin: 4px 0 20px; }
.plan-amount { font-size: 48px; font-weight: 800; }
.plan-period { color: var(--text-dim); }
.plan-billed { color: var(--text-dim); font-size: 14px; margin: 4px 0 0; }
.plan-features { list-style: none; padding: 0; margin: 24px 0 32px; }
.plan-feature { display: flex; align-items: center; gap: 10px; padding: 6px 0; }
.plan-check { color: #22c55e; flex-shrink: 0; }

/* ---------- Testimonials ---------- */

.testimonial-card { margin: 0; }
.testimonial-mark { color: var(--accent); }
.testimonial-quote { margin: 16px 0; font-size: 17px; }
.testimonial-author { display: flex; flex-direction: column; color: var(--text-dim); font-size: 14px; }
.testimonial-author strong { color: var(--text); }

/* ---------- Final CTA ---------- */

.final-cta { padding: 96px 0; }

.final-cta-inner {
    text-align: center;
    padding: 64px 24px;
    border-radius: 24px;
    background: linear-gradient(135deg, rgba(124, 92, 255, 0.25), rgba(34, 211, 238, 0.15));
    border: 1px solid var(--border);
}

.final-cta-title { font-size: clamp(28px, 4vw, 44px); margin: 0 0 12px; }
.final-cta-description { color: var(--text-dim); }
.final-cta-actions { display: flex; gap: 16px; justify-content: center; margin-top: 32px; flex-wrap: wrap; }

/* ---------- Footer ---------- */

.footer { border-top: 1px solid var(--border); padding: 64px 0 32px; }

.footer-grid {
    display: grid;
    grid-template-columns: 2fr repeat(3, 1fr);
    gap: 40px;
}

.footer-brand { display: flex; flex-direction: column; gap: 8px; }
.footer-logo { width: 36px; height: 36px; }
.footer-title { font-weight: 700; font-size: 18px; }
.footer-tagline, .footer-contact { color: var(--text-dim); font-size: 14px; margin: 0; }
.footer-social { display: flex; gap: 10px; margin-top: 12px; }

.social-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 36px;
    height: 36px;
    border-radius: 50%;
    border: 1px solid var(--border);
    color: var(--text-dim);
    transition: color 0.2s ease, border-color 0.2s ease;
}

.social-button:hover { color: var(--text); border-color: var(--accent); }

.footer-group-title { margin: 0 0 16px; font-size: 14px; text-transform: uppercase; letter-spacing: 0.08em; }
.footer-links { list-style: none; padding: 0; margin: 0; }
.footer-links li { padding: 4px 0; }
.footer-link { color: var(--text-dim); font-size: 14px; }
.footer-link:hover { color: var(--text); }

.footer-copyright {
    text-align: center;
    color: var(--text-dim);
    font-size: 13px;
    margin-top: 48px;
}

@media (max-width: 860px) {
    .footer-grid { grid-template-columns: 1fr 1fr; }
}

/* ---------- Error fallback ---------- */

.error-fallback {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 24px;
}

.error-fallback-card {
    max-width: 460px;
    text-align: center;
    padding: 48px 32px;
    border-radius: var(--radius);
    background: var(--bg-card);
    border: 1px solid var(--border);
}

.error-fallback-icon { color: var(--amber); margin: 0 auto; }
.error-fallback-title { font-size: 26px; margin: 16px 0 8px; }
.error-fallback-message { color: var(--text-dim); margin-bottom: 28px; word-break: break-word; }
"#;
