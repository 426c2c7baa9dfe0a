//! Global CSS styles for the portfolio.
//!
//! Dark glass panels, one blue accent, monospace details.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #0b0e14;
  --bg-raised: #121722;
  --muted: #1c2230;
  --border: rgba(91, 140, 255, 0.15);

  /* Accent */
  --primary: #5b8cff;
  --primary-soft: rgba(91, 140, 255, 0.2);
  --secondary: #60a5fa;

  /* Text */
  --text: #e8ecf4;
  --text-muted: rgba(232, 236, 244, 0.6);

  /* Typography */
  --font-display: 'Space Grotesk', 'Inter', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-display);
  background: var(--bg);
  color: var(--text);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.muted {
  color: var(--text-muted);
}

.glass {
  background: rgba(18, 23, 34, 0.6);
  backdrop-filter: blur(12px);
  border: 1px solid var(--border);
}

.page {
  animation: fade-in 0.5s ease both;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 90vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  overflow: hidden;
  background: linear-gradient(135deg, rgba(91, 140, 255, 0.05), transparent 50%, rgba(96, 165, 250, 0.1));
}

.hero-inner {
  display: flex;
  flex-wrap: wrap-reverse;
  align-items: center;
  gap: 3rem;
  padding: 2rem 1.5rem;
}

.hero-text {
  flex: 1 1 28rem;
}

.hero-greeting {
  font-family: var(--font-mono);
  color: var(--primary);
  letter-spacing: 0.1em;
  margin-bottom: 1rem;
}

.hero-name {
  font-size: clamp(2rem, 5vw, 3.75rem);
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: 1rem;
  background: linear-gradient(90deg, var(--primary), var(--secondary));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-headline {
  font-size: clamp(1.25rem, 2.5vw, 1.875rem);
  font-weight: 600;
  color: var(--secondary);
  margin-bottom: 1.5rem;
}

.hero-bio {
  font-family: var(--font-mono);
  font-size: 1.05rem;
  max-width: 36rem;
  padding: 0.75rem;
  border-radius: 0.5rem;
  margin-bottom: 2rem;
  min-height: 3.5rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.hero-avatar {
  flex: 0 1 20rem;
  aspect-ratio: 1;
  position: relative;
  margin: 0 auto;
}

.hero-avatar::before {
  content: '';
  position: absolute;
  inset: -10px;
  border-radius: 50%;
  border: 2px dashed var(--primary-soft);
  animation: rotate-slow 30s linear infinite;
}

.hero-avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 50%;
  animation: float 6s ease-in-out infinite;
  transition: transform var(--transition-slow);
}

.hero-avatar img:hover {
  transform: scale(1.05);
}

.scroll-hint {
  position: absolute;
  bottom: 2.5rem;
  left: 50%;
  transform: translateX(-50%);
  animation: bounce 2s infinite;
}

/* === Typing === */
.typing-cursor {
  color: var(--primary);
  margin-left: 1px;
}

.typing-cursor.hidden {
  visibility: hidden;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 0.375rem;
  font-family: inherit;
  font-size: 0.9rem;
  font-weight: 500;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-lg {
  padding: 0.75rem 1.5rem;
  font-size: 1rem;
}

.btn-primary {
  background: linear-gradient(90deg, var(--primary), var(--secondary));
  border: none;
  color: #fff;
}

.btn-primary:hover {
  box-shadow: 0 8px 24px var(--primary-soft);
}

.btn-outline {
  background: rgba(11, 14, 20, 0.3);
  border: 1px solid var(--border);
  color: var(--text);
}

.btn-outline:hover {
  border-color: var(--primary);
}

.btn-ghost {
  background: transparent;
  border: none;
  color: var(--text-muted);
}

.btn-ghost:hover {
  color: var(--text);
}

/* === Sections === */
.section {
  padding: 5rem 0;
}

.section.alt {
  background: rgba(28, 34, 48, 0.3);
}

.section-heading {
  text-align: center;
  margin-bottom: 3rem;
}

.section-subheading {
  font-family: var(--font-mono);
  color: var(--primary);
  font-size: 0.9rem;
  margin-bottom: 0.5rem;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
}

.section-description {
  margin: 1rem auto 0;
  max-width: 48rem;
  color: var(--text-muted);
}

.section-footer {
  margin-top: 3rem;
  text-align: center;
}

/* === Skills === */
.skill-cloud {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  max-width: 48rem;
  margin: 0 auto;
}

.skill-cloud-item {
  animation: rise 0.4s ease both;
  animation-delay: calc(var(--item-index) * 50ms);
  transition: transform var(--transition-normal);
}

.skill-cloud-item:hover {
  transform: translateY(-5px) scale(1.05);
}

.skill-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.35rem 0.9rem;
  border-radius: 999px;
  font-size: 0.875rem;
  background: var(--bg-raised);
  border: 1px solid color-mix(in srgb, var(--skill-color) 40%, transparent);
}

.skill-dot {
  width: 0.6rem;
  height: 0.6rem;
  border-radius: 50%;
  background: var(--skill-color);
}

.skill-marker {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--primary);
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
  gap: 1.5rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.5rem;
  border-radius: 0.75rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  animation: rise 0.5s ease both;
  animation-delay: calc(var(--item-index) * 100ms);
  transition: border-color var(--transition-normal), transform var(--transition-normal);
}

.project-card:hover {
  border-color: var(--primary);
  transform: translateY(-3px);
}

.project-card.featured {
  min-height: 16rem;
}

.project-title {
  font-size: 1.25rem;
  font-weight: 600;
}

.project-description {
  flex: 1;
  color: var(--text-muted);
  font-size: 0.95rem;
}

.project-topics {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.project-topic {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  padding: 0.15rem 0.5rem;
  border-radius: 999px;
  background: var(--primary-soft);
  color: var(--secondary);
}

.project-meta {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-size: 0.85rem;
  color: var(--text-muted);
}

.project-links {
  display: flex;
  gap: 0.75rem;
}

/* === Skeletons === */
.skeleton {
  background: var(--muted);
  animation: pulse 1.5s ease-in-out infinite;
}

.skeleton-pill {
  width: 6rem;
  height: 2rem;
  border-radius: 999px;
}

.skeleton-card {
  height: 24rem;
  border-radius: 0.75rem;
}

.load-error {
  text-align: center;
  color: var(--text-muted);
}

/* === Keyframes === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes rise {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-8px); }
}

@keyframes rotate-slow {
  to { transform: rotate(360deg); }
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, -10px); }
}
"#;
