//! Global CSS styles for Castboard.
//!
//! Class names match the components in `castboard-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --background: #0f1115;
  --card: #171a21;
  --card-border: #262b36;

  --primary: #7c9cff;
  --primary-ring: rgba(124, 156, 255, 0.2);

  --text-primary: #f3f4f6;
  --text-muted: rgba(243, 244, 246, 0.6);

  --font-sans: 'Inter', system-ui, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-lg: 1.125rem;

  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Gallery === */
.app-shell {
  padding: 1.5rem;
}

.app-title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 1rem;
}

.character-gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1rem;
}

.character-gallery-empty {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Character Card === */
.character-card {
  background: var(--card);
  border: 1px solid var(--card-border);
  border-radius: 0.75rem;
  padding: 1rem;
  transition: all var(--transition-normal);
}

.character-card.active {
  box-shadow: 0 0 0 2px var(--primary-ring);
  animation: pulse 2s ease-in-out infinite;
}

.character-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1rem;
}

.character-info {
  flex: 1;
  min-width: 0;
}

.character-name {
  font-weight: 600;
}

.character-secondary,
.character-status,
.message-preview {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.character-location {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Avatar === */
.character-avatar {
  position: relative;
  flex-shrink: 0;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  overflow: hidden;
  transition: transform var(--transition-normal);
}

.character-avatar.active {
  box-shadow: 0 0 0 2px var(--primary);
  transform: scale(1.1);
}

.avatar-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.avatar-initial {
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-lg);
  font-weight: 600;
  color: #ffffff;
}

.activity-dot {
  position: absolute;
  right: 0;
  bottom: 0;
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  background: var(--primary);
  animation: pulse 2s ease-in-out infinite;
}

/* === Status === */
.status-label {
  display: inline-flex;
  align-items: center;
}

.status-speaking {
  color: var(--primary);
}

.typing-animation {
  margin-left: 0.25rem;
  animation: typing 1.2s steps(4, end) infinite;
  display: inline-block;
  overflow: hidden;
  vertical-align: bottom;
  width: 0;
}

/* === Message Preview === */
.message-preview {
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
  transition: opacity var(--transition-slow);
}

.typing-text {
  animation: shimmer 1.5s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

@keyframes typing {
  to { width: 1.25em; }
}

@keyframes shimmer {
  0%, 100% { filter: brightness(1); }
  50% { filter: brightness(1.3); }
}
"#;
